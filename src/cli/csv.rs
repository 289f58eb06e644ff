use firewallsync::{Error, Result, SyncOutcome};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Applied Prefixes to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(outcome: &SyncOutcome, path: &Path) -> Result<()> {
    let csv_error = |source: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    // Write header
    writer
        .serialize(["AWS IP Prefix", "Region", "Network Border Group", "Service"])
        .map_err(csv_error)?;

    // Write prefix records
    for feed_prefix in &outcome.prefixes {
        let record = (
            feed_prefix.prefix.to_string(),
            &feed_prefix.region,
            &feed_prefix.network_border_group,
            &feed_prefix.service,
        );
        writer.serialize(record).map_err(csv_error)?;
    }

    writer
        .flush()
        .map_err(|source| csv_error(source.into()))?;

    Ok(())
}
