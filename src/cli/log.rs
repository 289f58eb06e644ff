use firewallsync::SyncOutcome;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Logger Initialization
--------------------------------------------------------------------------------------*/

pub fn init(verbosity: &clap_verbosity_flag::Verbosity) {
    stderrlog::new()
        .module("firewallsync")
        .verbosity(verbosity.log_level_filter())
        .init()
        .unwrap();
}

/*--------------------------------------------------------------------------------------
  Synchronization Outcome
--------------------------------------------------------------------------------------*/

pub fn outcome(outcome: &SyncOutcome) {
    let count_prefixes = outcome.prefixes.len();
    let sync_token = &outcome.sync_token;
    info!("Applied {count_prefixes} AWS IP prefixes (feed sync token {sync_token})");

    match &outcome.acknowledgement {
        Some(firewall) => {
            let status = firewall.status.as_deref().unwrap_or("unknown");
            info!("Firewall {:?} updated; status: {status}", firewall.name);
        }
        None => warn!("Dry run: no changes were pushed"),
    }
}
