use crate::cli;
use firewallsync::{
    FirewallClientBuilder, PrefixType, RangesClientBuilder, Result, SyncOptions,
};

/*-------------------------------------------------------------------------------------------------
  Core Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Run a Synchronization from CLI Arguments
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args) -> Result<()> {
    let mut firewall_builder = FirewallClientBuilder::new();
    if let Some(firewall_id) = &args.firewall {
        firewall_builder.firewall_id(firewall_id);
    }
    if let Some(timeout) = args.timeout {
        firewall_builder.timeout(timeout);
    }
    let firewall_client = firewall_builder.build()?;

    let mut ranges_builder = RangesClientBuilder::new();
    if let Some(timeout) = args.timeout {
        ranges_builder.timeout(timeout);
    }
    let ranges_client = ranges_builder.build()?;

    let options = SyncOptions {
        service: args.service.to_uppercase(),
        ports: args.ports.clone(),
        prefix_type: build_prefix_type(args),
        dry_run: args.dry_run,
    };

    let outcome = firewallsync::synchronize(&firewall_client, &ranges_client, &options)?;

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&outcome, csv_file)?;
    }

    cli::output::rule_table(&outcome);
    cli::log::outcome(&outcome);

    Ok(())
}

/*--------------------------------------------------------------------------------------
  Build Prefix Type Filter from CLI Arguments
--------------------------------------------------------------------------------------*/

pub fn build_prefix_type(args: &cli::Args) -> Option<PrefixType> {
    match (args.ipv4, args.ipv6) {
        (true, false) => Some(PrefixType::IPv4),
        (false, true) => Some(PrefixType::IPv6),
        _ => None,
    }
}
