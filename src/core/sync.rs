use crate::core::aws::RangesClient;
use crate::core::digitalocean::FirewallClient;
use crate::core::errors::{Error, Result};
use crate::core::firewall::{Firewall, FirewallUpdate};
use crate::core::prefix_type::PrefixType;
use crate::core::ranges::FeedPrefix;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Synchronization Options
-------------------------------------------------------------------------------------------------*/

/// What a synchronization run applies: which AWS service's prefixes, to which inbound ports,
/// restricted to which address family, and whether the result is actually pushed.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// AWS service name the feed is filtered by (exact match).
    pub service: String,

    /// Inbound port tokens to merge the prefixes into, processed in order.
    pub ports: Vec<String>,

    /// Restrict the feed filter to a single address family; `None` selects both.
    pub prefix_type: Option<PrefixType>,

    /// Merge without pushing the updated document back to the provider.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            service: "CLOUDFRONT".to_string(),
            ports: vec!["443".to_string(), "80".to_string()],
            prefix_type: None,
            dry_run: false,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Synchronization Outcome
-------------------------------------------------------------------------------------------------*/

/// The result of a synchronization run.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// The feed's publication token at the time of the run.
    pub sync_token: String,

    /// The feed prefix records applied to the firewall, in feed order.
    pub prefixes: Vec<FeedPrefix>,

    /// The applied prefixes rendered as CIDR strings, as pushed into the rules.
    pub addresses: Vec<String>,

    /// The merged firewall document that was (or, on a dry run, would have been) submitted.
    pub update: FirewallUpdate,

    /// The provider's acknowledgement of the push; `None` on a dry run.
    pub acknowledgement: Option<Firewall>,
}

/*-------------------------------------------------------------------------------------------------
  Synchronize
-------------------------------------------------------------------------------------------------*/

/// Run one synchronization: fetch the firewall's current rules, fetch the AWS IP Ranges feed,
/// merge the service's prefixes into the inbound rules for the target ports, and push the
/// updated document back. The stages run strictly in sequence; the first failure aborts the
/// run, so a failed fetch never results in a push.
pub fn synchronize(
    firewall_client: &FirewallClient,
    ranges_client: &RangesClient,
    options: &SyncOptions,
) -> Result<SyncOutcome> {
    let firewall = firewall_client.get_firewall()?;
    info!(
        "Fetched firewall {:?} with {} inbound rules",
        firewall.name,
        firewall.inbound_rules.len()
    );

    let ip_ranges = ranges_client.get_ranges()?;
    info!(
        "Fetched AWS IP Ranges published {} (sync token {}, {} prefixes)",
        ip_ranges.create_date(),
        ip_ranges.sync_token(),
        ip_ranges.prefixes().len()
    );

    let matched = ip_ranges.service_prefixes(&options.service, options.prefix_type);
    if matched.is_empty() {
        // An empty allow-list would close the firewall; abort before any mutation.
        return Err(Error::EmptyPrefixList {
            service: options.service.clone(),
        });
    }
    info!(
        "{} prefixes match service {:?}",
        matched.len(),
        options.service
    );

    let addresses: Vec<String> = matched
        .iter()
        .map(|feed_prefix| feed_prefix.prefix.to_string())
        .collect();
    let prefixes: Vec<FeedPrefix> = matched.into_iter().cloned().collect();

    let mut update = firewall.into_update();
    update.apply_inbound_addresses(&options.ports, &addresses);

    let acknowledgement = if options.dry_run {
        warn!("Dry run: the updated rules were not pushed to DigitalOcean");
        None
    } else {
        info!(
            "Pushing {} inbound rules to firewall {}",
            update.inbound_rules.len(),
            firewall_client.firewall_id()
        );
        Some(firewall_client.put_firewall(&update)?)
    };

    Ok(SyncOutcome {
        sync_token: ip_ranges.sync_token().to_string(),
        prefixes,
        addresses,
        update,
        acknowledgement,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
