//! Synchronize a DigitalOcean cloud firewall's inbound allow-list with the IP prefixes AWS
//! publishes for one of its services.
//!
//! One synchronization run performs four strictly sequential steps: fetch the firewall's
//! current rule document, download the AWS IP Ranges feed, merge the prefixes published for
//! the configured service into the inbound rules for the target ports, and push the updated
//! document back. There is no retry, no cache, and no partial success: the first failure
//! aborts the run.
//!
//! ```no_run
//! # fn main() -> firewallsync::Result<()> {
//! let firewall_client = firewallsync::FirewallClientBuilder::new()
//!     .firewall_id("fb6045f1-cf1d-4ca3-bfac-18832663025b")
//!     .build()?;
//! let ranges_client = firewallsync::RangesClientBuilder::new().build()?;
//!
//! let outcome = firewallsync::synchronize(
//!     &firewall_client,
//!     &ranges_client,
//!     &firewallsync::SyncOptions::default(),
//! )?;
//!
//! println!(
//!     "Applied {} prefixes to {} inbound rules",
//!     outcome.prefixes.len(),
//!     outcome.update.inbound_rules.len()
//! );
//! # Ok(())
//! # }
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Public API
-------------------------------------------------------------------------------------------------*/

pub use crate::core::aws::{RangesClient, RangesClientBuilder};
pub use crate::core::digitalocean::{FirewallClient, FirewallClientBuilder};
pub use crate::core::errors::{Error, Provider, Result};
pub use crate::core::firewall::{
    Firewall, FirewallEnvelope, FirewallUpdate, InboundRule, OutboundRule, RuleTarget,
};
pub use crate::core::merge::replace_port_sources;
pub use crate::core::prefix_type::PrefixType;
pub use crate::core::ranges::{FeedPrefix, IpRanges};
pub use crate::core::sync::{synchronize, SyncOptions, SyncOutcome};
