use crate::core::firewall::{FirewallUpdate, InboundRule};
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Rule Merge
-------------------------------------------------------------------------------------------------*/

/// Merge `addresses` into `rules` for each port token in `ports`, in input order.
///
/// Ports are processed independently. For each port:
///
/// - The first rule whose `ports` field equals the port token exactly (string equality, not
///   numeric or range-aware comparison) has its source addresses replaced wholesale with
///   `addresses`. Other source kinds on that rule (droplet ids, tags, ...) are preserved.
/// - Any later rule with the same `ports` token is removed, so at most one rule per distinct
///   `ports` value remains after the merge.
/// - If no rule matches, a new TCP rule for the port is appended with `addresses` as its
///   sources.
pub fn replace_port_sources(rules: &mut Vec<InboundRule>, ports: &[String], addresses: &[String]) {
    for port in ports {
        let mut matched = false;

        rules.retain_mut(|rule| {
            if rule.ports != *port {
                return true;
            }

            if matched {
                debug!("Dropping duplicate rule for port {port}");
                return false;
            }

            info!(
                "Replacing sources on the existing {} rule for port {port}",
                rule.protocol
            );
            rule.sources.addresses = Some(addresses.to_vec());
            matched = true;
            true
        });

        if !matched {
            info!("Appending a new tcp rule for port {port}");
            rules.push(InboundRule::allow_tcp(port, addresses));
        }
    }
}

/*--------------------------------------------------------------------------------------
  Firewall Update Merge Method
--------------------------------------------------------------------------------------*/

impl FirewallUpdate {
    /// Merge `addresses` into this firewall's inbound rules for the given ports.
    /// See [replace_port_sources].
    pub fn apply_inbound_addresses(&mut self, ports: &[String], addresses: &[String]) {
        replace_port_sources(&mut self.inbound_rules, ports, addresses);
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
