use crate::core::errors::Result;
use crate::core::json;
use crate::core::prefix_type::PrefixType;
use chrono::{DateTime, Utc};
use ipnetwork::IpNetwork;

/*-------------------------------------------------------------------------------------------------
  Feed Prefix
-------------------------------------------------------------------------------------------------*/

/// A single prefix record from the AWS IP Ranges feed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedPrefix {
    /// IPv4 or IPv6 prefix.
    pub prefix: IpNetwork,

    /// AWS region the prefix is associated with.
    pub region: String,

    /// Network border group the prefix is associated with.
    pub network_border_group: String,

    /// AWS service that uses the prefix.
    pub service: String,
}

/*-------------------------------------------------------------------------------------------------
  IP Ranges
-------------------------------------------------------------------------------------------------*/

/// The AWS IP Ranges feed, parsed into an owned document. Prefix records keep the feed's
/// publication order: IPv4 prefixes first, then IPv6 prefixes.
#[derive(Clone, Debug, Default)]
pub struct IpRanges {
    pub(crate) sync_token: String,
    pub(crate) create_date: DateTime<Utc>,
    pub(crate) prefixes: Vec<FeedPrefix>,
}

impl IpRanges {
    /// The "sync token" is a string containing the publication time for the current set of AWS
    /// IP Ranges, in Unix epoch time format.
    pub fn sync_token(&self) -> &str {
        &self.sync_token
    }

    pub fn create_date(&self) -> &DateTime<Utc> {
        &self.create_date
    }

    pub fn prefixes(&self) -> &[FeedPrefix] {
        &self.prefixes
    }

    /*-------------------------------------------------------------------------
      Service Filter
    -------------------------------------------------------------------------*/

    /// Select the prefixes published for `service` (exact string match), preserving feed order.
    /// `prefix_type` restricts the selection to a single address family; `None` selects both.
    pub fn service_prefixes(
        &self,
        service: &str,
        prefix_type: Option<PrefixType>,
    ) -> Vec<&FeedPrefix> {
        self.prefixes
            .iter()
            .filter(|feed_prefix| feed_prefix.service == service)
            .filter(|feed_prefix| match prefix_type {
                Some(prefix_type) => {
                    (prefix_type.is_ipv4() && feed_prefix.prefix.is_ipv4())
                        || (prefix_type.is_ipv6() && feed_prefix.prefix.is_ipv6())
                }
                None => true,
            })
            .collect()
    }

    /*-------------------------------------------------------------------------
      Parse
    -------------------------------------------------------------------------*/

    pub fn from_json(json: &str) -> Result<IpRanges> {
        let json_ip_ranges = json::parse(json)?;

        let prefixes = json_ip_ranges
            .prefixes
            .iter()
            .map(|prefix| FeedPrefix {
                prefix: IpNetwork::V4(prefix.ip_prefix),
                region: prefix.region.to_string(),
                network_border_group: prefix.network_border_group.to_string(),
                service: prefix.service.to_string(),
            })
            .chain(
                json_ip_ranges
                    .ipv6_prefixes
                    .iter()
                    .map(|ipv6_prefix| FeedPrefix {
                        prefix: IpNetwork::V6(ipv6_prefix.ipv6_prefix),
                        region: ipv6_prefix.region.to_string(),
                        network_border_group: ipv6_prefix.network_border_group.to_string(),
                        service: ipv6_prefix.service.to_string(),
                    }),
            )
            .collect();

        Ok(IpRanges {
            sync_token: json_ip_ranges.sync_token.to_string(),
            create_date: json_ip_ranges.create_date,
            prefixes,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
