use crate::core::errors::{Error, Provider, Result};
use chrono::{DateTime, Utc};
use ipnetwork::{Ipv4Network, Ipv6Network};
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonIpRanges<'_>> {
    serde_json::from_str(json).map_err(|source| Error::InvalidJson {
        provider: Provider::AwsIpRanges,
        source,
    })
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

/// Wire format of the AWS IP Ranges feed document.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpRanges<'j> {
    #[serde(rename = "syncToken")]
    pub sync_token: &'j str,

    #[serde(rename = "createDate", with = "crate::core::datetime")]
    pub create_date: DateTime<Utc>,

    pub prefixes: Vec<JsonIpPrefix<'j>>,

    pub ipv6_prefixes: Vec<JsonIpv6Prefix<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpPrefix<'j> {
    pub ip_prefix: Ipv4Network,
    pub region: &'j str,
    pub network_border_group: &'j str,
    pub service: &'j str,
}

/*--------------------------------------------------------------------------------------
  JSON IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpv6Prefix<'j> {
    pub ipv6_prefix: Ipv6Network,
    pub region: &'j str,
    pub network_border_group: &'j str,
    pub service: &'j str,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_feed_document() {
        let feed_json = r#"{
          "syncToken": "1640995200",
          "createDate": "2022-01-01-00-00-00",
          "prefixes": [
            {
              "ip_prefix": "13.32.0.0/15",
              "region": "GLOBAL",
              "network_border_group": "GLOBAL",
              "service": "CLOUDFRONT"
            }
          ],
          "ipv6_prefixes": [
            {
              "ipv6_prefix": "2600:9000::/28",
              "region": "GLOBAL",
              "network_border_group": "GLOBAL",
              "service": "CLOUDFRONT"
            }
          ]
        }"#;

        let parsed_value = parse(feed_json).unwrap();

        let create_date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let sync_token = create_date.timestamp().to_string();
        let expected_value = JsonIpRanges {
            sync_token: &sync_token,
            create_date,
            prefixes: vec![JsonIpPrefix {
                ip_prefix: "13.32.0.0/15".parse().unwrap(),
                region: "GLOBAL",
                network_border_group: "GLOBAL",
                service: "CLOUDFRONT",
            }],
            ipv6_prefixes: vec![JsonIpv6Prefix {
                ipv6_prefix: "2600:9000::/28".parse().unwrap(),
                region: "GLOBAL",
                network_border_group: "GLOBAL",
                service: "CLOUDFRONT",
            }],
        };

        assert_eq!(parsed_value, expected_value);
    }

    #[test]
    fn test_parse_invalid_json_is_an_invalid_json_error() {
        let result = parse("not json");
        assert!(matches!(
            result,
            Err(Error::InvalidJson {
                provider: Provider::AwsIpRanges,
                ..
            })
        ));
    }
}
