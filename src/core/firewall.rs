use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Firewall
-------------------------------------------------------------------------------------------------*/

/// A DigitalOcean cloud firewall as returned by `GET /v2/firewalls/{id}`.
///
/// The `id`, `status`, `created_at`, and `pending_changes` fields are assigned by the provider
/// and must not appear in an update request; [Firewall::into_update] produces the submission
/// view without them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Firewall {
    pub id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub pending_changes: Option<serde_json::Value>,

    pub name: String,

    #[serde(default)]
    pub inbound_rules: Vec<InboundRule>,

    #[serde(default)]
    pub outbound_rules: Vec<OutboundRule>,

    #[serde(default)]
    pub droplet_ids: Vec<u64>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Firewall {
    /// Strip the provider-assigned metadata, leaving the document accepted by
    /// `PUT /v2/firewalls/{id}`.
    pub fn into_update(self) -> FirewallUpdate {
        FirewallUpdate {
            name: self.name,
            inbound_rules: self.inbound_rules,
            outbound_rules: self.outbound_rules,
            droplet_ids: self.droplet_ids,
            tags: self.tags,
        }
    }
}

/*--------------------------------------------------------------------------------------
  Firewall Envelope
--------------------------------------------------------------------------------------*/

/// The `{"firewall": {...}}` envelope DigitalOcean wraps firewall documents in.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FirewallEnvelope {
    pub firewall: Firewall,
}

/*--------------------------------------------------------------------------------------
  Firewall Update
--------------------------------------------------------------------------------------*/

/// The firewall document submitted back to the provider. This type cannot represent the
/// provider-assigned fields, so a serialized update never contains them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FirewallUpdate {
    pub name: String,
    pub inbound_rules: Vec<InboundRule>,
    pub outbound_rules: Vec<OutboundRule>,
    pub droplet_ids: Vec<u64>,
    pub tags: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Firewall Rules
-------------------------------------------------------------------------------------------------*/

/// An inbound firewall rule. `ports` is an opaque token ("443", "8000-9000", "all") used as an
/// exact-match key when merging.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InboundRule {
    pub protocol: String,
    pub ports: String,
    pub sources: RuleTarget,
}

impl InboundRule {
    /// A new TCP allow rule for `port` admitting the given source addresses.
    pub fn allow_tcp(port: &str, addresses: &[String]) -> Self {
        InboundRule {
            protocol: "tcp".to_string(),
            ports: port.to_string(),
            sources: RuleTarget {
                addresses: Some(addresses.to_vec()),
                ..RuleTarget::default()
            },
        }
    }
}

/// An outbound firewall rule. Never modified by a synchronization run; carried through the
/// fetch/update round trip untouched.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OutboundRule {
    pub protocol: String,
    pub ports: String,
    pub destinations: RuleTarget,
}

/*--------------------------------------------------------------------------------------
  Rule Target
--------------------------------------------------------------------------------------*/

/// The sources (inbound) or destinations (outbound) a rule applies to. A rule may be keyed on
/// any combination of these; kinds this tool does not manage must survive the round trip
/// unmodified.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RuleTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub droplet_ids: Option<Vec<u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_uids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
