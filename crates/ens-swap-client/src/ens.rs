//! Name lookup sequence and the preferences read from text records.

use crate::error::Result;
use async_trait::async_trait;

pub const SLIPPAGE_RECORD: &str = "slippage";
pub const FEE_RECORD: &str = "fee";

/// Name resolution, provided by the RPC library. Normalization happens there.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve_address(&self, name: &str) -> Result<Option<String>>;

    async fn text_record(&self, name: &str, key: &str) -> Result<Option<String>>;
}

/// Raw `slippage` and `fee` text records of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePreferences {
    pub slippage: Option<String>,
    pub fee: Option<String>,
}

impl NamePreferences {
    /// Fee tier from the `fee` record; `None` when absent or not a number.
    pub fn fee_tier(&self) -> Option<u32> {
        self.fee.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    pub fn slippage_bps(&self) -> Option<u32> {
        self.slippage.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NameLookup {
    #[default]
    Idle,
    Resolving {
        name: String,
    },
    Resolved {
        name: String,
        address: String,
        preferences: NamePreferences,
    },
    NotFound {
        name: String,
    },
}

impl NameLookup {
    pub fn is_resolving(&self) -> bool {
        matches!(self, NameLookup::Resolving { .. })
    }
}

/// Resolve `name` and, when it has an address, its preference records.
///
/// Resolver failures count as not found; the page only distinguishes
/// "resolved" from "could not resolve".
pub async fn lookup_name<R>(resolver: &R, name: &str) -> NameLookup
where
    R: NameResolver + ?Sized,
{
    let address = match resolver.resolve_address(name).await {
        Ok(Some(address)) => address,
        Ok(None) => {
            tracing::debug!(name, "name has no address");
            return NameLookup::NotFound {
                name: name.to_string(),
            };
        }
        Err(e) => {
            tracing::warn!(name, error = %e, "name resolution failed");
            return NameLookup::NotFound {
                name: name.to_string(),
            };
        }
    };

    let preferences = NamePreferences {
        slippage: read_record(resolver, name, SLIPPAGE_RECORD).await,
        fee: read_record(resolver, name, FEE_RECORD).await,
    };
    tracing::debug!(name, %address, ?preferences, "name resolved");

    NameLookup::Resolved {
        name: name.to_string(),
        address,
        preferences,
    }
}

async fn read_record<R>(resolver: &R, name: &str, key: &str) -> Option<String>
where
    R: NameResolver + ?Sized,
{
    match resolver.text_record(name, key).await {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            tracing::warn!(name, key, error = %e, "text record lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeResolver;

    #[tokio::test]
    async fn resolves_address_and_records() {
        let resolver = FakeResolver::default()
            .with_address("alice.eth", "0xa11ce")
            .with_text("alice.eth", SLIPPAGE_RECORD, "75")
            .with_text("alice.eth", FEE_RECORD, "10000");

        let lookup = lookup_name(&resolver, "alice.eth").await;

        assert_eq!(
            lookup,
            NameLookup::Resolved {
                name: "alice.eth".to_string(),
                address: "0xa11ce".to_string(),
                preferences: NamePreferences {
                    slippage: Some("75".to_string()),
                    fee: Some("10000".to_string()),
                },
            }
        );
    }

    #[tokio::test]
    async fn missing_records_are_none() {
        let resolver = FakeResolver::default()
            .with_address("carol.eth", "0xca201")
            .with_text("carol.eth", SLIPPAGE_RECORD, "");

        let lookup = lookup_name(&resolver, "carol.eth").await;

        match lookup {
            NameLookup::Resolved { preferences, .. } => {
                assert_eq!(preferences, NamePreferences::default());
            }
            other => panic!("expected resolved, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolver_errors_mean_not_found() {
        let lookup = lookup_name(&FakeResolver::broken(), "alice.eth").await;

        assert_eq!(
            lookup,
            NameLookup::NotFound {
                name: "alice.eth".to_string()
            }
        );
    }

    #[test]
    fn parses_numeric_preferences() {
        let prefs = NamePreferences {
            slippage: Some(" 30 ".to_string()),
            fee: Some("0.3%".to_string()),
        };

        assert_eq!(prefs.slippage_bps(), Some(30));
        assert_eq!(prefs.fee_tier(), None);
        assert!(!NameLookup::Idle.is_resolving());
        assert!(NameLookup::Resolving {
            name: "x".to_string()
        }
        .is_resolving());
    }
}
