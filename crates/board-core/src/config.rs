//! Board Configuration

use serde::{Deserialize, Serialize};

/// Default key of the persisted slot
pub const DEFAULT_STORAGE_KEY: &str = "cards";

/// Data-transfer format carrying the dragged card id
pub const PAYLOAD_FORMAT: &str = "cardId";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key of the single persisted slot
    pub storage_key: String,
    /// Start from the sample board when nothing is persisted
    pub seed_when_empty: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_when_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"seed_when_empty":true}"#).unwrap();
        assert_eq!(config.storage_key, "cards");
        assert!(config.seed_when_empty);
    }
}
