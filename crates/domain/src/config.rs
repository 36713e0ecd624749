use serde::Deserialize;

/// Codec settings supplied by the host process.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Largest payload, in bytes, the codec will attempt to decode
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,

    /// Emit indented JSON instead of the compact form
    #[serde(default)]
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
            pretty: false,
        }
    }
}

fn default_max_payload_bytes() -> usize {
    1_048_576
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_section() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_payload_bytes, 1_048_576);
        assert!(!config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"max_payload_bytes": 4096, "pretty": true}"#).unwrap();
        assert_eq!(config.max_payload_bytes, 4096);
        assert!(config.pretty);
    }
}
