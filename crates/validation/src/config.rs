//! Validator configuration.

/// Environment variable controlling [`ValidationConfig::forbid_unknown_fields`].
pub const FORBID_UNKNOWN_FIELDS_ENV: &str = "VALIDATION_FORBID_UNKNOWN_FIELDS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    /// Report keys that no descriptor declares instead of ignoring them.
    pub forbid_unknown_fields: bool,
}

impl ValidationConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (lets tests avoid touching the
    /// process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(FORBID_UNKNOWN_FIELDS_ENV) {
            match parse_bool(&raw) {
                Some(v) => config.forbid_unknown_fields = v,
                None => tracing::warn!(
                    key = FORBID_UNKNOWN_FIELDS_ENV,
                    value = %raw,
                    "unrecognised boolean; using default"
                ),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
