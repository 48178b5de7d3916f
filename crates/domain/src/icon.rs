//! Icon — the closed set of pictograms a service can display.
//!
//! The admin boundary rejects free-form icon names ([`Icon::parse`]),
//! while values read back from storage degrade to [`Icon::Unknown`]
//! instead of failing the whole read ([`Icon::from_stored`]).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pictogram shown next to a service on the marketing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Cloud,
    Mobile,
    Design,
    Database,
    Security,
    Automation,
    Network,
    /// Fallback for stored names that no longer match any variant.
    #[default]
    Unknown,
}

impl Icon {
    /// Strict parse for data entry. Unknown names are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownIcon`] when `name` matches no
    /// variant.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match Self::from_stored(name) {
            Self::Unknown => Err(ValidationError::UnknownIcon(name.to_string())),
            icon => Ok(icon),
        }
    }

    /// Lenient parse for values read back from storage.
    #[must_use]
    pub fn from_stored(name: &str) -> Self {
        match name {
            "code" => Self::Code,
            "cloud" => Self::Cloud,
            "mobile" => Self::Mobile,
            "design" => Self::Design,
            "database" => Self::Database,
            "security" => Self::Security,
            "automation" => Self::Automation,
            "network" => Self::Network,
            _ => Self::Unknown,
        }
    }

    /// Stable name used for storage and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Cloud => "cloud",
            Self::Mobile => "mobile",
            Self::Design => "design",
            Self::Database => "database",
            Self::Security => "security",
            Self::Automation => "automation",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_icon_name() {
        assert_eq!(Icon::parse("cloud").unwrap(), Icon::Cloud);
    }

    #[test]
    fn should_reject_unknown_icon_name_at_entry() {
        let result = Icon::parse("sparkles");
        assert_eq!(
            result,
            Err(ValidationError::UnknownIcon("sparkles".to_string()))
        );
    }

    #[test]
    fn should_fall_back_to_unknown_when_reading_stored_value() {
        assert_eq!(Icon::from_stored("sparkles"), Icon::Unknown);
    }

    #[test]
    fn should_roundtrip_every_variant_through_as_str() {
        for icon in [
            Icon::Code,
            Icon::Cloud,
            Icon::Mobile,
            Icon::Design,
            Icon::Database,
            Icon::Security,
            Icon::Automation,
            Icon::Network,
        ] {
            assert_eq!(Icon::from_stored(icon.as_str()), icon);
        }
    }

    #[test]
    fn should_serialize_as_kebab_case_string() {
        let json = serde_json::to_string(&Icon::Code).unwrap();
        assert_eq!(json, "\"code\"");
    }
}
