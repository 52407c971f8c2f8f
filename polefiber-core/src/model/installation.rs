use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How the fiber between two poles is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallationMethod {
    /// Strung overhead between the poles
    #[serde(alias = "Aérea", alias = "aerea")]
    Aerial,
    /// Buried along the span
    #[serde(alias = "Subterránea", alias = "subterranea")]
    Underground,
}

impl InstallationMethod {
    pub const ALL: [InstallationMethod; 2] = [
        InstallationMethod::Aerial,
        InstallationMethod::Underground,
    ];

    /// Position in fixed-size price tables
    pub const fn rank(self) -> usize {
        match self {
            InstallationMethod::Aerial => 0,
            InstallationMethod::Underground => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            InstallationMethod::Aerial => "aerial",
            InstallationMethod::Underground => "underground",
        }
    }

    /// Graphviz edge style used for this method
    pub const fn line_style(self) -> &'static str {
        match self {
            InstallationMethod::Aerial => "dashed",
            InstallationMethod::Underground => "solid",
        }
    }
}

impl fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallationMethod::Aerial => f.write_str("Aerial"),
            InstallationMethod::Underground => f.write_str("Underground"),
        }
    }
}

impl FromStr for InstallationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aerial" | "a" | "aérea" | "aerea" => Ok(InstallationMethod::Aerial),
            "underground" | "u" | "subterránea" | "subterranea" => {
                Ok(InstallationMethod::Underground)
            }
            other => Err(Error::ConfigurationError(format!(
                "unknown installation method '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("aerial".parse::<InstallationMethod>().unwrap(), InstallationMethod::Aerial);
        assert_eq!("U".parse::<InstallationMethod>().unwrap(), InstallationMethod::Underground);
        assert_eq!("Aérea".parse::<InstallationMethod>().unwrap(), InstallationMethod::Aerial);
        assert_eq!(
            "Subterránea".parse::<InstallationMethod>().unwrap(),
            InstallationMethod::Underground
        );
    }

    #[test]
    fn unknown_method_is_a_configuration_error() {
        let err = "buried-ish".parse::<InstallationMethod>().unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn serde_accepts_spanish_labels() {
        let method: InstallationMethod = serde_json::from_str("\"Subterránea\"").unwrap();
        assert_eq!(method, InstallationMethod::Underground);
        assert_eq!(serde_json::to_string(&InstallationMethod::Aerial).unwrap(), "\"aerial\"");
    }
}
