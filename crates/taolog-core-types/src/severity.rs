//! Façade severity levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a façade log call
///
/// Ordered from least to most severe. `Assert` reports a condition that
/// should never happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Assert,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Assert => "assert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Verbose < Severity::Debug);
        assert!(Severity::Error < Severity::Assert);
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn test_severity_names_are_unique() {
        let names: HashSet<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), Severity::ALL.len());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Warn);
    }

    #[test]
    fn test_display_matches_as_str() {
        for s in Severity::ALL {
            assert_eq!(s.to_string(), s.as_str());
        }
    }
}
