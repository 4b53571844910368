use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A sport from the fixed allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Rugby,
    Tennis,
    Basketball,
    IceHockey,
    Snooker,
}

impl Sport {
    /// Every supported sport, in the order clients see them.
    pub const ALL: [Sport; 6] = [
        Sport::Football,
        Sport::Rugby,
        Sport::Tennis,
        Sport::Basketball,
        Sport::IceHockey,
        Sport::Snooker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Rugby => "rugby",
            Sport::Tennis => "tennis",
            Sport::Basketball => "basketball",
            Sport::IceHockey => "icehockey",
            Sport::Snooker => "snooker",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Sport::ALL.iter().map(Sport::as_str).collect()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected sport identifier, already trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Sport::ALL
            .iter()
            .copied()
            .find(|sport| sport.as_str() == normalized)
            .ok_or(UnknownSport(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" Football ".parse::<Sport>(), Ok(Sport::Football));
        assert_eq!("ICEHOCKEY".parse::<Sport>(), Ok(Sport::IceHockey));
        assert_eq!("snooker\n".parse::<Sport>(), Ok(Sport::Snooker));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            " Cricket".parse::<Sport>(),
            Err(UnknownSport("cricket".to_string()))
        );
        // no aliases
        assert!("ice hockey".parse::<Sport>().is_err());
        assert!("soccer".parse::<Sport>().is_err());
    }

    #[test]
    fn test_names_order() {
        assert_eq!(
            Sport::names(),
            vec!["football", "rugby", "tennis", "basketball", "icehockey", "snooker"]
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        let v = serde_json::to_value(Sport::IceHockey).unwrap();
        assert_eq!(v, serde_json::json!("icehockey"));
    }
}
