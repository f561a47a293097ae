//! Budgeting mode preference

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How budget figures are computed and which columns the income list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetMode {
    /// Envelope budgeting: unspent funds roll over month to month
    #[default]
    Rollover,
    /// Tracking budgeting: exposes a separate "budgeted" figure
    Report,
}

impl BudgetMode {
    /// Map a stored preference value to a mode
    ///
    /// Anything other than `"report"` behaves as rollover.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("report") => Self::Report,
            _ => Self::Rollover,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rollover => "rollover",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BudgetMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_preference(value.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rollover() {
        assert_eq!(BudgetMode::default(), BudgetMode::Rollover);
    }

    #[test]
    fn test_unknown_values_fall_back_to_rollover() {
        assert_eq!(BudgetMode::from_preference(None), BudgetMode::Rollover);
        assert_eq!(BudgetMode::from_preference(Some("envelope")), BudgetMode::Rollover);
        assert_eq!(BudgetMode::from_preference(Some("Report")), BudgetMode::Report);
    }

    #[test]
    fn test_serde_values() {
        assert_eq!(serde_json::to_string(&BudgetMode::Report).unwrap(), "\"report\"");
        let mode: BudgetMode = serde_json::from_str("\"tracking\"").unwrap();
        assert_eq!(mode, BudgetMode::Rollover);
        let mode: BudgetMode = serde_json::from_str("null").unwrap();
        assert_eq!(mode, BudgetMode::Rollover);
    }
}
