use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification assigned to a lead after dialing.
///
/// The known set covers what the dialer emits today. Uploaded files may carry
/// other labels; those are preserved verbatim in [`Disposition::Other`] so
/// they still show up in the disposition breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Disposition {
    /// Promise To Pay
    Ptp,
    /// Refuse To Pay
    Rtp,
    NotEvaluated,
    Callback,
    ConnectedNoOutcome,
    Unreachable,
    Other(String),
}

impl Disposition {
    pub const KNOWN: [Disposition; 6] = [
        Disposition::Ptp,
        Disposition::Rtp,
        Disposition::NotEvaluated,
        Disposition::Callback,
        Disposition::ConnectedNoOutcome,
        Disposition::Unreachable,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "PTP" => Self::Ptp,
            "RTP" => Self::Rtp,
            "Not_Evaluated" => Self::NotEvaluated,
            "Callback" => Self::Callback,
            "Connected_No_Outcome" => Self::ConnectedNoOutcome,
            "Unreachable" => Self::Unreachable,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ptp => "PTP",
            Self::Rtp => "RTP",
            Self::NotEvaluated => "Not_Evaluated",
            Self::Callback => "Callback",
            Self::ConnectedNoOutcome => "Connected_No_Outcome",
            Self::Unreachable => "Unreachable",
            Self::Other(label) => label,
        }
    }

    /// Dispositions that imply at least one live conversation took place
    pub fn implies_connection(&self) -> bool {
        matches!(self, Self::Ptp | Self::Callback | Self::ConnectedNoOutcome)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Disposition {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Disposition> for String {
    fn from(value: Disposition) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a lead within the collections workflow
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadState {
    Active,
    Inactive,
    Completed,
    Other(String),
}

impl LeadState {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Completed => "completed",
            Self::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for LeadState {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LeadState> for String {
    fn from(value: LeadState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LeadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound-collections campaign unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub lead_id: String,
    pub disposition: Disposition,
    pub state: LeadState,
    pub attempted_calls: u32,
    /// Expected to be `<= attempted_calls`; not enforced here
    pub connected_calls: u32,
    pub spend: f64,
}

impl Lead {
    pub fn is_connected(&self) -> bool {
        self.connected_calls > 0
    }

    pub fn is_attempted(&self) -> bool {
        self.attempted_calls > 0
    }
}

/// The raw lead table handed to the engine.
///
/// Owned by the caller for the duration of one computation; the engine never
/// keeps a reference to it after returning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadTable {
    leads: Vec<Lead>,
}

impl LeadTable {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lead> {
        self.leads.iter()
    }
}

impl FromIterator<Lead> for LeadTable {
    fn from_iter<I: IntoIterator<Item = Lead>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LeadTable {
    type Item = &'a Lead;
    type IntoIter = std::slice::Iter<'a, Lead>;

    fn into_iter(self) -> Self::IntoIter {
        self.leads.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dispositions_parse() {
        for disposition in Disposition::KNOWN {
            assert_eq!(Disposition::parse(disposition.as_str()), disposition);
        }
    }

    #[test]
    fn test_unknown_disposition_is_preserved() {
        let parsed = Disposition::parse("Wrong_Number");
        assert_eq!(parsed, Disposition::Other("Wrong_Number".to_string()));
        assert_eq!(parsed.to_string(), "Wrong_Number");
        assert!(!parsed.is_known());
    }

    #[test]
    fn test_disposition_serializes_as_label() {
        let json = serde_json::to_string(&Disposition::NotEvaluated).unwrap();
        assert_eq!(json, "\"Not_Evaluated\"");
        let back: Disposition = serde_json::from_str("\"Callback\"").unwrap();
        assert_eq!(back, Disposition::Callback);
    }

    #[test]
    fn test_state_parsing_trims_whitespace() {
        assert_eq!(LeadState::parse(" active "), LeadState::Active);
        assert_eq!(
            LeadState::parse("paused"),
            LeadState::Other("paused".to_string())
        );
    }

    #[test]
    fn test_connection_implying_dispositions() {
        assert!(Disposition::Ptp.implies_connection());
        assert!(Disposition::Callback.implies_connection());
        assert!(Disposition::ConnectedNoOutcome.implies_connection());
        assert!(!Disposition::Unreachable.implies_connection());
        assert!(!Disposition::NotEvaluated.implies_connection());
    }
}
