use serde::{Serialize, Serializer};
use std::fmt;

/// `type_of_payment` of a salary entry.
///
/// Only `advance` carries a rule (no work done in the same entry); every
/// other label is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentType {
    Advance,
    Other(String),
}

impl PaymentType {
    /// Convert DB / CLI string → enum
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "advance" => PaymentType::Advance,
            other => PaymentType::Other(other.to_string()),
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            PaymentType::Advance => "advance",
            PaymentType::Other(s) => s,
        }
    }

    pub fn is_advance(&self) -> bool {
        matches!(self, PaymentType::Advance)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl Serialize for PaymentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_db_str())
    }
}
