//! Strongly-typed ID wrappers for all record types
//!
//! Identifiers are assigned by the remote API and are opaque to us. Newtype
//! wrappers keep an expense id from being used where a goal id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers around the API's opaque identifiers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(IncomeId);
define_id!(BudgetId);
define_id!(GoalId);
define_id!(ReportId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_eq() {
        let a = GoalId::new("42");
        let b: GoalId = "42".into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "42");
        assert_eq!(a.as_str(), "42");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ExpenseId::new("exp-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"exp-1\"");
    }
}
