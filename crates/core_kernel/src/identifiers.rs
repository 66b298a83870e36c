//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are supplied by the caller (e.g. `"P1"`, `"C1"`) and compared
//! by exact string equality. Wrapping each kind in its own newtype prevents a
//! policy id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from caller-supplied text
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier text is empty
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(UserId);
define_id!(AgentId);
define_id!(PolicyId);
define_id!(ClaimId);
define_id!(TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_text() {
        let id = PolicyId::new("P1");
        assert_eq!(id.to_string(), "P1");
    }

    #[test]
    fn test_no_normalization() {
        assert_ne!(UserId::from("c1"), UserId::from("C1"));
        assert_ne!(UserId::from("C1 "), UserId::from("C1"));
    }

    #[test]
    fn test_compare_with_str() {
        let id = ClaimId::from("CL1");
        assert!(id == "CL1");
        assert!(id != "CL2");
    }
}
