//! Identifier value objects.
//!
//! Users and programs are both keyed by integers. Wrapping them keeps a
//! program id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a volunteer (supplied by the session layer).
///
/// # Example
///
/// ```
/// use savepaws_volunteer::domain::UserId;
///
/// let id = UserId::new(1);
/// assert_eq!(id.get(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a volunteer program, unique within the program list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(i32);

impl ProgramId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProgramId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display() {
        assert_eq!(format!("{}", UserId::new(7)), "7");
        assert_eq!(format!("{}", ProgramId::new(101)), "101");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ProgramId::new(101)).unwrap();
        assert_eq!(json, "101");

        let id: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(id, UserId::new(42));
    }

    #[test]
    fn test_negative_ids_are_accepted() {
        let id: UserId = serde_json::from_str("-1").unwrap();
        assert_eq!(id.get(), -1);
        assert_eq!(ProgramId::from(-7).to_string(), "-7");
    }
}
