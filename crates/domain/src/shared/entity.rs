use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Something that is stored by a repository and identified by an `ID`.
///
/// The `ID` is assigned by the repository, so an `Entity` that was never
/// saved does not have one yet.
pub trait Entity {
    fn id(&self) -> Option<&ID>;
    fn set_id(&mut self, id: ID);
    fn eq(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ID(i64);

impl ID {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    /// The `ID` following this one, `None` when there is none left
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<i64> for ID {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!("42".parse::<ID>(), Ok(ID::new(42)));
        assert_eq!(
            "abc".parse::<ID>(),
            Err(InvalidIDError::Malformed("abc".into()))
        );
    }

    #[test]
    fn next_id_stops_at_the_last_one() {
        assert_eq!(ID::new(1).next(), Some(ID::new(2)));
        assert_eq!(ID::new(-5).next(), Some(ID::new(-4)));
        assert_eq!(ID::new(i64::MAX).next(), None);
    }

    #[test]
    fn serializes_as_a_json_number() {
        let id = ID::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(serde_json::from_str::<ID>("7").unwrap(), id);
        assert!(serde_json::from_str::<ID>("\"7\"").is_err());
    }
}
