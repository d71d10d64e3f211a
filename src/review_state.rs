use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Kind;

/// Provisional decision for a permission under review.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ReviewState {
    /// No decision yet. Only seen while an entry is being built.
    Unknown,
    /// The user keeps the permission.
    Allowed,
    /// The permission will be revoked.
    Denied,
}

impl ReviewState {
    /// Maps a switch position to the state it stands for.
    pub fn from_grant(grant: bool) -> Self {
        if grant {
            ReviewState::Allowed
        } else {
            ReviewState::Denied
        }
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        ReviewState::Unknown
    }
}

impl Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            ReviewState::Unknown => "unknown",
            ReviewState::Allowed => "allowed",
            ReviewState::Denied => "denied",
        };
        f.write_str(s)
    }
}

impl Serialize for ReviewState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> Deserialize<'de> for ReviewState {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(de)?;
        ReviewState::from_str(&value)
            .map_err(|_| serde::de::Error::custom(format!("Unexpected value: {:?}", value)))
    }
}

impl FromStr for ReviewState {
    type Err = Kind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(ReviewState::Unknown),
            "allowed" => Ok(ReviewState::Allowed),
            "denied" => Ok(ReviewState::Denied),
            _ => Err(Kind::Parse),
        }
    }
}
