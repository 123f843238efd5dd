use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(UserId);

/// A user as stored by the remote service.
///
/// The identifier travels as `ID` on the wire; the remaining keys are
/// lowercase. Timestamps are emitted by the service and optional for readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub age: i64,
    #[serde(
        rename = "CreatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "UpdatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn new(id: UserId, name: impl Into<String>, surname: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            age,
            created_at: None,
            updated_at: None,
        }
    }
}
