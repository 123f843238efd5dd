//! Client side of the user records application: form state and validation,
//! the users-service capability, and the controller that ties them together.

pub mod controller;
pub mod directory;
pub mod error;
pub mod form;
pub mod operation;
pub mod table;

pub use controller::RecordController;
pub use directory::{parse_server_url, HttpUserDirectory, UserDirectory, DEFAULT_SERVER_URL};
pub use error::{RecordError, ValidationError};
pub use form::{FormField, FormState};
pub use operation::{OperationKind, RecordOperation};
pub use table::{RecordTable, TABLE_HEADERS};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
