//! Session authentication
//!
//! Sessions are HS256 bearer tokens minted by the external identity
//! provider; this module only verifies them and hands the owner identity to
//! handlers as an explicit extracted value.

pub mod session;

pub use session::{issue_token, verify_token, Claims, Owner};
