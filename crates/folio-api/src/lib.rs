//! Folio API service library
//!
//! HTTP surface for the publishing marketplace: authenticated submission of
//! books, journals, and datasets with attachment handling, plus the public
//! publisher listing read path.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
