//! Shared handler utilities

pub mod multipart;
