//! Cached token value types.

pub mod record;
pub mod secret;
