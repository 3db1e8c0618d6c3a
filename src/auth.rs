//! x-mas token model, redacted secrets, and proxy response parsing.

pub mod proxy;
pub mod token;

pub use proxy::*;
pub use token::{record::*, secret::*};
