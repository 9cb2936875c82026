//! Route-level pages.

pub mod legacy;
pub mod results;
pub mod thread;
