//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`moderation`, `threshold`, `thread`) so each
//! component depends only on the small model it renders.

pub mod moderation;
pub mod thread;
pub mod threshold;
