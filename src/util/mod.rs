//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (`dom`, `page_data`) is isolated here so the rest of the
//! crate stays testable natively; `query` holds the pure URL logic.

pub mod dom;
pub mod page_data;
pub mod query;
