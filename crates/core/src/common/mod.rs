//! Common types shared across the page replacement simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Page Identifiers:** A strong type for page numbers derived from raw addresses.
//! 2. **Error Handling:** The error taxonomy for construction and trace loading.

/// Page identifier type.
pub mod page;

/// Error types for configuration and trace loading.
pub mod error;

pub use error::SimError;
pub use page::Page;
