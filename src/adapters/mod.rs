//! Optional adapters for external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to convert between [`Vector2`](crate::Vector2)
//! and external vector types.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
