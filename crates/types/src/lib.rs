//! cmap-maker-types: Shared data types for the cmap-maker colormap designer.
//!
//! This crate contains pure value types (colors and color stops) shared
//! across all cmap-maker crates. These types have no I/O or UI
//! dependencies, making them suitable as a foundation layer.

pub mod color;

// Re-export commonly used types at the crate root for convenience
pub use color::{ColorStop, Rgb};
