//! cmap-maker: an interactive colormap designer.
//!
//! This library provides the application layer around the core crates:
//! - Command implementations shared by the CLI binary
//! - Persisted application configuration (default sample count)
//!
//! The gradient model, sampler, codec, and editor session live in
//! `cmap-maker-core`; the color value types in `cmap-maker-types`.

pub mod commands;
pub mod config;

// Re-export commonly used types
pub use cmap_maker_core::{
    CmapError, EditorSession, Gradient, SampleSet, SavedColormap, DEFAULT_SAMPLE_COUNT,
};
pub use cmap_maker_types::{ColorStop, Rgb};
pub use config::AppConfig;
