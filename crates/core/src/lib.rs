//! cmap-maker-core: the engine behind the cmap-maker colormap designer.
//!
//! This crate provides:
//! - The validated gradient model and its linear-interpolation sampler
//! - Dense sample generation at a configurable count
//! - The persistence codec for the generated colormap files
//! - The editor session that owns a gradient and mediates every edit

pub mod codec;
pub mod error;
pub mod gradient;
pub mod presets;
pub mod sample;
pub mod session;

// Re-export commonly used items at the crate root for convenience
pub use codec::{decode, encode, SavedColormap};
pub use error::{CmapError, Result};
pub use gradient::Gradient;
pub use sample::{
    validate_sample_count, SampleSet, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT,
};
pub use session::EditorSession;
