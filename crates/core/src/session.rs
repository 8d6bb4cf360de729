//! The editor session: single owner of the gradient being designed.
//!
//! Every user-facing operation goes through here. A failed operation
//! leaves the gradient untouched; a successful mutation bumps the
//! revision counter so a rendering layer can tell when to redraw.

use std::fs;
use std::path::Path;

use cmap_maker_types::{ColorStop, Rgb};
use log::info;

use crate::codec;
use crate::error::Result;
use crate::gradient::Gradient;
use crate::sample::{validate_sample_count, SampleSet, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};

pub struct EditorSession {
    gradient: Gradient,
    sample_count: usize,
    revision: u64,
}

impl EditorSession {
    /// Fresh session: black-to-white gradient at the default count.
    pub fn new() -> Self {
        Self::with_gradient(Gradient::default())
    }

    pub fn with_gradient(gradient: Gradient) -> Self {
        Self {
            gradient,
            sample_count: DEFAULT_SAMPLE_COUNT,
            revision: 0,
        }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Monotone change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_sample_count(&mut self, count: usize) -> Result<()> {
        validate_sample_count(count)?;
        self.sample_count = count;
        self.revision += 1;
        Ok(())
    }

    /// Add a stop. `None` for the color means "interpolate from the
    /// current gradient at that position". Returns the new stop's index.
    pub fn add_stop(&mut self, position: f64, color: Option<Rgb>) -> Result<usize> {
        let color = color.unwrap_or_else(|| self.gradient.sample(position));
        let index = self.gradient.add_stop(position, color)?;
        self.revision += 1;
        Ok(index)
    }

    pub fn edit_stop_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.gradient.edit_stop_color(index, color)?;
        self.revision += 1;
        Ok(())
    }

    pub fn remove_stop(&mut self, index: usize) -> Result<ColorStop> {
        let removed = self.gradient.remove_stop(index)?;
        self.revision += 1;
        Ok(removed)
    }

    /// Dense samples at the session's current count. Recomputed on
    /// every call; the session holds no derived state.
    pub fn samples(&self) -> SampleSet {
        SampleSet::generate(&self.gradient, self.sample_count)
    }

    /// Replace the gradient wholesale (used by load; also handy for
    /// seeding a session from a preset).
    pub fn reset(&mut self, gradient: Gradient) {
        self.gradient = gradient;
        self.revision += 1;
    }

    /// Encode and write the current gradient. Blocking I/O; the model
    /// is read-only here, so a failure changes nothing.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let text = codec::encode(&self.gradient, self.sample_count);
        fs::write(path, text)?;
        info!(
            "saved colormap ({} stops, {} samples) to {}",
            self.gradient.stop_count(),
            self.sample_count,
            path.display()
        );
        Ok(())
    }

    /// Read and decode a colormap file, replacing the gradient
    /// wholesale. The file's saved sample count is adopted when it
    /// falls inside the supported range. On any error the session is
    /// left as it was.
    pub fn load_from_path(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        let saved = codec::decode(&text)?;
        if let Some(count) = saved.sample_count() {
            if (MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&count) {
                self.sample_count = count;
            }
        }
        self.gradient = saved.into_gradient();
        self.revision += 1;
        info!(
            "loaded colormap ({} stops) from {}",
            self.gradient.stop_count(),
            path.display()
        );
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
