//! Dense sample generation: a gradient discretized at N evenly spaced
//! positions. A SampleSet is always a pure function of (gradient, count)
//! and is recomputed on demand, never stored as independent state.

use cmap_maker_types::Rgb;

use crate::error::{CmapError, Result};
use crate::gradient::Gradient;

pub const MIN_SAMPLE_COUNT: usize = 16;
pub const MAX_SAMPLE_COUNT: usize = 4096;
pub const DEFAULT_SAMPLE_COUNT: usize = 512;

/// Check a user-chosen sample count against the supported range.
pub fn validate_sample_count(count: usize) -> Result<()> {
    if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&count) {
        return Err(CmapError::Validation(format!(
            "sample count {count} outside [{MIN_SAMPLE_COUNT}, {MAX_SAMPLE_COUNT}]"
        )));
    }
    Ok(())
}

/// The N evenly spaced positions i/(N-1). `positions(n)[0]` is exactly
/// 0.0 and `positions(n)[n-1]` is exactly 1.0. Requires `count >= 2`.
pub fn sample_positions(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| i as f64 / (count - 1) as f64)
        .collect()
}

/// A dense discretization of a gradient: parallel positions and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub positions: Vec<f64>,
    pub colors: Vec<Rgb>,
}

impl SampleSet {
    /// Sample `gradient` at `count` evenly spaced positions.
    /// Requires `count >= 2`; the session and CLI validate before
    /// calling.
    pub fn generate(gradient: &Gradient, count: usize) -> Self {
        let positions = sample_positions(count);
        let colors = positions.iter().map(|&p| gradient.sample(p)).collect();
        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmap_maker_types::Rgb;

    #[test]
    fn test_counts_and_endpoints() {
        let g = Gradient::default();
        for n in [16, 512, 4096] {
            let set = SampleSet::generate(&g, n);
            assert_eq!(set.len(), n);
            assert_eq!(set.positions.len(), n);
            assert_eq!(set.positions[0], 0.0);
            assert_eq!(set.positions[n - 1], 1.0);
            assert_eq!(set.colors[0], Rgb::BLACK);
            assert_eq!(set.colors[n - 1], Rgb::WHITE);
        }
    }

    #[test]
    fn test_red_stop_dominates_middle_sample() {
        let mut g = Gradient::default();
        g.add_stop(0.5, Rgb::new(255, 0, 0)).unwrap();
        let set = SampleSet::generate(&g, 512);
        assert_eq!(set.colors[256], Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_generate_is_pure() {
        let g = Gradient::default();
        let a = SampleSet::generate(&g, 64);
        let b = SampleSet::generate(&g, 64);
        assert_eq!(a, b);
        assert_eq!(g, Gradient::default());
    }

    #[test]
    fn test_validate_sample_count_bounds() {
        assert!(validate_sample_count(16).is_ok());
        assert!(validate_sample_count(4096).is_ok());
        assert!(validate_sample_count(15).is_err());
        assert!(validate_sample_count(4097).is_err());
    }
}
