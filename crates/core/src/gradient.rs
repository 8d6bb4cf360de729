//! The validated gradient model and its interpolation sampler.

use cmap_maker_types::{ColorStop, Rgb};
use log::debug;

use crate::error::{CmapError, Result};

/// Piecewise-linear colormap defined by sorted color stops.
///
/// Invariants, enforced by every constructor and mutation:
/// - at least two stops, sorted ascending by position
/// - positions are unique
/// - the first stop sits at 0.0 and the last at 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Two-stop gradient from a boundary color pair.
    pub fn new(first: Rgb, last: Rgb) -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, first), ColorStop::new(1.0, last)],
        }
    }

    /// Build from an arbitrary stop list. Stops are sorted by position;
    /// insertion order is irrelevant.
    pub fn from_stops(mut stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(CmapError::Validation(format!(
                "a gradient needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        stops.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for stop in &stops {
            if !stop.position.is_finite() || stop.position < 0.0 || stop.position > 1.0 {
                return Err(CmapError::Validation(format!(
                    "stop position {} outside [0, 1]",
                    stop.position
                )));
            }
        }
        for pair in stops.windows(2) {
            if pair[0].position == pair[1].position {
                return Err(CmapError::Validation(format!(
                    "duplicate stop position {}",
                    pair[0].position
                )));
            }
        }
        if stops[0].position != 0.0 {
            return Err(CmapError::Validation(
                "first stop must sit at position 0.0".into(),
            ));
        }
        if stops[stops.len() - 1].position != 1.0 {
            return Err(CmapError::Validation(
                "last stop must sit at position 1.0".into(),
            ));
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Insert a stop, keeping the list sorted. Returns the index the new
    /// stop landed at.
    pub fn add_stop(&mut self, position: f64, color: Rgb) -> Result<usize> {
        if !position.is_finite() || !(0.0..=1.0).contains(&position) {
            return Err(CmapError::Validation(format!(
                "stop position {position} outside [0, 1]"
            )));
        }
        if self.stops.iter().any(|s| s.position == position) {
            return Err(CmapError::Validation(format!(
                "a stop already exists at position {position}"
            )));
        }
        let index = self
            .stops
            .iter()
            .position(|s| s.position > position)
            .unwrap_or(self.stops.len());
        self.stops.insert(index, ColorStop::new(position, color));
        debug!("added stop {} at {:.4}", color.to_hex(), position);
        Ok(index)
    }

    /// Replace the color of an existing stop in place.
    pub fn edit_stop_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let count = self.stops.len();
        let stop = self
            .stops
            .get_mut(index)
            .ok_or(CmapError::Index { index, count })?;
        stop.color = color;
        Ok(())
    }

    /// Remove an interior stop. The boundary stops at 0.0 and 1.0 can
    /// never be removed.
    pub fn remove_stop(&mut self, index: usize) -> Result<ColorStop> {
        let count = self.stops.len();
        if index >= count {
            return Err(CmapError::Index { index, count });
        }
        if index == 0 || index == count - 1 {
            return Err(CmapError::Validation(
                "the first and last stops are fixed and cannot be removed".into(),
            ));
        }
        Ok(self.stops.remove(index))
    }

    /// Interpolated color at position `p`.
    ///
    /// `p` is clamped to [0, 1]; a position that coincides with a stop
    /// returns that stop's color without interpolation. Pure: the
    /// gradient is never mutated.
    pub fn sample(&self, p: f64) -> Rgb {
        let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        if let Some(stop) = self.stops.iter().find(|s| s.position == p) {
            return stop.color;
        }
        // The boundary stops span [0, 1], so a bracketing pair always
        // exists for a clamped, non-coincident p.
        let hi = self
            .stops
            .iter()
            .position(|s| s.position > p)
            .unwrap_or(self.stops.len() - 1);
        let lo = hi.saturating_sub(1);
        let (a, b) = (&self.stops[lo], &self.stops[hi]);
        let span = b.position - a.position;
        if span <= 0.0 {
            return a.color;
        }
        let t = (p - a.position) / span;
        Rgb::new(
            lerp_channel(a.color.r, b.color.r, t),
            lerp_channel(a.color.g, b.color.g, t),
            lerp_channel(a.color.b, b.color.b, t),
        )
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(Rgb::BLACK, Rgb::WHITE)
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let v = a as f64 + t * (b as f64 - a as f64);
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_of_black_to_white() {
        let g = Gradient::default();
        let mid = g.sample(0.5);
        assert!((mid.r as i32 - 128).abs() <= 1);
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }

    #[test]
    fn test_exact_stop_hit_skips_interpolation() {
        let mut g = Gradient::default();
        g.add_stop(0.5, Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(g.sample(0.5), Rgb::new(255, 0, 0));
        assert_eq!(g.sample(0.0), Rgb::BLACK);
        assert_eq!(g.sample(1.0), Rgb::WHITE);
    }

    #[test]
    fn test_out_of_range_position_clamps_to_boundary() {
        let g = Gradient::new(Rgb::new(10, 20, 30), Rgb::new(200, 210, 220));
        assert_eq!(g.sample(-0.25), Rgb::new(10, 20, 30));
        assert_eq!(g.sample(1.25), Rgb::new(200, 210, 220));
    }

    #[test]
    fn test_interpolation_between_interior_stops() {
        let mut g = Gradient::new(Rgb::BLACK, Rgb::BLACK);
        g.add_stop(0.25, Rgb::new(0, 0, 0)).unwrap();
        g.add_stop(0.75, Rgb::new(200, 100, 0)).unwrap();
        assert_eq!(g.sample(0.5), Rgb::new(100, 50, 0));
    }

    #[test]
    fn test_duplicate_position_rejected() {
        let mut g = Gradient::default();
        g.add_stop(0.5, Rgb::new(255, 0, 0)).unwrap();
        let err = g.add_stop(0.5, Rgb::new(0, 255, 0)).unwrap_err();
        assert!(matches!(err, CmapError::Validation(_)));
        assert_eq!(g.stop_count(), 3);
    }

    #[test]
    fn test_boundary_stops_cannot_be_removed() {
        let mut g = Gradient::default();
        g.add_stop(0.5, Rgb::new(255, 0, 0)).unwrap();
        let before = g.stop_count();
        assert!(matches!(
            g.remove_stop(0),
            Err(CmapError::Validation(_))
        ));
        assert!(matches!(
            g.remove_stop(before - 1),
            Err(CmapError::Validation(_))
        ));
        assert_eq!(g.stop_count(), before);
        g.remove_stop(1).unwrap();
        assert_eq!(g.stop_count(), before - 1);
    }

    #[test]
    fn test_edit_stop_color_index_error() {
        let mut g = Gradient::default();
        assert!(matches!(
            g.edit_stop_color(5, Rgb::WHITE),
            Err(CmapError::Index { index: 5, count: 2 })
        ));
        g.edit_stop_color(0, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(g.stops()[0].color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_from_stops_sorts_input() {
        let g = Gradient::from_stops(vec![
            ColorStop::new(1.0, Rgb::WHITE),
            ColorStop::new(0.5, Rgb::new(255, 0, 0)),
            ColorStop::new(0.0, Rgb::BLACK),
        ])
        .unwrap();
        let positions: Vec<f64> = g.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_from_stops_requires_boundary_stops() {
        let err = Gradient::from_stops(vec![
            ColorStop::new(0.1, Rgb::BLACK),
            ColorStop::new(1.0, Rgb::WHITE),
        ])
        .unwrap_err();
        assert!(matches!(err, CmapError::Validation(_)));

        let err = Gradient::from_stops(vec![
            ColorStop::new(0.0, Rgb::BLACK),
            ColorStop::new(0.9, Rgb::WHITE),
        ])
        .unwrap_err();
        assert!(matches!(err, CmapError::Validation(_)));
    }

    #[test]
    fn test_from_stops_rejects_duplicates() {
        let err = Gradient::from_stops(vec![
            ColorStop::new(0.0, Rgb::BLACK),
            ColorStop::new(0.5, Rgb::new(255, 0, 0)),
            ColorStop::new(0.5, Rgb::new(0, 255, 0)),
            ColorStop::new(1.0, Rgb::WHITE),
        ])
        .unwrap_err();
        assert!(matches!(err, CmapError::Validation(_)));
    }
}
