//! Built-in starting gradients for new colormaps.

use cmap_maker_types::{ColorStop, Rgb};

use crate::error::{CmapError, Result};
use crate::gradient::Gradient;

pub const PRESET_NAMES: &[&str] = &["grayscale", "heat", "cool", "viridis", "spectral"];

/// Look up a built-in gradient by name. Unknown names are a validation
/// error listing the available presets.
pub fn builtin(name: &str) -> Result<Gradient> {
    let stops = match name {
        "grayscale" => vec![stop(0.0, 0, 0, 0), stop(1.0, 255, 255, 255)],
        "heat" => vec![
            stop(0.0, 0, 0, 0),
            stop(0.375, 255, 0, 0),
            stop(0.75, 255, 255, 0),
            stop(1.0, 255, 255, 255),
        ],
        "cool" => vec![stop(0.0, 0, 255, 255), stop(1.0, 255, 0, 255)],
        // Key colors only, not the full lookup tables
        "viridis" => vec![
            stop(0.0, 68, 1, 84),
            stop(0.25, 59, 82, 139),
            stop(0.5, 33, 145, 140),
            stop(0.75, 94, 201, 98),
            stop(1.0, 253, 231, 37),
        ],
        "spectral" => vec![
            stop(0.0, 158, 1, 66),
            stop(0.25, 244, 109, 67),
            stop(0.5, 255, 255, 191),
            stop(0.75, 102, 194, 165),
            stop(1.0, 94, 79, 162),
        ],
        _ => {
            return Err(CmapError::Validation(format!(
                "unknown preset '{}' (available: {})",
                name,
                PRESET_NAMES.join(", ")
            )))
        }
    };
    Gradient::from_stops(stops)
}

fn stop(position: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop::new(position, Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_are_valid_gradients() {
        for name in PRESET_NAMES {
            let g = builtin(name).unwrap();
            assert!(g.stop_count() >= 2, "preset {name}");
            assert_eq!(g.stops()[0].position, 0.0);
            assert_eq!(g.stops()[g.stop_count() - 1].position, 1.0);
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        assert!(matches!(
            builtin("jet"),
            Err(CmapError::Validation(_))
        ));
    }
}
