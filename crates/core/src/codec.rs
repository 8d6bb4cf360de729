//! Persistence codec for colormap files.
//!
//! The encoder produces a Python-module-shaped text artifact: the stop
//! positions and colors as parallel lists, a `create_colormap`
//! constructor block, and a dense sample array whose names embed the
//! sample count (`_rgb_array_<N>`, `_positions_<N>`) together with a
//! `get_rgb_array(num_colors = <N>)` accessor.
//!
//! The decoder is a structured parser over that declared schema. It
//! never executes the file; it scans top-level list assignments and the
//! constructor block as data. Files produced by foreign scripts that
//! only define `color_positions`/`rgb_colors` load fine.

use std::collections::HashMap;
use std::fmt::Write as _;

use cmap_maker_types::Rgb;
use log::{debug, warn};

use crate::error::{CmapError, Result};
use crate::gradient::Gradient;
use crate::sample::{SampleSet, DEFAULT_SAMPLE_COUNT};

/// A decoded colormap file: the reconstructed gradient plus, when the
/// file carried them, the dense sample arrays stored at save time.
#[derive(Debug, Clone)]
pub struct SavedColormap {
    gradient: Gradient,
    stored: Option<StoredSamples>,
}

#[derive(Debug, Clone)]
struct StoredSamples {
    count: usize,
    positions: Vec<f64>,
    colors: Vec<Rgb>,
}

impl SavedColormap {
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn into_gradient(self) -> Gradient {
        self.gradient
    }

    /// The sample count the file was saved with, if dense arrays were
    /// present.
    pub fn sample_count(&self) -> Option<usize> {
        self.stored.as_ref().map(|s| s.count)
    }

    /// The `get_rgb_array` contract: `None` returns exactly the stored
    /// samples (falling back to a fresh default-count sampling when the
    /// file carried none); an explicit count always re-interpolates
    /// from the stops, never slicing the stored array.
    pub fn rgb_array(&self, count: Option<usize>) -> Result<Vec<Rgb>> {
        match count {
            None => match &self.stored {
                Some(s) => Ok(s.colors.clone()),
                None => Ok(SampleSet::generate(&self.gradient, DEFAULT_SAMPLE_COUNT).colors),
            },
            Some(n) => {
                if n < 2 {
                    return Err(CmapError::Validation(format!(
                        "sample count {n} must be at least 2"
                    )));
                }
                Ok(SampleSet::generate(&self.gradient, n).colors)
            }
        }
    }

    /// Positions parallel to [`rgb_array`](Self::rgb_array).
    pub fn positions(&self, count: Option<usize>) -> Result<Vec<f64>> {
        match count {
            None => match &self.stored {
                Some(s) => Ok(s.positions.clone()),
                None => Ok(crate::sample::sample_positions(DEFAULT_SAMPLE_COUNT)),
            },
            Some(n) => {
                if n < 2 {
                    return Err(CmapError::Validation(format!(
                        "sample count {n} must be at least 2"
                    )));
                }
                Ok(crate::sample::sample_positions(n))
            }
        }
    }
}

/// Serialize a gradient (plus the chosen dense sample count) to the
/// colormap file text.
pub fn encode(gradient: &Gradient, sample_count: usize) -> String {
    let stops = gradient.stops();
    let samples = SampleSet::generate(gradient, sample_count);
    let mut out = String::new();

    let _ = writeln!(out, "# Colormap definition generated by cmap-maker.");
    let _ = writeln!(
        out,
        "# Loaders treat this file as data; it is parsed, never executed."
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "# Color positions and RGB values");
    let _ = writeln!(out, "color_positions = [");
    for stop in stops {
        let c = stop.color;
        let _ = writeln!(
            out,
            "    {:.6},  # ({}, {}, {})",
            stop.position, c.r, c.g, c.b
        );
    }
    let _ = writeln!(out, "]");
    let _ = writeln!(out);

    let _ = writeln!(out, "# RGB color values (0-1 scale)");
    let _ = writeln!(out, "rgb_colors = [");
    for stop in stops {
        let (r, g, b) = stop.color.to_normalized();
        let _ = writeln!(out, "    [{r:.6}, {g:.6}, {b:.6}],");
    }
    let _ = writeln!(out, "]");
    let _ = writeln!(out);

    let _ = writeln!(out, "# Create the colormap");
    let _ = writeln!(out, "def create_colormap(name='custom_colormap'):");
    let _ = writeln!(out, "    # Base colormap from the first and last color");
    let _ = writeln!(out, "    color1_rgb = {}", stops[0].color.to_packed());
    let _ = writeln!(
        out,
        "    color2_rgb = {}",
        stops[stops.len() - 1].color.to_packed()
    );
    let _ = writeln!(
        out,
        "    colormap = EditableColormap(color1_rgb, color2_rgb, name=name)"
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "    # Add intermediate color stops");
    for stop in &stops[1..stops.len() - 1] {
        let _ = writeln!(
            out,
            "    colormap.addColorStop({:.6}, {})",
            stop.position,
            stop.color.to_packed()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "    return colormap");
    let _ = writeln!(out);

    let _ = writeln!(out, "# Dense RGB samples (0-255) for the colormap");
    let _ = writeln!(out, "_rgb_array_{sample_count} = [");
    for color in &samples.colors {
        let _ = writeln!(out, "    [{}, {}, {}],", color.r, color.g, color.b);
    }
    let _ = writeln!(out, "]");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "# Positions corresponding to the RGB samples (0.0 to 1.0)"
    );
    let _ = writeln!(out, "_positions_{sample_count} = [");
    for group in samples.positions.chunks(10) {
        let line: Vec<String> = group.iter().map(|p| format!("{p:.6}")).collect();
        let _ = writeln!(out, "    {},", line.join(", "));
    }
    let _ = writeln!(out, "]");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "# Accessor; counts other than the saved default are re-interpolated"
    );
    let _ = writeln!(out, "# from the color stops above.");
    let _ = writeln!(out, "def get_rgb_array(num_colors = {sample_count}):");
    let _ = writeln!(out, "    if num_colors == {sample_count}:");
    let _ = writeln!(out, "        return [list(rgb) for rgb in _rgb_array_{sample_count}]");
    let _ = writeln!(out, "    stops = list(zip(color_positions, rgb_colors))");
    let _ = writeln!(out, "    out = []");
    let _ = writeln!(out, "    for i in range(num_colors):");
    let _ = writeln!(out, "        p = i / (num_colors - 1)");
    let _ = writeln!(out, "        for (p0, c0), (p1, c1) in zip(stops, stops[1:]):");
    let _ = writeln!(out, "            if p <= p1:");
    let _ = writeln!(out, "                t = 0.0 if p1 == p0 else (p - p0) / (p1 - p0)");
    let _ = writeln!(
        out,
        "                out.append([round((a + t * (b - a)) * 255) for a, b in zip(c0, c1)])"
    );
    let _ = writeln!(out, "                break");
    let _ = writeln!(out, "    return out");

    debug!(
        "encoded colormap: {} stops, {} samples, {} bytes",
        stops.len(),
        sample_count,
        out.len()
    );
    out
}

/// Parse colormap file text back into a gradient (plus any stored
/// sample arrays). Accepts, in order of preference:
/// 1. a complete `create_colormap` constructor block;
/// 2. parallel `color_positions` / `rgb_colors` arrays.
pub fn decode(text: &str) -> Result<SavedColormap> {
    let doc = scan(text)?;

    let from_arrays = || -> Option<Result<Gradient>> {
        match (doc.arrays.get("color_positions"), doc.arrays.get("rgb_colors")) {
            (Some(positions), Some(colors)) => Some(gradient_from_arrays(positions, colors)),
            _ => None,
        }
    };

    let gradient = match &doc.constructor {
        Some(ctor) => match gradient_from_constructor(ctor) {
            Ok(g) => g,
            Err(e) => match from_arrays() {
                Some(fallback) => {
                    warn!("constructor block unusable ({e}), falling back to stop arrays");
                    fallback?
                }
                None => return Err(e),
            },
        },
        None => match from_arrays() {
            Some(g) => g?,
            None => {
                return Err(CmapError::Format(
                    "file defines neither a create_colormap constructor nor \
                     color_positions/rgb_colors arrays"
                        .into(),
                ))
            }
        },
    };

    let stored = stored_samples(&doc);
    Ok(SavedColormap { gradient, stored })
}

// ---------------------------------------------------------------------
// Raw document scanning
// ---------------------------------------------------------------------

#[derive(Debug)]
enum RawArray {
    Scalars(Vec<f64>),
    Triples(Vec<[f64; 3]>),
}

#[derive(Debug, Default)]
struct RawConstructor {
    first: Option<u32>,
    last: Option<u32>,
    stops: Vec<(f64, u32)>,
}

#[derive(Debug, Default)]
struct RawDocument {
    arrays: HashMap<String, RawArray>,
    constructor: Option<RawConstructor>,
}

struct PendingArray {
    name: String,
    buf: String,
    depth: i64,
}

fn scan(text: &str) -> Result<RawDocument> {
    let mut doc = RawDocument::default();
    let mut pending: Option<PendingArray> = None;
    let mut in_constructor = false;

    for raw in text.lines() {
        let line = strip_comment(raw);

        if let Some(mut p) = pending.take() {
            p.depth += bracket_delta(line);
            p.buf.push(' ');
            p.buf.push_str(line);
            if p.depth <= 0 {
                doc.arrays.insert(p.name, parse_array_body(&p.buf)?);
            } else {
                pending = Some(p);
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }
        let indented = line.starts_with(' ') || line.starts_with('\t');

        if indented {
            if in_constructor {
                if let Some(ctor) = doc.constructor.as_mut() {
                    parse_constructor_line(line, ctor)?;
                }
            }
            continue;
        }

        // Any new top-level statement ends the constructor block.
        in_constructor = false;
        let trimmed = line.trim();
        if trimmed.starts_with("def create_colormap") {
            in_constructor = true;
            doc.constructor.get_or_insert_with(RawConstructor::default);
            continue;
        }
        if let Some((name, rest)) = split_list_assignment(trimmed) {
            let depth = bracket_delta(rest);
            if depth <= 0 {
                doc.arrays.insert(name, parse_array_body(rest)?);
            } else {
                pending = Some(PendingArray {
                    name,
                    buf: rest.to_string(),
                    depth,
                });
            }
        }
    }

    if let Some(p) = pending {
        return Err(CmapError::Format(format!(
            "unterminated list assignment '{}'",
            p.name
        )));
    }
    Ok(doc)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

fn bracket_delta(line: &str) -> i64 {
    line.chars()
        .map(|c| match c {
            '[' => 1,
            ']' => -1,
            _ => 0,
        })
        .sum()
}

/// Match `identifier = [ ...` at top level; anything else is skipped.
fn split_list_assignment(line: &str) -> Option<(String, &str)> {
    let (name, rest) = line.split_once('=')?;
    let name = name.trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    let rest = rest.trim_start();
    if !rest.starts_with('[') {
        return None;
    }
    Some((name.to_string(), rest))
}

fn parse_constructor_line(line: &str, ctor: &mut RawConstructor) -> Result<()> {
    let t = line.trim();
    if let Some(rest) = t.strip_prefix("color1_rgb") {
        if let Some(v) = rest.trim_start().strip_prefix('=') {
            ctor.first = Some(parse_packed(v)?);
        }
    } else if let Some(rest) = t.strip_prefix("color2_rgb") {
        if let Some(v) = rest.trim_start().strip_prefix('=') {
            ctor.last = Some(parse_packed(v)?);
        }
    } else if let Some(idx) = t.find("addColorStop(") {
        let args = &t[idx + "addColorStop(".len()..];
        let end = args
            .find(')')
            .ok_or_else(|| CmapError::Format("unterminated addColorStop call".into()))?;
        let mut parts = args[..end].split(',');
        let pos = parse_float(parts.next().unwrap_or(""))?;
        let packed = parse_packed(parts.next().unwrap_or(""))?;
        ctor.stops.push((pos, packed));
    }
    Ok(())
}

fn parse_array_body(buf: &str) -> Result<RawArray> {
    let open = buf
        .find('[')
        .ok_or_else(|| CmapError::Format("expected a list".into()))?;
    let close = buf
        .rfind(']')
        .ok_or_else(|| CmapError::Format("unterminated list".into()))?;
    if close <= open {
        return Err(CmapError::Format("unterminated list".into()));
    }
    let inner = &buf[open + 1..close];

    if inner.contains('[') {
        let mut triples = Vec::new();
        let mut rest = inner;
        while let Some(start) = rest.find('[') {
            let end = rest[start..]
                .find(']')
                .ok_or_else(|| CmapError::Format("unterminated inner list".into()))?
                + start;
            let vals = parse_scalars(&rest[start + 1..end])?;
            if vals.len() != 3 {
                return Err(CmapError::Format(format!(
                    "expected an RGB triple, got {} values",
                    vals.len()
                )));
            }
            triples.push([vals[0], vals[1], vals[2]]);
            rest = &rest[end + 1..];
        }
        Ok(RawArray::Triples(triples))
    } else {
        Ok(RawArray::Scalars(parse_scalars(inner)?))
    }
}

fn parse_scalars(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_float)
        .collect()
}

fn parse_float(s: &str) -> Result<f64> {
    let s = s.trim().trim_end_matches(',').trim();
    s.parse::<f64>()
        .map_err(|e| CmapError::Format(format!("invalid number '{s}': {e}")))
}

fn parse_packed(s: &str) -> Result<u32> {
    let s = s.trim().trim_end_matches(',').trim_end_matches(')').trim();
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| CmapError::Format(format!("invalid packed color '{s}': {e}")))
}

// ---------------------------------------------------------------------
// Gradient reconstruction
// ---------------------------------------------------------------------

fn gradient_from_constructor(ctor: &RawConstructor) -> Result<Gradient> {
    let first = ctor
        .first
        .ok_or_else(|| CmapError::Format("constructor block is missing color1_rgb".into()))?;
    let last = ctor
        .last
        .ok_or_else(|| CmapError::Format("constructor block is missing color2_rgb".into()))?;
    let mut gradient = Gradient::new(Rgb::from_packed(first), Rgb::from_packed(last));
    for &(pos, packed) in &ctor.stops {
        gradient
            .add_stop(pos, Rgb::from_packed(packed))
            .map_err(|e| CmapError::Format(format!("invalid constructor stop: {e}")))?;
    }
    Ok(gradient)
}

fn gradient_from_arrays(positions: &RawArray, colors: &RawArray) -> Result<Gradient> {
    let positions = match positions {
        RawArray::Scalars(v) => v,
        RawArray::Triples(_) => {
            return Err(CmapError::Format(
                "color_positions must be a flat list of floats".into(),
            ))
        }
    };
    let colors = match colors {
        RawArray::Triples(v) => triples_to_colors(v),
        RawArray::Scalars(_) => {
            return Err(CmapError::Format(
                "rgb_colors must be a list of RGB triples".into(),
            ))
        }
    };
    if positions.len() != colors.len() {
        return Err(CmapError::Format(format!(
            "color_positions has {} entries but rgb_colors has {}",
            positions.len(),
            colors.len()
        )));
    }
    if positions.len() < 2 {
        return Err(CmapError::Format(
            "need at least 2 stops to rebuild a gradient".into(),
        ));
    }
    // First and last colors become the boundary stops; interior pairs
    // are added in file order.
    let mut gradient = Gradient::new(colors[0], colors[colors.len() - 1]);
    for i in 1..positions.len() - 1 {
        gradient
            .add_stop(positions[i], colors[i])
            .map_err(|e| CmapError::Format(format!("invalid stop data: {e}")))?;
    }
    Ok(gradient)
}

/// Stop colors in `rgb_colors` may be 0-255 integer triples or 0-1
/// float triples. Any fractional component, or a maximum of 1.0 or
/// below, means the array is treated as normalized floats.
fn triples_to_colors(triples: &[[f64; 3]]) -> Vec<Rgb> {
    let integral = triples.iter().flatten().all(|v| v.fract() == 0.0);
    let max = triples
        .iter()
        .flatten()
        .fold(0.0f64, |m, &v| m.max(v));
    if integral && max > 1.0 {
        triples
            .iter()
            .map(|t| {
                Rgb::new(
                    t[0].clamp(0.0, 255.0) as u8,
                    t[1].clamp(0.0, 255.0) as u8,
                    t[2].clamp(0.0, 255.0) as u8,
                )
            })
            .collect()
    } else {
        triples
            .iter()
            .map(|t| Rgb::from_normalized(t[0], t[1], t[2]))
            .collect()
    }
}

/// Stored `_rgb_array_<N>` samples are always 0-255 integers; the
/// float heuristic never applies to them, or an all-dark sample array
/// would be rescaled.
fn raw_triple_to_color(t: &[f64; 3]) -> Rgb {
    Rgb::new(
        t[0].round().clamp(0.0, 255.0) as u8,
        t[1].round().clamp(0.0, 255.0) as u8,
        t[2].round().clamp(0.0, 255.0) as u8,
    )
}

/// Find a consistent `_rgb_array_<N>` / `_positions_<N>` pair.
/// Malformed candidates are skipped with a warning (array iteration
/// order is arbitrary, so one bad entry must not mask a good pair);
/// decode still succeeds from the stops when none is usable.
fn stored_samples(doc: &RawDocument) -> Option<StoredSamples> {
    for (name, array) in &doc.arrays {
        let count = match sample_count_suffix(name, "rgb_array_") {
            Some(n) => n,
            None => continue,
        };
        let colors: Vec<Rgb> = match array {
            RawArray::Triples(t) => t.iter().map(raw_triple_to_color).collect(),
            RawArray::Scalars(_) => {
                warn!("{name} is not a list of triples, skipping it");
                continue;
            }
        };
        if colors.len() != count {
            warn!(
                "{name} claims {count} samples but holds {}, skipping it",
                colors.len()
            );
            continue;
        }
        let positions = doc.arrays.iter().find_map(|(n, a)| {
            match (sample_count_suffix(n, "positions_"), a) {
                (Some(c), RawArray::Scalars(p)) if c == count => Some(p.clone()),
                _ => None,
            }
        });
        let positions = match positions {
            Some(p) if p.len() == count => p,
            _ => {
                warn!("no matching _positions_{count} array, skipping {name}");
                continue;
            }
        };
        return Some(StoredSamples {
            count,
            positions,
            colors,
        });
    }
    None
}

/// `_rgb_array_512` / `rgb_array_512` style names: optional leading
/// underscore, known prefix, integer suffix.
fn sample_count_suffix(name: &str, prefix: &str) -> Option<usize> {
    let name = name.strip_prefix('_').unwrap_or(name);
    name.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmap_maker_types::ColorStop;

    fn four_stop_gradient() -> Gradient {
        Gradient::from_stops(vec![
            ColorStop::new(0.0, Rgb::BLACK),
            ColorStop::new(0.25, Rgb::new(255, 0, 0)),
            ColorStop::new(0.75, Rgb::new(0, 0, 255)),
            ColorStop::new(1.0, Rgb::WHITE),
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip_reconstructs_stops() {
        let g = four_stop_gradient();
        let text = encode(&g, 64);
        let saved = decode(&text).unwrap();
        let back = saved.gradient();
        assert_eq!(back.stop_count(), g.stop_count());
        for (a, b) in g.stops().iter().zip(back.stops()) {
            assert!((a.position - b.position).abs() < 1e-6);
            assert_eq!(a.color, b.color);
        }
        // Sampling the decoded gradient at the original stop positions
        // reproduces the exact stop colors.
        for stop in g.stops() {
            assert_eq!(back.sample(stop.position), stop.color);
        }
    }

    #[test]
    fn test_round_trip_samples_match_stored() {
        let g = four_stop_gradient();
        let saved = decode(&encode(&g, 64)).unwrap();
        assert_eq!(saved.sample_count(), Some(64));
        let stored = saved.rgb_array(None).unwrap();
        let fresh = SampleSet::generate(saved.gradient(), 64).colors;
        assert_eq!(stored, fresh);
    }

    #[test]
    fn test_accessor_default_matches_original_count() {
        let saved = decode(&encode(&four_stop_gradient(), 64)).unwrap();
        assert_eq!(
            saved.rgb_array(None).unwrap(),
            saved.rgb_array(Some(64)).unwrap()
        );
        assert_eq!(
            saved.positions(None).unwrap(),
            saved.positions(Some(64)).unwrap()
        );
    }

    #[test]
    fn test_accessor_recomputes_other_counts() {
        let saved = decode(&encode(&four_stop_gradient(), 64)).unwrap();
        let resampled = saved.rgb_array(Some(100)).unwrap();
        assert_eq!(resampled.len(), 100);
        assert_eq!(resampled[0], Rgb::BLACK);
        assert_eq!(resampled[99], Rgb::WHITE);
        assert!(saved.rgb_array(Some(1)).is_err());
    }

    #[test]
    fn test_foreign_arrays_only_script() {
        let text = "\
# produced by some other tool
import numpy as np

color_positions = [
    0.000000,
    0.400000,
    1.000000,
]

rgb_colors = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
]
";
        let saved = decode(text).unwrap();
        let stops = saved.gradient().stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color, Rgb::BLACK);
        assert!((stops[1].position - 0.4).abs() < 1e-9);
        assert_eq!(stops[1].color, Rgb::new(255, 0, 0));
        assert_eq!(stops[2].color, Rgb::WHITE);
        assert_eq!(saved.sample_count(), None);
    }

    #[test]
    fn test_integer_colors_decode_like_floats() {
        let ints = "color_positions = [0.0, 0.5, 1.0]\n\
                    rgb_colors = [[0, 0, 0], [255, 0, 0], [255, 255, 255]]\n";
        let floats = "color_positions = [0.0, 0.5, 1.0]\n\
                      rgb_colors = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 1.0]]\n";
        let a = decode(ints).unwrap();
        let b = decode(floats).unwrap();
        assert_eq!(a.gradient().stops(), b.gradient().stops());
    }

    #[test]
    fn test_constructor_shape_preferred() {
        let text = "\
def create_colormap(name='custom_colormap'):
    color1_rgb = 4278190080
    color2_rgb = 4294967295
    colormap = EditableColormap(color1_rgb, color2_rgb, name=name)
    colormap.addColorStop(0.500000, 4294901760)
    return colormap
";
        let saved = decode(text).unwrap();
        let stops = saved.gradient().stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color, Rgb::BLACK);
        assert_eq!(stops[1].color, Rgb::new(255, 0, 0));
        assert_eq!(stops[1].position, 0.5);
        assert_eq!(stops[2].color, Rgb::WHITE);
    }

    #[test]
    fn test_neither_shape_is_a_format_error() {
        let err = decode("x = 3\n# nothing colormap-like here\n").unwrap_err();
        assert!(matches!(err, CmapError::Format(_)));
    }

    #[test]
    fn test_stored_arrays_are_retained() {
        let g = Gradient::default();
        let text = encode(&g, 16);
        let saved = decode(&text).unwrap();
        assert_eq!(saved.sample_count(), Some(16));
        let stored = saved.rgb_array(None).unwrap();
        assert_eq!(stored.len(), 16);
        let positions = saved.positions(None).unwrap();
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[15], 1.0);
    }

    #[test]
    fn test_near_black_stored_samples_keep_their_scale() {
        // A dense array holding only 0s and 1s is still 0-255 data;
        // it must not be mistaken for normalized floats and rescaled.
        let g = Gradient::new(Rgb::BLACK, Rgb::new(1, 1, 1));
        let saved = decode(&encode(&g, 16)).unwrap();
        assert_eq!(
            saved.rgb_array(None).unwrap(),
            saved.rgb_array(Some(16)).unwrap()
        );
        assert_eq!(saved.rgb_array(None).unwrap()[15], Rgb::new(1, 1, 1));
    }

    #[test]
    fn test_malformed_stored_array_does_not_mask_valid_pair() {
        let text = "\
color_positions = [0.0, 1.0]
rgb_colors = [[0, 0, 0], [255, 255, 255]]
_rgb_array_4 = [1.0, 2.0, 3.0]
_rgb_array_3 = [[0, 0, 0], [128, 128, 128], [255, 255, 255]]
_positions_3 = [0.0, 0.5, 1.0]
";
        let saved = decode(text).unwrap();
        assert_eq!(saved.sample_count(), Some(3));
        assert_eq!(
            saved.rgb_array(None).unwrap(),
            vec![Rgb::BLACK, Rgb::new(128, 128, 128), Rgb::WHITE]
        );
    }

    #[test]
    fn test_encode_names_embed_count() {
        let text = encode(&Gradient::default(), 32);
        assert!(text.contains("_rgb_array_32 = ["));
        assert!(text.contains("_positions_32 = ["));
        assert!(text.contains("def get_rgb_array(num_colors = 32):"));
    }
}
