//! Implementations of the CLI subcommands.
//!
//! Each command is a thin wrapper: load/decode, run one session or
//! codec operation, write back. Errors carry enough context to be
//! printed to the user as-is.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use cmap_maker_core::{
    codec, presets, validate_sample_count, EditorSession, SavedColormap, DEFAULT_SAMPLE_COUNT,
};
use cmap_maker_types::Rgb;

use crate::config::AppConfig;

fn load(path: &Path) -> Result<SavedColormap> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    codec::decode(&text).with_context(|| format!("Failed to decode {}", path.display()))
}

fn load_session(path: &Path) -> Result<EditorSession> {
    let mut session = EditorSession::new();
    session
        .load_from_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(session)
}

/// `info`: print the stop table of a colormap file.
pub fn show_info(path: &Path) -> Result<()> {
    let saved = load(path)?;
    match saved.sample_count() {
        Some(n) => println!("{} (saved sample count: {n})", path.display()),
        None => println!("{} (no stored sample array)", path.display()),
    }
    println!("{:<5}  {:<8}  {:<7}  RGB", "Index", "Position", "Hex");
    for (i, stop) in saved.gradient().stops().iter().enumerate() {
        let c = stop.color;
        println!(
            "{:<5}  {:<8.4}  {:<7}  ({}, {}, {})",
            i,
            stop.position,
            c.to_hex(),
            c.r,
            c.g,
            c.b
        );
    }
    Ok(())
}

/// `sample`: dense samples, or a single position query with `-p`.
pub fn show_samples(path: &Path, count: Option<usize>, position: Option<f64>) -> Result<()> {
    let saved = load(path)?;

    if let Some(p) = position {
        let c = saved.gradient().sample(p);
        println!("{:.4}  {}  ({}, {}, {})", p.clamp(0.0, 1.0), c.to_hex(), c.r, c.g, c.b);
        return Ok(());
    }

    let colors = saved.rgb_array(count)?;
    let positions = saved.positions(count)?;
    println!("{:<5}  {:<8}  {:<7}  RGB", "Index", "Position", "Hex");
    for (i, (p, c)) in positions.iter().zip(&colors).enumerate() {
        println!(
            "{:<5}  {:<8.4}  {:<7}  ({}, {}, {})",
            i,
            p,
            c.to_hex(),
            c.r,
            c.g,
            c.b
        );
    }
    Ok(())
}

/// `new`: write a colormap file seeded from a built-in preset.
pub fn create_new(config: &AppConfig, out: &Path, preset: &str, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.sample_count);
    validate_sample_count(count)?;

    let mut session = EditorSession::with_gradient(presets::builtin(preset)?);
    session.set_sample_count(count)?;
    session
        .save_to_path(out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Created {} from preset '{preset}' ({count} samples)", out.display());
    Ok(())
}

/// `resave`: decode a file and re-encode it, optionally at another
/// sample count.
pub fn resave(input: &Path, out: &Path, count: Option<usize>) -> Result<()> {
    let saved = load(input)?;
    let count = match count {
        Some(n) => {
            validate_sample_count(n)?;
            n
        }
        // The count adopted from the input file needs the same range
        // guard as an explicit one; foreign files can declare anything.
        None => match saved.sample_count() {
            Some(n) if validate_sample_count(n).is_ok() => n,
            Some(n) => {
                warn!(
                    "{} declares {n} samples, outside the supported range; using {}",
                    input.display(),
                    DEFAULT_SAMPLE_COUNT
                );
                DEFAULT_SAMPLE_COUNT
            }
            None => DEFAULT_SAMPLE_COUNT,
        },
    };
    let text = codec::encode(saved.gradient(), count);
    fs::write(out, text).with_context(|| format!("Failed to write {}", out.display()))?;
    info!("re-encoded {} at {count} samples", input.display());
    println!("Wrote {} ({count} samples)", out.display());
    Ok(())
}

/// `add-stop`: insert a stop into an existing file. Without a color the
/// stop takes the gradient's own interpolated color at that position.
pub fn add_stop(path: &Path, position: f64, color: Option<Rgb>) -> Result<()> {
    let mut session = load_session(path)?;
    let index = session.add_stop(position, color)?;
    session
        .save_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let c = session.gradient().stops()[index].color;
    println!("Added stop {index} at {position:.4} with color {}", c.to_hex());
    Ok(())
}

/// `remove-stop`: remove an interior stop by index.
pub fn remove_stop(path: &Path, index: usize) -> Result<()> {
    let mut session = load_session(path)?;
    let removed = session.remove_stop(index)?;
    session
        .save_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "Removed stop {index} (was {} at {:.4})",
        removed.color.to_hex(),
        removed.position
    );
    Ok(())
}

/// `set-color`: recolor an existing stop by index.
pub fn set_color(path: &Path, index: usize, color: Rgb) -> Result<()> {
    let mut session = load_session(path)?;
    session.edit_stop_color(index, color)?;
    session
        .save_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Stop {index} is now {}", color.to_hex());
    Ok(())
}

/// `set-default-count`: persist the default sample count in the app
/// config.
pub fn set_default_count(count: usize) -> Result<()> {
    validate_sample_count(count)?;
    let mut config = AppConfig::load()?;
    config.sample_count = count;
    config.save()?;
    println!("Default sample count is now {count}");
    Ok(())
}

/// Parse a `#rrggbb` CLI argument.
pub fn parse_color_arg(s: &str) -> Result<Rgb> {
    Rgb::parse_hex(s)
        .ok_or_else(|| anyhow::anyhow!("Invalid color '{s}', expected hex like #ff8800"))
}
