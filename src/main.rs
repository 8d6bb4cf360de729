use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

use cmap_maker::commands;
use cmap_maker::config::AppConfig;

/// cmap-maker - design colormaps from color stops and export them as
/// portable colormap files
#[derive(Parser, Debug)]
#[command(name = "cmap-maker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the color stops stored in a colormap file
    Info {
        file: PathBuf,
    },
    /// Print interpolated RGB samples from a colormap file
    Sample {
        file: PathBuf,
        /// Number of samples to compute (defaults to the file's saved count)
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
        /// Query a single position in [0, 1] instead of a dense array
        #[arg(short = 'p', long = "position")]
        position: Option<f64>,
    },
    /// Create a colormap file from a built-in preset
    New {
        out: PathBuf,
        /// Preset to start from (grayscale, heat, cool, viridis, spectral)
        #[arg(long, default_value = "grayscale")]
        preset: String,
        /// Dense sample count to save (defaults to the configured value)
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
    },
    /// Re-encode a colormap file, optionally at a different sample count
    Resave {
        input: PathBuf,
        out: PathBuf,
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
    },
    /// Add a color stop to a colormap file
    AddStop {
        file: PathBuf,
        /// Stop position in [0, 1]
        position: f64,
        /// Stop color as hex (#rrggbb); omitted = interpolate from the
        /// colormap at that position
        #[arg(short = 'c', long = "color")]
        color: Option<String>,
    },
    /// Remove an interior color stop by index
    RemoveStop {
        file: PathBuf,
        index: usize,
    },
    /// Change the color of an existing stop
    SetColor {
        file: PathBuf,
        index: usize,
        /// New color as hex (#rrggbb)
        color: String,
    },
    /// Persist the default sample count used for new colormaps
    SetDefaultCount {
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Verbosity from repeated -d flags; RUST_LOG still overrides.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Info { file } => commands::show_info(&file),
        Command::Sample {
            file,
            count,
            position,
        } => commands::show_samples(&file, count, position),
        Command::New { out, preset, count } => {
            let config = AppConfig::load()?;
            commands::create_new(&config, &out, &preset, count)
        }
        Command::Resave { input, out, count } => commands::resave(&input, &out, count),
        Command::AddStop {
            file,
            position,
            color,
        } => {
            let color = color.as_deref().map(commands::parse_color_arg).transpose()?;
            commands::add_stop(&file, position, color)
        }
        Command::RemoveStop { file, index } => commands::remove_stop(&file, index),
        Command::SetColor { file, index, color } => {
            commands::set_color(&file, index, commands::parse_color_arg(&color)?)
        }
        Command::SetDefaultCount { count } => commands::set_default_count(count),
    }
}
