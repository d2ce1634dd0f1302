//! Ken Burns CLI: generate, simulate, and inspect pan/zoom transitions.
//!
//! Usage:
//!   kenburns generate [OPTIONS]     Print generated transitions as JSON lines
//!   kenburns simulate [OPTIONS]     Drive the frame loop and print crop rects
//!   kenburns ratio <A> <B>          Compare the aspect ratios of two sizes
//!   kenburns config                 Show the effective configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kenburns_common::config::AppConfig;
use kenburns_geometry::rect::Rect;

mod commands;

#[derive(Parser)]
#[command(
    name = "kenburns",
    about = "Pan and zoom across still images with random Ken Burns transitions",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/kenburns/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands that generate transitions.
#[derive(Args, Debug, Clone)]
pub struct AnimationArgs {
    /// Drawable bounds: WIDTHxHEIGHT or LEFT,TOP,RIGHT,BOTTOM
    #[arg(long, default_value = "1920x1080")]
    drawable: Rect,

    /// Viewport size: WIDTHxHEIGHT (only the aspect ratio matters)
    #[arg(long, default_value = "1080x1080")]
    viewport: Rect,

    /// Transition duration in milliseconds (overrides config)
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Easing curve: linear|accelerate-decelerate|accelerate|decelerate
    #[arg(long)]
    easing: Option<String>,

    /// Draw every source rect independently instead of continuing from
    /// the previous destiny rect
    #[arg(long)]
    no_chain: bool,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate transitions and print them as JSON lines
    Generate {
        #[command(flatten)]
        animation: AnimationArgs,

        /// Number of transitions to generate
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Simulate the frame loop and print one crop rect per frame
    Simulate {
        #[command(flatten)]
        animation: AnimationArgs,

        /// Total simulated time (seconds)
        #[arg(long, default_value = "20.0")]
        duration_secs: f64,

        /// Frame rate (overrides config)
        #[arg(long)]
        fps: Option<u32>,

        /// Pace frames with the wall clock instead of simulated time
        #[arg(long)]
        realtime: bool,
    },

    /// Check whether two sizes share an aspect ratio
    Ratio {
        /// First size (WIDTHxHEIGHT)
        a: Rect,

        /// Second size (WIDTHxHEIGHT)
        b: Rect,
    },

    /// Print the effective configuration
    Config {
        /// Also write it back to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    let loaded = config.clone();

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    kenburns_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Generate { animation, count } => {
            commands::generate::run(&config, &animation, count)
        }
        Commands::Simulate {
            animation,
            duration_secs,
            fps,
            realtime,
        } => commands::simulate::run(&config, &animation, duration_secs, fps, realtime),
        Commands::Ratio { a, b } => commands::ratio::run(a, b),
        Commands::Config { write } => {
            commands::config::run(&loaded, write, cli.config.as_deref())
        }
    }
}
