//! Configuration settings for RigCheck
//!
//! Defines the CLI arguments and the runtime configuration derived from
//! them: which catalog to use and which parts are selected.

use crate::catalog::{BuildFile, Catalog, Category, GameCategory, Resolution, Selection};
use crate::error::{Result, RigCheckError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// RigCheck - PC build compatibility and performance checker
#[derive(Parser, Debug, Clone)]
#[command(name = "rigcheck")]
#[command(author = "RigCheck Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check PC builds for compatibility and estimate their performance")]
#[command(long_about = r#"
RigCheck validates a set of PC parts against a component catalog.

Features:
  - Compatibility rules (socket, memory, power, clearance, cooler, form factor)
  - Ranked replacement recommendations for critical issues
  - Gaming and productivity scores with bottleneck detection
  - Per-game FPS and per-application benchmark projections

Examples:
  rigcheck check --part processor=cpu-1 --part motherboard=mb-2
  rigcheck report --build my-build.json
  rigcheck compare gpu gpu-2 --build my-build.json --game cyberpunk-2077
  rigcheck games --part gpu=gpu-1 --top 3 --format json
  rigcheck catalog processor
"#)]
pub struct CliArgs {
    /// Catalog JSON file (default: built-in reference catalog)
    #[arg(long, global = true, value_name = "PATH", env = "RIGCHECK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Build file with the selected parts
    #[arg(short = 'b', long, global = true, value_name = "PATH")]
    pub build: Option<PathBuf>,

    /// Select a part, overriding the build file (repeatable)
    #[arg(short = 'p', long = "part", global = true, value_name = "CATEGORY=ID")]
    pub parts: Vec<String>,

    /// Write the resolved selection to a build file
    #[arg(long, global = true, value_name = "PATH")]
    pub save_build: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check the selection for compatibility issues
    #[command(name = "check")]
    Check,

    /// Recommend replacements for critical issues
    #[command(name = "recommend")]
    Recommend,

    /// Show performance scores and per-part contributions
    #[command(name = "performance")]
    Performance,

    /// Compare the selection with one part swapped
    #[command(name = "compare")]
    Compare {
        /// Category of the part to swap
        #[arg(value_enum)]
        category: Category,
        /// Catalog id of the candidate part
        id: String,
        /// Also compare projected FPS for this game
        #[arg(short, long, value_name = "GAME_ID")]
        game: Option<String>,
    },

    /// Project frame rates for every benchmarked game
    #[command(name = "games")]
    Games {
        /// Only games of this genre
        #[arg(short, long, value_enum)]
        category: Option<GameCategory>,
        /// Only the N games with the highest average FPS
        #[arg(short, long, value_name = "N")]
        top: Option<usize>,
    },

    /// Project application benchmark results
    #[command(name = "apps")]
    Apps,

    /// Estimate frame rates from an overall score
    #[command(name = "frames")]
    Frames {
        /// Overall performance score (0-100)
        score: f64,
        /// Target resolution
        #[arg(short, long, value_enum, default_value = "1080p")]
        resolution: Resolution,
    },

    /// Run every analysis and print a full report
    #[command(name = "report")]
    Report,

    /// List catalog parts
    #[command(name = "catalog")]
    Catalog {
        /// Only parts of this category
        #[arg(value_enum)]
        category: Option<Category>,
        /// Write the catalog as JSON to this path
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Catalog every analysis runs against
    pub catalog: Catalog,
    /// Selected parts
    pub selection: Selection,
    /// Name carried over from the build file
    pub build_name: Option<String>,
    /// Output format
    pub format: OutputFormat,
}

/// Parse a `category=id` part argument
pub fn parse_part_arg(arg: &str) -> Result<(Category, String)> {
    let (category, id) = arg
        .split_once('=')
        .ok_or_else(|| RigCheckError::InvalidPart(arg.to_string()))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(RigCheckError::InvalidPart(arg.to_string()));
    }

    Ok((category.parse()?, id.to_string()))
}

impl RunConfig {
    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let catalog = match &args.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::reference(),
        };

        let mut config = Self {
            catalog,
            format: args.format,
            ..Default::default()
        };

        if let Some(path) = &args.build {
            let build = BuildFile::load(path)?;
            config.selection = build
                .resolve(&config.catalog)
                .map_err(|e| e.with_context(format!("resolving build {}", path.display())))?;
            config.build_name = build.name;
        }

        for arg in &args.parts {
            let (category, id) = parse_part_arg(arg)?;
            let part = config.catalog.find_in(category, &id)?.clone();
            if let Some(previous) = config.selection.set(part) {
                tracing::debug!("Replaced {} {} from command line", category, previous.id);
            }
        }

        Ok(config)
    }

    /// Save the resolved selection as a build file
    pub fn save_build(&self, path: &std::path::Path) -> Result<()> {
        BuildFile::from_selection(self.build_name.clone(), &self.selection).save(path)
    }
}
