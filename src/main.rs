//! RigCheck CLI - PC Build Compatibility and Performance Checker
//!
//! Thin shell over the library: resolves a selection, runs one analysis and
//! prints it as text or JSON.

use clap::Parser;
use console::style;
use rigcheck::bench::{games_by_category, top_games, BenchmarkProjector};
use rigcheck::catalog::{Category, Quality};
use rigcheck::compat::{CompatibilityChecker, CompatibilityStatus};
use rigcheck::config::{CliArgs, Commands, OutputFormat, RunConfig};
use rigcheck::error::Result;
use rigcheck::perf::{estimate_frame_rates, PerformanceEstimator};
use rigcheck::rating::{frame_rate_rating, performance_rating};
use rigcheck::recommend::RecommendationEngine;
use rigcheck::report::{self, BuildReport};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        if let Some(id) = e.component_id() {
            eprintln!("Hint: '{}' was not usable; run `rigcheck catalog` to list part ids", id);
        }
        std::process::exit(if e.is_user_error() { 2 } else { 1 });
    }
}

fn run(args: CliArgs) -> Result<()> {
    let Some(command) = &args.command else {
        eprintln!("Usage: rigcheck <COMMAND> [--part CATEGORY=ID]... [--build PATH]");
        eprintln!("       rigcheck --help for more information");
        eprintln!("       rigcheck report   - Full analysis of a build");
        eprintln!("       rigcheck catalog  - List available parts");
        std::process::exit(1);
    };

    // Build configuration
    let config = RunConfig::from_cli(&args)?;

    // Print configuration if verbose
    if args.verbose > 0 && config.format == OutputFormat::Text {
        print_config(&config);
    }

    if let Some(path) = &args.save_build {
        config.save_build(path)?;
        tracing::info!("Saved build to {}", path.display());
    }

    handle_command(command, &config, args.quiet)
}

fn handle_command(command: &Commands, config: &RunConfig, quiet: bool) -> Result<()> {
    match command {
        Commands::Check => cmd_check(config, quiet),
        Commands::Recommend => cmd_recommend(config),
        Commands::Performance => cmd_performance(config),
        Commands::Compare { category, id, game } => {
            cmd_compare(config, *category, id, game.as_deref())
        }
        Commands::Games { category, top } => cmd_games(config, *category, *top),
        Commands::Apps => cmd_apps(config),
        Commands::Frames { score, resolution } => cmd_frames(config, *score, *resolution),
        Commands::Report => cmd_report(config),
        Commands::Catalog { category, export } => {
            cmd_catalog(config, *category, export.as_deref())
        }
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_check(config: &RunConfig, quiet: bool) -> Result<()> {
    let issues = CompatibilityChecker::new(&config.catalog).check(&config.selection);
    let status = CompatibilityStatus::from_issues(&issues);

    match config.format {
        OutputFormat::Json => emit_json(&json!({ "status": status, "issues": issues }))?,
        OutputFormat::Text => {
            report::print_status(&status);
            if !quiet {
                report::print_issues(&issues);
            }
        }
    }

    if issues.iter().any(|issue| issue.is_error()) {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_recommend(config: &RunConfig) -> Result<()> {
    let issues = CompatibilityChecker::new(&config.catalog).check(&config.selection);
    let recommendations =
        RecommendationEngine::new(&config.catalog).recommend(&issues, &config.selection);

    match config.format {
        OutputFormat::Json => emit_json(&recommendations),
        OutputFormat::Text => {
            if recommendations.is_empty() {
                println!("{}", style("No critical issues, nothing to replace.").green());
            }
            for rec in &recommendations {
                report::print_recommendation(rec);
            }
            Ok(())
        }
    }
}

fn cmd_performance(config: &RunConfig) -> Result<()> {
    let estimator = PerformanceEstimator::new(&config.catalog);
    let metrics = estimator.metrics(&config.selection);
    let bottlenecks = estimator.bottlenecks(&config.selection);
    let rating = performance_rating(metrics.overall);

    match config.format {
        OutputFormat::Json => emit_json(&json!({
            "performance": metrics,
            "rating": rating,
            "bottlenecks": bottlenecks,
        })),
        OutputFormat::Text => {
            report::print_metrics(&metrics);
            println!("  Rating: {} ({})", style(rating.rating).cyan(), rating.description);

            println!("\n{}", style("Contributions").bold().underlined());
            for part in &bottlenecks {
                println!(
                    "  {:<13} gaming {:>5.1}  productivity {:>5.1}  {}",
                    part.component.display_name(),
                    part.gaming_contribution,
                    part.productivity_contribution,
                    part.bottleneck.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }
    }
}

fn cmd_compare(config: &RunConfig, category: Category, id: &str, game: Option<&str>) -> Result<()> {
    let candidate = config.catalog.find_in(category, id)?;
    let comparison =
        PerformanceEstimator::new(&config.catalog).compare(&config.selection, category, candidate);
    let game_comparison = game.map(|game_id| {
        BenchmarkProjector::new(&config.catalog).compare_game(
            &config.selection,
            category,
            candidate,
            game_id,
        )
    });

    match config.format {
        OutputFormat::Json => emit_json(&json!({
            "performance": comparison,
            "game": game_comparison,
        })),
        OutputFormat::Text => {
            println!(
                "Swapping {} for {}\n",
                category.display_name(),
                style(candidate.full_name()).bold()
            );
            println!("{}", style("Current").bold().underlined());
            report::print_metrics(&comparison.current_performance);
            println!("{}", style("After swap").bold().underlined());
            report::print_metrics(&comparison.new_performance);

            let delta = comparison.improvement;
            println!(
                "\n  Change: gaming {:+.1}, productivity {:+.1}, overall {:+.1}",
                delta.gaming, delta.productivity, delta.overall
            );

            if let (Some(game_id), Some(cmp)) = (game, game_comparison) {
                let fps = cmp.improvement;
                println!("\n{}", style(format!("Game: {}", game_id)).bold().underlined());
                if cmp.current.is_none() && cmp.new.is_none() {
                    println!("  No benchmark data for this game");
                }
                println!(
                    "  avg {:+.1}  1080p {:+}  1440p {:+}  4K {:+}",
                    fps.average_fps,
                    fps.resolution_1080p_high,
                    fps.resolution_1440p_high,
                    fps.resolution_4k_high
                );
            }
            Ok(())
        }
    }
}

fn cmd_games(
    config: &RunConfig,
    category: Option<rigcheck::catalog::GameCategory>,
    top: Option<usize>,
) -> Result<()> {
    let mut games = BenchmarkProjector::new(&config.catalog).games(&config.selection);
    if let Some(category) = category {
        games = games_by_category(&games, category);
    }
    if let Some(count) = top {
        games = top_games(&games, count);
    }

    match config.format {
        OutputFormat::Json => emit_json(&games),
        OutputFormat::Text => {
            if games.is_empty() {
                println!("No game projections (select a GPU with benchmark data)");
            }
            report::print_games(&games);
            Ok(())
        }
    }
}

fn cmd_apps(config: &RunConfig) -> Result<()> {
    let apps = BenchmarkProjector::new(&config.catalog).applications(&config.selection);

    match config.format {
        OutputFormat::Json => emit_json(&apps),
        OutputFormat::Text => {
            if apps.is_empty() {
                println!("No application projections (select a CPU or GPU with benchmark data)");
            }
            report::print_applications(&apps);
            Ok(())
        }
    }
}

fn cmd_frames(
    config: &RunConfig,
    score: f64,
    resolution: rigcheck::catalog::Resolution,
) -> Result<()> {
    let fps = estimate_frame_rates(score, resolution);
    let qualities = [Quality::Low, Quality::Medium, Quality::High, Quality::Ultra];

    match config.format {
        OutputFormat::Json => {
            let rows: Vec<_> = qualities
                .iter()
                .map(|&quality| {
                    let value = fps.at(quality);
                    json!({
                        "quality": quality,
                        "fps": value,
                        "rating": frame_rate_rating(value as f64, resolution, quality),
                    })
                })
                .collect();
            emit_json(&json!({ "resolution": resolution, "estimates": rows }))
        }
        OutputFormat::Text => {
            println!("Estimated frame rates at {} for score {:.1}\n", resolution, score);
            for quality in qualities {
                let value = fps.at(quality);
                let rating = frame_rate_rating(value as f64, resolution, quality);
                println!(
                    "  {:<7} {:>4} fps  {}",
                    format!("{:?}", quality),
                    value,
                    style(rating.rating).cyan()
                );
            }
            Ok(())
        }
    }
}

fn cmd_report(config: &RunConfig) -> Result<()> {
    let report = BuildReport::analyze(&config.catalog, &config.selection);

    match config.format {
        OutputFormat::Json => emit_json(&report),
        OutputFormat::Text => {
            if let Some(name) = &config.build_name {
                println!("{}\n", style(name).bold());
            }
            report.print_summary();
            Ok(())
        }
    }
}

fn cmd_catalog(
    config: &RunConfig,
    category: Option<Category>,
    export: Option<&Path>,
) -> Result<()> {
    if let Some(path) = export {
        config.catalog.save(path)?;
        println!("Catalog written to {}", path.display());
        return Ok(());
    }

    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    match config.format {
        OutputFormat::Json => {
            let parts: Vec<_> = categories
                .iter()
                .flat_map(|&c| config.catalog.by_category(c))
                .collect();
            emit_json(&parts)
        }
        OutputFormat::Text => {
            for category in categories {
                println!("{}", style(category.display_name()).bold().underlined());
                for part in config.catalog.by_category(category) {
                    println!(
                        "  {:<10} {:<40} ${:>8.2}  {}",
                        part.id,
                        part.full_name(),
                        part.price,
                        part.performance.as_deref().unwrap_or("")
                    );
                }
                println!();
            }
            Ok(())
        }
    }
}

fn print_config(config: &RunConfig) {
    println!("=== Configuration ===");
    println!(
        "Catalog:     {} parts, {} games",
        config.catalog.components.len(),
        config.catalog.games.len()
    );
    for (category, count) in config.catalog.counts() {
        println!("  {:<13} {}", category.display_name(), count);
    }
    if let Some(name) = &config.build_name {
        println!("Build:       {}", name);
    }
    println!("Selection:   {} parts", config.selection.len());
    for (category, part) in config.selection.iter() {
        println!("  {:<13} {}", category.display_name(), part.id);
    }
    println!();
}
