//! Build report
//!
//! Runs every analysis over one selection and bundles the results, the way a
//! saved build or leaderboard entry consumes them.

use crate::bench::{ApplicationPerformance, BenchmarkProjector, GamePerformance};
use crate::catalog::{Catalog, Category, Selection};
use crate::compat::{
    CompatibilityChecker, CompatibilityIssue, CompatibilityStatus, Severity, StatusLevel,
};
use crate::perf::{ComponentContribution, Improvement, PerformanceEstimator, PerformanceMetrics};
use crate::rating::{performance_rating, RatedScore};
use crate::recommend::{ComponentRecommendation, Priority, RecommendationEngine};
use console::style;
use serde::Serialize;

/// A recommendation with the score change it would bring
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecommendation {
    /// The recommendation
    #[serde(flatten)]
    pub recommendation: ComponentRecommendation,
    /// Score deltas if it were applied
    pub performance_delta: Improvement,
}

/// One selected part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartLine {
    /// Category
    pub category: Category,
    /// Component id
    pub id: String,
    /// "Brand Name"
    pub name: String,
    /// Price in USD
    pub price: f64,
}

/// Everything known about a selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Selected parts in category order
    pub parts: Vec<PartLine>,
    /// Sum of selected prices
    pub total_price: f64,
    /// Compatibility issues in rule order
    pub issues: Vec<CompatibilityIssue>,
    /// Compatibility verdict
    pub status: CompatibilityStatus,
    /// Ranked fixes for error issues
    pub recommendations: Vec<ScoredRecommendation>,
    /// Scores
    pub performance: PerformanceMetrics,
    /// Label for the overall score
    pub rating: RatedScore,
    /// Per-part contributions
    pub bottlenecks: Vec<ComponentContribution>,
    /// Game projections
    pub games: Vec<GamePerformance>,
    /// Application projections
    pub applications: Vec<ApplicationPerformance>,
}

impl BuildReport {
    /// Analyze a selection against a catalog
    pub fn analyze(catalog: &Catalog, selection: &Selection) -> Self {
        let estimator = PerformanceEstimator::new(catalog);
        let projector = BenchmarkProjector::new(catalog);

        let issues = CompatibilityChecker::new(catalog).check(selection);
        let status = CompatibilityStatus::from_issues(&issues);
        let recommendations = RecommendationEngine::new(catalog)
            .recommend(&issues, selection)
            .into_iter()
            .map(|rec| {
                let performance_delta = estimator
                    .compare(selection, rec.component_type, &rec.component)
                    .improvement;
                ScoredRecommendation {
                    recommendation: rec,
                    performance_delta,
                }
            })
            .collect();

        let performance = estimator.metrics(selection);
        let parts = selection
            .iter()
            .map(|(category, part)| PartLine {
                category,
                id: part.id.clone(),
                name: part.full_name(),
                price: part.price,
            })
            .collect();

        Self {
            parts,
            total_price: selection.total_price(),
            issues,
            status,
            recommendations,
            rating: performance_rating(performance.overall),
            performance,
            bottlenecks: estimator.bottlenecks(selection),
            games: projector.games(selection),
            applications: projector.applications(selection),
        }
    }

    /// Print a human-readable summary
    pub fn print_summary(&self) {
        println!("{}", style("=== Build Report ===").bold());
        for part in &self.parts {
            println!(
                "  {:<13} {:<40} ${:>8.2}",
                part.category.display_name(),
                part.name,
                part.price
            );
        }
        println!("  {:<13} {:<40} ${:>8.2}", "Total", "", self.total_price);

        println!();
        print_status(&self.status);
        print_issues(&self.issues);

        if !self.recommendations.is_empty() {
            println!("\n{}", style("Recommendations").bold().underlined());
            for scored in &self.recommendations {
                print_recommendation(&scored.recommendation);
                println!(
                    "      gaming {:+.1}, productivity {:+.1}, overall {:+.1}",
                    scored.performance_delta.gaming,
                    scored.performance_delta.productivity,
                    scored.performance_delta.overall
                );
            }
        }

        println!("\n{}", style("Performance").bold().underlined());
        print_metrics(&self.performance);
        println!(
            "  Rating: {} ({})",
            style(self.rating.rating).cyan(),
            self.rating.description
        );

        for contribution in &self.bottlenecks {
            if let Some(note) = &contribution.bottleneck {
                println!(
                    "  {} {}: {}",
                    style("!").yellow(),
                    contribution.component.display_name(),
                    note
                );
            }
        }

        if !self.games.is_empty() {
            println!("\n{}", style("Games").bold().underlined());
            print_games(&self.games);
        }
        if !self.applications.is_empty() {
            println!("\n{}", style("Applications").bold().underlined());
            print_applications(&self.applications);
        }
    }
}

/// Print the compatibility verdict line
pub fn print_status(status: &CompatibilityStatus) {
    let line = match status.status {
        StatusLevel::Error => style(format!("[x] {}", status.message)).red().bold(),
        StatusLevel::Warning => style(format!("[!] {}", status.message)).yellow(),
        StatusLevel::Compatible => style(format!("[ok] {}", status.message)).green(),
    };
    println!("{}", line);
}

/// Print issues, one per line
pub fn print_issues(issues: &[CompatibilityIssue]) {
    for issue in issues {
        let tag = match issue.severity {
            Severity::Error => style("[!!]").red(),
            Severity::Warning => style("[!]").yellow(),
            Severity::Info => style("[i]").dim(),
        };
        println!("  {} {} ({})", tag, issue.message, issue.rule);
    }
}

/// Print one recommendation
pub fn print_recommendation(rec: &ComponentRecommendation) {
    let priority = match rec.priority {
        Priority::High => style("high").red(),
        Priority::Medium => style("medium").yellow(),
        Priority::Low => style("low").dim(),
    };
    println!(
        "  [{}] {} {} -> {} (${:.2}, {:?} price)",
        priority,
        rec.component_type.display_name(),
        rec.component.id,
        rec.component.full_name(),
        rec.component.price,
        rec.price_impact
    );
    println!("      {}", rec.reason);
}

/// Print the score table
pub fn print_metrics(metrics: &PerformanceMetrics) {
    let g = &metrics.gaming;
    let p = &metrics.productivity;
    println!(
        "  Gaming:       1080p {:>5.1}  1440p {:>5.1}  4K {:>5.1}  avg {:>5.1}",
        g.resolution_1080p, g.resolution_1440p, g.resolution_4k, g.average_fps
    );
    println!(
        "  Productivity: video {:>5.1}  3D {:>5.1}  code {:>5.1}  stream {:>5.1}  avg {:>5.1}",
        p.video_editing, p.rendering_3d, p.programming, p.streaming, p.overall
    );
    println!("  Overall:      {:>5.1}", metrics.overall);
}

/// Print game projections
pub fn print_games(games: &[GamePerformance]) {
    for game in games {
        let fps = &game.fps;
        println!(
            "  {} {:<24} 1080p {:>4}  1440p {:>4}  4K {:>4}  avg {:>6.1}  {}",
            game.icon,
            game.name,
            fps.resolution_1080p.high,
            fps.resolution_1440p.high,
            fps.resolution_4k.high,
            game.average_fps,
            style(game.playability_rating).cyan()
        );
    }
}

/// Print application projections
pub fn print_applications(apps: &[ApplicationPerformance]) {
    for app in apps {
        println!("  {} {} (score {:.1})", app.icon, style(&app.name).bold(), app.overall_score);
        for task in &app.tasks {
            println!(
                "      {:<28} {:>8.1} {:<8} {}",
                task.task_name, task.value, app.unit, task.rating
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(catalog: &Catalog, ids: &[&str]) -> Selection {
        ids.iter()
            .map(|id| catalog.find(id).cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_report_bundles_everything() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "mb-2", "gpu-1", "ram-1", "ssd-1", "psu-3"]);
        let report = BuildReport::analyze(&catalog, &selection);

        assert_eq!(report.parts.len(), 6);
        assert_eq!(report.total_price, 589.0 + 499.0 + 1599.0 + 179.0 + 199.0 + 69.0);
        assert_eq!(report.status.status, StatusLevel::Error);
        assert_eq!(report.status.message, "2 critical compatibility issues found");
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.games.len(), 7);
        assert_eq!(report.applications.len(), 6);
        assert_eq!(report.bottlenecks.len(), 4);
    }

    #[test]
    fn test_recommendations_carry_score_deltas() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "mb-2", "gpu-1"]);
        let report = BuildReport::analyze(&catalog, &selection);

        // swapping the i9 for the Ryzen 5 lowers gaming scores
        let cpu4 = report
            .recommendations
            .iter()
            .find(|r| r.recommendation.component.id == "cpu-4")
            .unwrap();
        assert!(cpu4.performance_delta.gaming < 0.0);

        // swapping the board changes nothing rated
        let board = report
            .recommendations
            .iter()
            .find(|r| r.recommendation.component.id == "mb-1")
            .unwrap();
        assert_eq!(board.performance_delta.overall, 0.0);
    }

    #[test]
    fn test_report_json_flattens_recommendation() {
        let catalog = Catalog::reference();
        let report = BuildReport::analyze(&catalog, &pick(&catalog, &["cpu-1", "mb-2"]));
        let json = serde_json::to_value(&report).unwrap();
        let first = &json["recommendations"][0];
        assert_eq!(first["componentType"], "processor");
        assert!(first.get("performanceDelta").is_some());
        assert_eq!(json["status"]["status"], "error");
    }

    #[test]
    fn test_empty_report() {
        let catalog = Catalog::reference();
        let report = BuildReport::analyze(&catalog, &Selection::new());
        assert_eq!(report.total_price, 0.0);
        assert_eq!(report.status.status, StatusLevel::Compatible);
        assert_eq!(report.performance.gaming.average_fps, 0.0);
        assert!(report.games.is_empty());
    }
}
