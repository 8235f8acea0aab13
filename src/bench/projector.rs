//! Benchmark projection
//!
//! Looks up canned tables by the selected GPU and CPU ids. Game tables are
//! keyed by GPU; a selected CPU scales them by how CPU-bound each genre is.

use super::{ApplicationPerformance, GameComparison, GamePerformance, TaskResult};
use crate::catalog::{
    AppCategory, ApplicationBenchmark, BenchmarkMetric, Catalog, Category, Component,
    GameBenchmark, GameCategory, Resolution, Selection,
};
use crate::rating::Rating;

/// Default number of games returned by [`top_games`]
pub const DEFAULT_TOP_GAMES: usize = 5;

/// Overall score of applications whose metric has no scoring rule
const UNSCORED_METRIC: f64 = 75.0;

/// Projects canned benchmark tables onto a selection
pub struct BenchmarkProjector<'a> {
    catalog: &'a Catalog,
}

impl<'a> BenchmarkProjector<'a> {
    /// Create a projector backed by a catalog's benchmark tables
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// FPS multiplier for a genre given the selected CPU
    pub fn cpu_modifier(&self, cpu: Option<&Component>, category: GameCategory) -> f64 {
        match cpu {
            Some(cpu) => 1.0 + (self.catalog.cpu_baseline(&cpu.id) - 1.0) * category.cpu_impact(),
            None => 1.0,
        }
    }

    /// Per-game frame rates, esports first
    ///
    /// Empty without a GPU; games with no data for the GPU are left out.
    pub fn games(&self, selection: &Selection) -> Vec<GamePerformance> {
        let Some(gpu) = selection.gpu() else {
            return Vec::new();
        };
        let cpu = selection.processor();

        let mut games: Vec<GamePerformance> = self
            .catalog
            .games
            .iter()
            .filter_map(|game| self.project_game(game, &gpu.id, cpu))
            .collect();

        games.sort_by_key(|g| g.category.sort_rank());
        tracing::debug!("Projected {} game(s) for {}", games.len(), gpu.id);
        games
    }

    fn project_game(
        &self,
        game: &GameBenchmark,
        gpu_id: &str,
        cpu: Option<&Component>,
    ) -> Option<GamePerformance> {
        let base = game.benchmarks.get(gpu_id)?;
        let fps = base.scaled(self.cpu_modifier(cpu, game.category));

        let average_fps = Resolution::ALL
            .iter()
            .map(|r| fps.at(*r).high as f64)
            .sum::<f64>()
            / 3.0;

        Some(GamePerformance {
            game_id: game.id.clone(),
            name: game.name.clone(),
            category: game.category,
            icon: game.icon.clone(),
            fps,
            average_fps,
            playability_rating: playability_rating(average_fps, game.category),
        })
    }

    /// Per-application results, sorted by name
    ///
    /// GPU-keyed tables use the GPU id and CPU-keyed tables the CPU id; each
    /// side is evaluated independently.
    pub fn applications(&self, selection: &Selection) -> Vec<ApplicationPerformance> {
        let mut apps = Vec::new();

        if let Some(gpu) = selection.gpu() {
            apps.extend(
                self.catalog
                    .gpu_applications
                    .iter()
                    .filter_map(|app| project_application(app, &gpu.id)),
            );
        }
        if let Some(cpu) = selection.processor() {
            apps.extend(
                self.catalog
                    .cpu_applications
                    .iter()
                    .filter_map(|app| project_application(app, &cpu.id)),
            );
        }

        apps.sort_by_cached_key(|a| a.name.to_lowercase());
        apps
    }

    /// One game before and after putting `candidate` in `category`
    pub fn compare_game(
        &self,
        selection: &Selection,
        category: Category,
        candidate: &Component,
        game_id: &str,
    ) -> GameComparison {
        let find = |games: Vec<GamePerformance>| games.into_iter().find(|g| g.game_id == game_id);

        let current = find(self.games(selection));
        let swapped = selection.with_swapped(category, candidate.clone());
        let new = find(self.games(&swapped));
        GameComparison::between(current, new)
    }
}

fn project_application(
    app: &ApplicationBenchmark,
    hardware_id: &str,
) -> Option<ApplicationPerformance> {
    let base = app.benchmarks.get(hardware_id)?;
    let tasks: Vec<TaskResult> = base
        .iter()
        .map(|task| TaskResult {
            task_name: task.task_name.clone(),
            value: task.value,
            description: task.description.clone(),
            rating: task_rating(task.value, app.metric, app.category),
        })
        .collect();
    let overall_score = overall_score(&tasks, app.metric);

    Some(ApplicationPerformance {
        app_id: app.id.clone(),
        name: app.name.clone(),
        category: app.category,
        icon: app.icon.clone(),
        metric: app.metric,
        unit: app.unit.clone(),
        tasks,
        overall_score,
    })
}

/// Genre-specific playability label for an average frame rate
pub fn playability_rating(average_fps: f64, category: GameCategory) -> Rating {
    match category {
        GameCategory::Esports => {
            if average_fps >= 240.0 {
                Rating::CompetitivePro
            } else if average_fps >= 144.0 {
                Rating::Competitive
            } else if average_fps >= 60.0 {
                Rating::Casual
            } else {
                Rating::Playable
            }
        }
        GameCategory::Fps => {
            if average_fps >= 120.0 {
                Rating::Excellent
            } else if average_fps >= 90.0 {
                Rating::Great
            } else if average_fps >= 60.0 {
                Rating::Good
            } else {
                Rating::Fair
            }
        }
        GameCategory::Aaa | GameCategory::Indie | GameCategory::Vr => {
            if average_fps >= 90.0 {
                Rating::Excellent
            } else if average_fps >= 60.0 {
                Rating::Great
            } else if average_fps >= 45.0 {
                Rating::Good
            } else if average_fps >= 30.0 {
                Rating::Fair
            } else {
                Rating::Poor
            }
        }
    }
}

/// Qualitative label for one task value
pub fn task_rating(value: f64, metric: BenchmarkMetric, category: AppCategory) -> Rating {
    const LABELS: [Rating; 5] = [
        Rating::Excellent,
        Rating::Great,
        Rating::Good,
        Rating::Fair,
        Rating::Poor,
    ];

    match metric {
        BenchmarkMetric::Time => {
            let limits = match category {
                AppCategory::Video | AppCategory::Rendering => [10.0, 20.0, 40.0, 80.0],
                AppCategory::Development => [30.0, 60.0, 120.0, 240.0],
                _ => return Rating::Good,
            };
            // lower is better
            limits
                .iter()
                .position(|limit| value <= *limit)
                .map_or(Rating::Poor, |i| LABELS[i])
        }
        BenchmarkMetric::Score => [90.0, 80.0, 70.0, 60.0]
            .iter()
            .position(|limit| value >= *limit)
            .map_or(Rating::Poor, |i| LABELS[i]),
        BenchmarkMetric::Fps => Rating::Good,
    }
}

/// 0-100 summary of an application's tasks
///
/// Time metrics map the mean duration to `100 - 2 * mean`; score metrics use
/// the mean score. An empty task list scores 0.
pub fn overall_score(tasks: &[TaskResult], metric: BenchmarkMetric) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let mean = tasks.iter().map(|t| t.value).sum::<f64>() / tasks.len() as f64;

    match metric {
        BenchmarkMetric::Time => (100.0 - mean * 2.0).clamp(0.0, 100.0),
        BenchmarkMetric::Score => mean,
        BenchmarkMetric::Fps => UNSCORED_METRIC,
    }
}

/// The `count` games with the highest average FPS
pub fn top_games(games: &[GamePerformance], count: usize) -> Vec<GamePerformance> {
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| b.average_fps.total_cmp(&a.average_fps));
    sorted.truncate(count);
    sorted
}

/// Games of one genre, in their original order
pub fn games_by_category(
    games: &[GamePerformance],
    category: GameCategory,
) -> Vec<GamePerformance> {
    games
        .iter()
        .filter(|g| g.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Quality;

    const EPS: f64 = 1e-9;

    fn pick(catalog: &Catalog, ids: &[&str]) -> Selection {
        ids.iter()
            .map(|id| catalog.find(id).cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_gpu_only_uses_raw_tables() {
        let catalog = Catalog::reference();
        let games = BenchmarkProjector::new(&catalog).games(&pick(&catalog, &["gpu-1"]));
        assert_eq!(games.len(), 7);

        for game in &games {
            let table = catalog.games.iter().find(|g| g.id == game.game_id).unwrap();
            assert_eq!(game.fps, table.benchmarks["gpu-1"]);
        }
    }

    #[test]
    fn test_games_sorted_by_genre() {
        let catalog = Catalog::reference();
        let games = BenchmarkProjector::new(&catalog).games(&pick(&catalog, &["gpu-2"]));
        let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "counter-strike-2",
                "valorant",
                "apex-legends",
                "fortnite",
                "cyberpunk-2077",
                "red-dead-redemption-2",
                "minecraft-rtx",
            ]
        );
    }

    #[test]
    fn test_no_gpu_or_unknown_gpu() {
        let catalog = Catalog::reference();
        let projector = BenchmarkProjector::new(&catalog);
        assert!(projector.games(&pick(&catalog, &["cpu-1"])).is_empty());

        let mystery = Component::new("gpu-x", Category::Gpu, "ACME", "Mystery", 1.0);
        assert!(projector.games(&Selection::new().with(mystery)).is_empty());
    }

    #[test]
    fn test_cpu_scaling() {
        let catalog = Catalog::reference();
        let projector = BenchmarkProjector::new(&catalog);
        let games = projector.games(&pick(&catalog, &["cpu-4", "gpu-1"]));
        let cs2 = games.iter().find(|g| g.game_id == "counter-strike-2").unwrap();

        // 520 * (1 + (0.82 - 1) * 0.15) = 505.96
        assert_eq!(cs2.fps.at(Resolution::P1080).at(Quality::Low), 506);

        let unknown = Component::new("cpu-x", Category::Processor, "ACME", "Mystery", 1.0);
        let modifier = projector.cpu_modifier(Some(&unknown), GameCategory::Aaa);
        assert!((modifier - (1.0 - 0.2 * 0.08)).abs() < EPS);
        assert_eq!(projector.cpu_modifier(None, GameCategory::Esports), 1.0);
    }

    #[test]
    fn test_average_and_playability() {
        let catalog = Catalog::reference();
        let games = BenchmarkProjector::new(&catalog).games(&pick(&catalog, &["gpu-1"]));

        let valorant = games.iter().find(|g| g.game_id == "valorant").unwrap();
        assert!((valorant.average_fps - 400.0).abs() < EPS);
        assert_eq!(valorant.playability_rating, Rating::CompetitivePro);

        let cyberpunk = games.iter().find(|g| g.game_id == "cyberpunk-2077").unwrap();
        assert!((cyberpunk.average_fps - 278.0 / 3.0).abs() < EPS);
        assert_eq!(cyberpunk.playability_rating, Rating::Excellent);
    }

    #[test]
    fn test_playability_thresholds() {
        assert_eq!(playability_rating(144.0, GameCategory::Esports), Rating::Competitive);
        assert_eq!(playability_rating(59.9, GameCategory::Esports), Rating::Playable);
        assert_eq!(playability_rating(90.0, GameCategory::Fps), Rating::Great);
        assert_eq!(playability_rating(10.0, GameCategory::Fps), Rating::Fair);
        assert_eq!(playability_rating(45.0, GameCategory::Vr), Rating::Good);
        assert_eq!(playability_rating(29.0, GameCategory::Indie), Rating::Poor);
    }

    #[test]
    fn test_task_ratings() {
        use AppCategory::*;
        use BenchmarkMetric::*;

        assert_eq!(task_rating(10.0, Time, Video), Rating::Excellent);
        assert_eq!(task_rating(45.0, Time, Rendering), Rating::Fair);
        assert_eq!(task_rating(81.0, Time, Video), Rating::Poor);
        assert_eq!(task_rating(45.0, Time, Development), Rating::Great);
        assert_eq!(task_rating(500.0, Time, Streaming), Rating::Good);
        assert_eq!(task_rating(85.0, Score, Design), Rating::Great);
        assert_eq!(task_rating(10.0, Score, Design), Rating::Poor);
        assert_eq!(task_rating(10.0, Fps, Video), Rating::Good);
    }

    #[test]
    fn test_applications() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "gpu-1"]);
        let apps = BenchmarkProjector::new(&catalog).applications(&selection);
        let ids: Vec<&str> = apps.iter().map(|a| a.app_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["photoshop", "premiere-pro", "blender", "handbrake", "obs-studio", "visual-studio"]
        );

        let photoshop = &apps[0];
        assert!((photoshop.overall_score - 95.0).abs() < EPS);
        assert!(photoshop.tasks.iter().all(|t| t.rating == Rating::Excellent));

        let blender = &apps[2];
        assert!((blender.overall_score - (100.0 - 2.0 * 55.6 / 3.0)).abs() < 1e-6);

        let visual_studio = &apps[5];
        assert_eq!(visual_studio.overall_score, 0.0);
        assert_eq!(visual_studio.tasks[0].rating, Rating::Great);
    }

    #[test]
    fn test_applications_split_by_hardware() {
        let catalog = Catalog::reference();
        let projector = BenchmarkProjector::new(&catalog);
        assert_eq!(projector.applications(&pick(&catalog, &["gpu-3"])).len(), 3);
        assert_eq!(projector.applications(&pick(&catalog, &["cpu-3"])).len(), 3);
        assert!(projector.applications(&Selection::new()).is_empty());
    }

    #[test]
    fn test_overall_score_edge_cases() {
        assert_eq!(overall_score(&[], BenchmarkMetric::Score), 0.0);
        let task = TaskResult {
            task_name: "t".into(),
            value: 1.0,
            description: String::new(),
            rating: Rating::Good,
        };
        assert_eq!(overall_score(&[task], BenchmarkMetric::Fps), 75.0);
    }

    #[test]
    fn test_compare_game() {
        let catalog = Catalog::reference();
        let projector = BenchmarkProjector::new(&catalog);
        let selection = pick(&catalog, &["gpu-4"]);
        let upgrade = catalog.find("gpu-1").unwrap();

        let cmp = projector.compare_game(&selection, Category::Gpu, upgrade, "fortnite");
        assert_eq!(cmp.improvement.resolution_1080p_high, 360 - 180);
        assert_eq!(cmp.improvement.resolution_4k_high, 130 - 48);

        let empty = projector.compare_game(&Selection::new(), Category::Gpu, upgrade, "fortnite");
        assert!(empty.current.is_none());
        assert_eq!(empty.improvement.resolution_1440p_high, 240);

        let missing = projector.compare_game(&selection, Category::Gpu, upgrade, "no-such-game");
        assert_eq!(missing.improvement.average_fps, 0.0);
    }

    #[test]
    fn test_top_and_category_filters() {
        let catalog = Catalog::reference();
        let games = BenchmarkProjector::new(&catalog).games(&pick(&catalog, &["gpu-1"]));

        let top = top_games(&games, DEFAULT_TOP_GAMES);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].game_id, "valorant");
        for pair in top.windows(2) {
            assert!(pair[0].average_fps >= pair[1].average_fps);
        }

        let esports = games_by_category(&games, GameCategory::Esports);
        assert_eq!(esports.len(), 2);
        assert!(games_by_category(&games, GameCategory::Vr).is_empty());
    }
}
