//! Weighted performance model
//!
//! Scores come from id-keyed rating tables. A part with no rating entry is
//! treated as "no data": gaming needs both CPU and GPU ratings, productivity
//! needs a CPU rating, and the other parts fall back to neutral defaults.

use super::{
    ComponentContribution, GamingScores, PerformanceComparison, PerformanceMetrics,
    ProductivityScores,
};
use crate::catalog::{
    Catalog, Category, Component, CpuRating, GpuRating, MemoryRating, Resolution, Selection,
    StorageRating,
};

/// Per-category weights of one score family
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    /// GPU weight
    pub gpu: f64,
    /// CPU weight
    pub processor: f64,
    /// Memory weight
    pub memory: f64,
    /// Storage weight
    pub storage: f64,
}

/// Weights of the gaming score
pub const GAMING_WEIGHTS: Weights = Weights {
    gpu: 0.70,
    processor: 0.20,
    memory: 0.08,
    storage: 0.02,
};

/// Weights of the productivity score
pub const PRODUCTIVITY_WEIGHTS: Weights = Weights {
    gpu: 0.25,
    processor: 0.50,
    memory: 0.20,
    storage: 0.05,
};

/// Sub-score assumed for unrated memory or storage
const NEUTRAL_RATING: f64 = 70.0;
/// GPU productivity assumed without a rated GPU
const NEUTRAL_GPU_PRODUCTIVITY: f64 = 50.0;

/// Productivity workloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Workload {
    VideoEditing,
    Rendering,
    Programming,
    Streaming,
}

/// Ratings of the selected parts
#[derive(Clone, Copy)]
struct Rated<'c> {
    cpu: Option<&'c CpuRating>,
    gpu: Option<&'c GpuRating>,
    memory: Option<&'c MemoryRating>,
    storage: Option<&'c StorageRating>,
}

impl Rated<'_> {
    fn gaming(&self, resolution: Resolution) -> f64 {
        let (Some(cpu), Some(gpu)) = (self.cpu, self.gpu) else {
            return 0.0;
        };
        let w = GAMING_WEIGHTS;
        let memory = self.memory.map_or(NEUTRAL_RATING, |m| m.gaming);
        let storage = self.storage.map_or(NEUTRAL_RATING, |s| s.gaming);

        let score = gpu.at(resolution) * w.gpu
            + cpu.gaming * w.processor
            + memory * w.memory
            + storage * w.storage;
        score.clamp(0.0, 100.0)
    }

    fn productivity(&self, workload: Workload) -> f64 {
        let Some(cpu) = self.cpu else {
            return 0.0;
        };
        let w = PRODUCTIVITY_WEIGHTS;
        let gpu = self.gpu.map_or(NEUTRAL_GPU_PRODUCTIVITY, |g| g.productivity);
        let memory = self.memory.map_or(NEUTRAL_RATING, |m| m.productivity);
        let storage = self.storage.map_or(NEUTRAL_RATING, |s| s.productivity);

        let multiplier = match workload {
            Workload::VideoEditing if self.memory.is_some_and(|m| m.capacity > 80.0) => 1.1,
            Workload::VideoEditing => 0.9,
            Workload::Rendering if self.gpu.is_some() => 1.15,
            Workload::Rendering => 0.8,
            Workload::Programming if self.storage.is_some_and(|s| s.speed > 80.0) => 1.1,
            Workload::Programming => 0.95,
            Workload::Streaming if cpu.multi_core > 85.0 => 1.1,
            Workload::Streaming => 0.9,
        };

        let score = (cpu.productivity * w.processor
            + gpu * w.gpu
            + memory * w.memory
            + storage * w.storage)
            * multiplier;
        score.clamp(0.0, 100.0)
    }
}

/// Converts component ratings into gaming and productivity scores
pub struct PerformanceEstimator<'a> {
    catalog: &'a Catalog,
}

impl<'a> PerformanceEstimator<'a> {
    /// Create an estimator backed by a catalog's rating tables
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn rated(&self, selection: &Selection) -> Rated<'a> {
        let catalog: &'a Catalog = self.catalog;
        let ratings = &catalog.ratings;
        Rated {
            cpu: selection.processor().and_then(|c| ratings.cpu(&c.id)),
            gpu: selection.gpu().and_then(|g| ratings.gpu(&g.id)),
            memory: selection.memory().and_then(|m| ratings.memory(&m.id)),
            storage: selection.storage().and_then(|s| ratings.storage(&s.id)),
        }
    }

    /// Gaming, productivity and overall scores
    pub fn metrics(&self, selection: &Selection) -> PerformanceMetrics {
        let rated = self.rated(selection);

        let resolution_1080p = rated.gaming(Resolution::P1080);
        let resolution_1440p = rated.gaming(Resolution::P1440);
        let resolution_4k = rated.gaming(Resolution::K4);
        let gaming = GamingScores {
            resolution_1080p,
            resolution_1440p,
            resolution_4k,
            average_fps: (resolution_1080p + resolution_1440p + resolution_4k) / 3.0,
        };

        let video_editing = rated.productivity(Workload::VideoEditing);
        let rendering_3d = rated.productivity(Workload::Rendering);
        let programming = rated.productivity(Workload::Programming);
        let streaming = rated.productivity(Workload::Streaming);
        let productivity = ProductivityScores {
            video_editing,
            rendering_3d,
            programming,
            streaming,
            overall: (video_editing + rendering_3d + programming + streaming) / 4.0,
        };

        PerformanceMetrics {
            gaming,
            productivity,
            overall: gaming.average_fps * 0.5 + productivity.overall * 0.5,
        }
    }

    /// Weighted contribution of each rated part, flagging bottlenecks
    pub fn bottlenecks(&self, selection: &Selection) -> Vec<ComponentContribution> {
        let rated = self.rated(selection);
        let mut contributions = Vec::new();

        if let Some(cpu) = rated.cpu {
            contributions.push(contribution(
                Category::Processor,
                cpu.gaming * GAMING_WEIGHTS.processor,
                cpu.productivity * PRODUCTIVITY_WEIGHTS.processor,
                (cpu.gaming < 80.0).then_some("May limit gaming performance"),
            ));
        }

        if let Some(gpu) = rated.gpu {
            let average = gpu.average_gaming();
            contributions.push(contribution(
                Category::Gpu,
                average * GAMING_WEIGHTS.gpu,
                gpu.productivity * PRODUCTIVITY_WEIGHTS.gpu,
                (average < 70.0).then_some("Primary gaming bottleneck"),
            ));
        }

        if let Some(memory) = rated.memory {
            contributions.push(contribution(
                Category::Memory,
                memory.gaming * GAMING_WEIGHTS.memory,
                memory.productivity * PRODUCTIVITY_WEIGHTS.memory,
                (memory.capacity < 70.0).then_some("Insufficient for demanding tasks"),
            ));
        }

        if let Some(storage) = rated.storage {
            contributions.push(contribution(
                Category::Storage,
                storage.gaming * GAMING_WEIGHTS.storage,
                storage.productivity * PRODUCTIVITY_WEIGHTS.storage,
                (storage.speed < 50.0).then_some("Slow loading times"),
            ));
        }

        contributions
    }

    /// Scores before and after putting `candidate` in `category`
    pub fn compare(
        &self,
        selection: &Selection,
        category: Category,
        candidate: &Component,
    ) -> PerformanceComparison {
        let swapped = selection.with_swapped(category, candidate.clone());
        PerformanceComparison::between(self.metrics(selection), self.metrics(&swapped))
    }
}

fn contribution(
    component: Category,
    gaming: f64,
    productivity: f64,
    bottleneck: Option<&str>,
) -> ComponentContribution {
    ComponentContribution {
        component,
        gaming_contribution: gaming,
        productivity_contribution: productivity,
        bottleneck: bottleneck.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn pick(catalog: &Catalog, ids: &[&str]) -> Selection {
        ids.iter()
            .map(|id| catalog.find(id).cloned().unwrap())
            .collect()
    }

    /// Catalog with one synthetic CPU and GPU whose ratings are given
    fn synthetic(cpu: CpuRating, gpu: GpuRating) -> (Catalog, Selection) {
        let mut catalog = Catalog::new()
            .with_component(Component::new("c", Category::Processor, "X", "CPU", 1.0))
            .with_component(Component::new("g", Category::Gpu, "X", "GPU", 1.0));
        catalog.ratings.processor.insert("c".into(), cpu);
        catalog.ratings.gpu.insert("g".into(), gpu);
        let selection = pick(&catalog, &["c", "g"]);
        (catalog, selection)
    }

    fn cpu_rating(v: f64) -> CpuRating {
        CpuRating { single_core: v, multi_core: v, gaming: v, productivity: v }
    }

    fn gpu_rating(v: f64) -> GpuRating {
        GpuRating {
            performance_1080p: v,
            performance_1440p: v,
            performance_4k: v,
            ray_tracing: v,
            productivity: v,
        }
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let catalog = Catalog::reference();
        let metrics = PerformanceEstimator::new(&catalog).metrics(&Selection::new());
        assert_eq!(metrics.gaming.average_fps, 0.0);
        assert_eq!(metrics.productivity.overall, 0.0);
        assert_eq!(metrics.overall, 0.0);
    }

    #[test]
    fn test_gaming_needs_cpu_and_gpu() {
        let catalog = Catalog::reference();
        let estimator = PerformanceEstimator::new(&catalog);

        let gpu_only = estimator.metrics(&pick(&catalog, &["gpu-1"]));
        assert_eq!(gpu_only.gaming.average_fps, 0.0);
        assert_eq!(gpu_only.productivity.overall, 0.0);

        let cpu_only = estimator.metrics(&pick(&catalog, &["cpu-1"]));
        assert_eq!(cpu_only.gaming.average_fps, 0.0);
        assert!(cpu_only.productivity.overall > 0.0);
    }

    #[test]
    fn test_reference_scores() {
        let catalog = Catalog::reference();
        let metrics = PerformanceEstimator::new(&catalog)
            .metrics(&pick(&catalog, &["cpu-1", "gpu-1", "ram-1", "ssd-1"]));

        // 0.7*100 + 0.2*92 + 0.08*85 + 0.02*90
        assert!((metrics.gaming.resolution_1080p - 97.0).abs() < EPS);
        // 0.7*95 + 0.2*92 + 0.08*85 + 0.02*90
        assert!((metrics.gaming.resolution_4k - 93.5).abs() < EPS);

        // base = 0.5*96 + 0.25*95 + 0.2*88 + 0.05*92 = 93.95, every multiplier 1.1+
        assert_eq!(metrics.productivity.video_editing, 100.0);
        assert_eq!(metrics.productivity.rendering_3d, 100.0);
    }

    #[test]
    fn test_unrated_parts_use_neutral_defaults() {
        let catalog = Catalog::reference();
        let metrics = PerformanceEstimator::new(&catalog).metrics(&pick(&catalog, &["cpu-4"]));

        // 0.5*75 + 0.25*50 + 0.2*70 + 0.05*70 = 67.5
        assert!((metrics.productivity.video_editing - 67.5 * 0.9).abs() < EPS);
        assert!((metrics.productivity.rendering_3d - 67.5 * 0.8).abs() < EPS);
        assert!((metrics.productivity.programming - 67.5 * 0.95).abs() < EPS);
        assert!((metrics.productivity.streaming - 67.5 * 0.9).abs() < EPS);
    }

    #[test]
    fn test_bottlenecks() {
        let catalog = Catalog::reference();
        let contributions = PerformanceEstimator::new(&catalog)
            .bottlenecks(&pick(&catalog, &["cpu-4", "gpu-4", "ram-2", "hdd-1", "psu-1"]));

        let categories: Vec<Category> = contributions.iter().map(|c| c.component).collect();
        assert_eq!(
            categories,
            vec![Category::Processor, Category::Gpu, Category::Memory, Category::Storage]
        );
        assert_eq!(contributions[0].bottleneck, None);
        assert_eq!(contributions[1].bottleneck.as_deref(), Some("Primary gaming bottleneck"));
        assert_eq!(
            contributions[2].bottleneck.as_deref(),
            Some("Insufficient for demanding tasks")
        );
        assert_eq!(contributions[3].bottleneck.as_deref(), Some("Slow loading times"));
        assert!((contributions[0].gaming_contribution - 82.0 * 0.2).abs() < EPS);
    }

    #[test]
    fn test_compare_swap() {
        let catalog = Catalog::reference();
        let estimator = PerformanceEstimator::new(&catalog);
        let selection = pick(&catalog, &["cpu-3", "gpu-4"]);
        let upgrade = catalog.find("gpu-1").unwrap();

        let cmp = estimator.compare(&selection, Category::Gpu, upgrade);
        assert!(cmp.improvement.gaming > 0.0);
        assert!(cmp.improvement.overall > 0.0);
        assert_eq!(cmp.current_performance, estimator.metrics(&selection));
        // original selection untouched
        assert_eq!(selection.gpu().unwrap().id, "gpu-4");
    }

    proptest! {
        #[test]
        fn prop_scores_are_clamped(c in -1000.0f64..1000.0, g in -1000.0f64..1000.0) {
            let (catalog, selection) = synthetic(cpu_rating(c), gpu_rating(g));
            let m = PerformanceEstimator::new(&catalog).metrics(&selection);
            for score in [
                m.gaming.resolution_1080p, m.gaming.resolution_1440p, m.gaming.resolution_4k,
                m.gaming.average_fps, m.productivity.video_editing, m.productivity.rendering_3d,
                m.productivity.programming, m.productivity.streaming, m.productivity.overall,
                m.overall,
            ] {
                prop_assert!((0.0..=100.0).contains(&score));
            }
        }

        #[test]
        fn prop_gpu_1080p_is_monotonic(base in 0.0f64..100.0, bump in 0.5f64..20.0) {
            // keep both scores under the clamp ceiling
            let cpu = cpu_rating(10.0);
            let (lo_catalog, lo_sel) = synthetic(cpu, gpu_rating(base * 0.5));
            let (hi_catalog, hi_sel) = synthetic(cpu, gpu_rating(base * 0.5 + bump));
            let lo = PerformanceEstimator::new(&lo_catalog).metrics(&lo_sel);
            let hi = PerformanceEstimator::new(&hi_catalog).metrics(&hi_sel);
            prop_assert!(hi.gaming.resolution_1080p > lo.gaming.resolution_1080p);
        }

        #[test]
        fn prop_metrics_are_deterministic(c in 0.0f64..100.0, g in 0.0f64..100.0) {
            let (catalog, selection) = synthetic(cpu_rating(c), gpu_rating(g));
            let estimator = PerformanceEstimator::new(&catalog);
            prop_assert_eq!(estimator.metrics(&selection), estimator.metrics(&selection));
            prop_assert_eq!(estimator.bottlenecks(&selection), estimator.bottlenecks(&selection));
        }
    }
}
