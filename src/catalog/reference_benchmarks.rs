//! Built-in game and application benchmark tables

use super::{
    AppCategory, ApplicationBenchmark, BenchmarkMetric, FpsGrid, GameBenchmark, GameCategory,
    QualityFps, TaskBenchmark,
};
use std::collections::BTreeMap;

fn grid(p1080: [u32; 4], p1440: [u32; 4], k4: [u32; 4]) -> FpsGrid {
    FpsGrid {
        resolution_1080p: QualityFps::new(p1080),
        resolution_1440p: QualityFps::new(p1440),
        resolution_4k: QualityFps::new(k4),
    }
}

fn game(
    id: &str,
    name: &str,
    category: GameCategory,
    icon: &str,
    benchmarks: [(&str, FpsGrid); 4],
) -> GameBenchmark {
    GameBenchmark {
        id: id.to_string(),
        name: name.to_string(),
        category,
        icon: icon.to_string(),
        benchmarks: benchmarks
            .into_iter()
            .map(|(hw, g)| (hw.to_string(), g))
            .collect(),
    }
}

/// Builds an application table where every hardware id runs the same tasks
fn application(
    id: &str,
    name: &str,
    category: AppCategory,
    icon: &str,
    metric: BenchmarkMetric,
    unit: &str,
    tasks: &[(&str, &str)],
    values: &[(&str, [f64; 3])],
) -> ApplicationBenchmark {
    let benchmarks: BTreeMap<String, Vec<TaskBenchmark>> = values
        .iter()
        .map(|(hw, row)| {
            let list = tasks
                .iter()
                .zip(row.iter())
                .map(|((task, description), value)| TaskBenchmark::new(*task, *value, *description))
                .collect();
            (hw.to_string(), list)
        })
        .collect();

    ApplicationBenchmark {
        id: id.to_string(),
        name: name.to_string(),
        category,
        icon: icon.to_string(),
        metric,
        unit: unit.to_string(),
        benchmarks,
    }
}

#[rustfmt::skip]
pub(crate) fn games() -> Vec<GameBenchmark> {
    use GameCategory::*;

    vec![
        game("cyberpunk-2077", "Cyberpunk 2077", Aaa, "🏙️", [
            ("gpu-1", grid([165, 145, 125, 95], [135, 115, 95, 75], [85, 70, 58, 42])),
            ("gpu-2", grid([145, 125, 105, 80], [110, 90, 75, 58], [55, 45, 38, 28])),
            ("gpu-3", grid([140, 120, 100, 75], [105, 85, 70, 52], [50, 40, 32, 24])),
            ("gpu-4", grid([95, 75, 60, 45], [65, 50, 40, 28], [28, 22, 18, 12])),
        ]),
        game("counter-strike-2", "Counter-Strike 2", Esports, "🔫", [
            ("gpu-1", grid([520, 480, 420, 380], [380, 340, 300, 260], [220, 190, 165, 140])),
            ("gpu-2", grid([420, 380, 340, 300], [300, 260, 230, 200], [165, 140, 120, 100])),
            ("gpu-3", grid([400, 360, 320, 280], [280, 240, 210, 180], [150, 125, 105, 85])),
            ("gpu-4", grid([280, 240, 200, 160], [180, 150, 120, 95], [85, 70, 55, 42])),
        ]),
        game("valorant", "VALORANT", Esports, "⚡", [
            ("gpu-1", grid([680, 620, 580, 540], [480, 440, 400, 360], [280, 250, 220, 190])),
            ("gpu-2", grid([580, 520, 480, 440], [400, 360, 320, 280], [220, 190, 165, 140])),
            ("gpu-3", grid([560, 500, 460, 420], [380, 340, 300, 260], [200, 175, 150, 125])),
            ("gpu-4", grid([400, 350, 300, 250], [250, 220, 190, 160], [125, 105, 85, 70])),
        ]),
        game("red-dead-redemption-2", "Red Dead Redemption 2", Aaa, "🤠", [
            ("gpu-1", grid([180, 155, 130, 105], [140, 115, 95, 75], [80, 65, 52, 40])),
            ("gpu-2", grid([155, 130, 110, 85], [115, 95, 80, 62], [58, 48, 38, 28])),
            ("gpu-3", grid([150, 125, 105, 80], [110, 90, 75, 58], [52, 42, 32, 24])),
            ("gpu-4", grid([105, 85, 68, 50], [70, 55, 42, 30], [32, 25, 19, 14])),
        ]),
        game("apex-legends", "Apex Legends", Fps, "🎯", [
            ("gpu-1", grid([300, 280, 250, 220], [220, 200, 180, 160], [140, 125, 110, 95])),
            ("gpu-2", grid([250, 230, 210, 180], [180, 160, 140, 120], [105, 90, 75, 62])),
            ("gpu-3", grid([240, 220, 200, 170], [170, 150, 130, 110], [95, 80, 68, 55])),
            ("gpu-4", grid([180, 160, 140, 115], [115, 100, 85, 70], [58, 48, 40, 32])),
        ]),
        game("fortnite", "Fortnite", Fps, "🏗️", [
            ("gpu-1", grid([480, 420, 360, 300], [320, 280, 240, 200], [180, 155, 130, 105])),
            ("gpu-2", grid([380, 340, 300, 250], [250, 220, 190, 160], [130, 110, 90, 72])),
            ("gpu-3", grid([360, 320, 280, 230], [230, 200, 170, 140], [115, 95, 78, 62])),
            ("gpu-4", grid([240, 210, 180, 150], [150, 130, 110, 90], [72, 60, 48, 38])),
        ]),
        game("minecraft-rtx", "Minecraft RTX", Indie, "🧱", [
            ("gpu-1", grid([180, 165, 145, 125], [125, 110, 95, 80], [70, 60, 50, 40])),
            ("gpu-2", grid([125, 110, 95, 80], [80, 70, 58, 48], [42, 35, 28, 22])),
            ("gpu-3", grid([105, 90, 75, 62], [65, 55, 45, 35], [32, 26, 20, 16])),
            ("gpu-4", grid([68, 55, 42, 32], [38, 30, 24, 18], [18, 14, 11, 8])),
        ]),
    ]
}

/// Applications whose results are keyed by GPU id
#[rustfmt::skip]
pub(crate) fn gpu_applications() -> Vec<ApplicationBenchmark> {
    vec![
        application(
            "premiere-pro",
            "Adobe Premiere Pro",
            AppCategory::Video,
            "🎥",
            BenchmarkMetric::Time,
            "minutes",
            &[
                ("4K Export (10min)", "10-minute 4K video export time"),
                ("8K Timeline Playback", "Smooth 8K timeline playback (fps)"),
                ("Color Grading", "Real-time color grading performance score"),
            ],
            &[
                ("gpu-1", [8.5, 60.0, 90.0]),
                ("gpu-2", [12.2, 45.0, 80.0]),
                ("gpu-3", [14.5, 35.0, 75.0]),
                ("gpu-4", [18.8, 25.0, 65.0]),
            ],
        ),
        application(
            "obs-studio",
            "OBS Studio",
            AppCategory::Streaming,
            "📺",
            BenchmarkMetric::Score,
            "quality",
            &[
                ("4K60 Stream + Gaming", "4K 60fps streaming while gaming"),
                ("1080p60 Multi-source", "1080p 60fps with multiple sources"),
                ("Hardware Encoding", "NVENC/AMF encoding quality score"),
            ],
            &[
                ("gpu-1", [95.0, 100.0, 98.0]),
                ("gpu-2", [85.0, 95.0, 92.0]),
                ("gpu-3", [80.0, 90.0, 88.0]),
                ("gpu-4", [65.0, 85.0, 80.0]),
            ],
        ),
        application(
            "photoshop",
            "Adobe Photoshop",
            AppCategory::Design,
            "🎨",
            BenchmarkMetric::Score,
            "score",
            &[
                ("Filter Performance", "Complex filter application speed"),
                ("8K Image Processing", "8K image manipulation performance"),
                ("AI Features", "AI-powered features performance"),
            ],
            &[
                ("gpu-1", [95.0, 92.0, 98.0]),
                ("gpu-2", [88.0, 85.0, 90.0]),
                ("gpu-3", [82.0, 78.0, 85.0]),
                ("gpu-4", [72.0, 68.0, 75.0]),
            ],
        ),
    ]
}

/// Applications whose results are keyed by CPU id
#[rustfmt::skip]
pub(crate) fn cpu_applications() -> Vec<ApplicationBenchmark> {
    vec![
        application(
            "blender",
            "Blender 3D",
            AppCategory::Rendering,
            "🎬",
            BenchmarkMetric::Time,
            "minutes",
            &[
                ("BMW Render", "1080p BMW scene render time"),
                ("Classroom Scene", "4K classroom scene render time"),
                ("Animation (30s)", "30-second animation render time"),
            ],
            &[
                ("cpu-1", [2.1, 8.5, 45.0]),
                ("cpu-2", [2.3, 9.2, 48.0]),
                ("cpu-3", [3.2, 12.5, 68.0]),
                ("cpu-4", [3.8, 15.2, 82.0]),
            ],
        ),
        application(
            "visual-studio",
            "Visual Studio",
            AppCategory::Development,
            "💻",
            BenchmarkMetric::Time,
            "seconds",
            &[
                ("Large Project Build", "Full rebuild of large C++ project"),
                ("IntelliSense Index", "IntelliSense indexing time"),
                ("Unity Game Build", "Unity game project build time"),
            ],
            &[
                ("cpu-1", [45.0, 12.0, 180.0]),
                ("cpu-2", [52.0, 14.0, 205.0]),
                ("cpu-3", [68.0, 18.0, 280.0]),
                ("cpu-4", [82.0, 22.0, 340.0]),
            ],
        ),
        application(
            "handbrake",
            "HandBrake",
            AppCategory::Video,
            "🎞️",
            BenchmarkMetric::Time,
            "minutes",
            &[
                ("4K to 1080p (1hr video)", "1-hour 4K to 1080p conversion"),
                ("HEVC Encoding", "H.265 encoding performance"),
                ("Batch Processing (5 files)", "Batch conversion of 5 videos"),
            ],
            &[
                ("cpu-1", [18.0, 28.0, 95.0]),
                ("cpu-2", [22.0, 32.0, 108.0]),
                ("cpu-3", [32.0, 48.0, 165.0]),
                ("cpu-4", [42.0, 65.0, 218.0]),
            ],
        ),
    ]
}
