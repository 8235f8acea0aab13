//! Specification string parsing
//!
//! Catalog specifications are free text such as `"125W"`, `"5600 MHz"` or
//! `"GPU: 360mm, CPU: 165mm"`. Every parser here is total: a missing or
//! malformed value yields `None` or the documented default.

use crate::catalog::Component;
use std::fmt;

/// Base system draw added to CPU and GPU TDP, in watts
pub const BASE_SYSTEM_POWER: u32 = 100;
/// CPU TDP assumed when unspecified
pub const DEFAULT_CPU_TDP: u32 = 65;
/// GPU TDP assumed when unspecified
pub const DEFAULT_GPU_TDP: u32 = 150;
/// Cooler height assumed when unspecified, in mm
pub const DEFAULT_COOLER_HEIGHT: u32 = 150;
/// Cooler clearance assumed when the case lists no CPU entry, in mm
pub const DEFAULT_CPU_CLEARANCE: u32 = 160;
/// GPU clearance assumed when the case lists no GPU entry, in mm
pub const DEFAULT_GPU_CLEARANCE: u32 = 300;
/// GPU length assumed for models missing from the length table, in mm
pub const DEFAULT_GPU_LENGTH: u32 = 250;
/// Memory ceiling assumed when the board lists no `<N>+` speed, in MHz
pub const DEFAULT_MEMORY_CEILING: u32 = 3200;

/// DRAM generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryStandard {
    /// DDR4
    Ddr4,
    /// DDR5
    Ddr5,
}

impl MemoryStandard {
    /// DDR5 if the text mentions it, DDR4 otherwise
    pub fn classify(text: &str) -> Self {
        if text.contains("DDR5") {
            Self::Ddr5
        } else {
            Self::Ddr4
        }
    }

    /// Token as it appears in spec strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ddr4 => "DDR4",
            Self::Ddr5 => "DDR5",
        }
    }
}

impl fmt::Display for MemoryStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the leading unsigned integer of a string, ignoring leading spaces
///
/// `"125W"` gives 125, `"5600 MHz"` gives 5600, `"W125"` gives `None`.
pub fn leading_number(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Numeric value of a component spec, or `default` if absent or unparsable
pub fn spec_number(component: &Component, key: &str, default: u32) -> u32 {
    component
        .spec(key)
        .and_then(leading_number)
        .unwrap_or(default)
}

/// Limit for `label` in a clearance string like `"GPU: 360mm, CPU: 165mm"`
pub fn clearance_limit(clearances: &str, label: &str, default: u32) -> u32 {
    let token = format!("{}: ", label);
    clearances
        .split_once(token.as_str())
        .and_then(|(_, rest)| leading_number(rest))
        .unwrap_or(default)
}

/// Highest memory speed in a board's memory string, from its `<N>+` token
///
/// `"DDR5-7800+ (OC)"` gives 7800. Boards without such a token get
/// [`DEFAULT_MEMORY_CEILING`].
pub fn memory_speed_ceiling(board_memory: &str) -> u32 {
    let bytes = board_memory.as_bytes();
    let mut start = None;
    for (i, b) in bytes.iter().enumerate() {
        match (b.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (true, Some(_)) => {}
            (false, Some(s)) => {
                if *b == b'+' {
                    if let Ok(n) = board_memory[s..i].parse() {
                        return n;
                    }
                }
                start = None;
            }
            (false, None) => {}
        }
    }
    DEFAULT_MEMORY_CEILING
}

/// Estimated card length from its model name, in mm
pub fn gpu_length(name: &str) -> u32 {
    if name.contains("4090") {
        340
    } else if name.contains("4070 Ti") {
        300
    } else if name.contains("7800 XT") {
        320
    } else {
        DEFAULT_GPU_LENGTH
    }
}

/// Relative size tier of a GPU from its model name, higher is bigger
pub fn gpu_tier(name: &str) -> u8 {
    if name.contains("4090") {
        4
    } else if name.contains("4070 Ti") || name.contains("7800 XT") {
        3
    } else if name.contains("4060") {
        2
    } else {
        1
    }
}

/// Relative size of a case from its model name, higher is roomier
pub fn case_size(name: &str) -> u8 {
    if name.contains("Compact") || name.contains("Micro") {
        1
    } else {
        2
    }
}
