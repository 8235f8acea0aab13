//! Compatibility rules
//!
//! Nine pairwise rules run in a fixed order, each producing at most one
//! issue. A rule only fires when every spec it compares is present; missing
//! numeric specs fall back to the defaults in [`crate::specs`].

use super::{CompatibilityIssue, RuleTag};
use crate::catalog::{Catalog, Category, Selection};
use crate::specs::{
    clearance_limit, gpu_length, leading_number, memory_speed_ceiling, spec_number,
    MemoryStandard, BASE_SYSTEM_POWER, DEFAULT_COOLER_HEIGHT, DEFAULT_CPU_CLEARANCE,
    DEFAULT_CPU_TDP, DEFAULT_GPU_CLEARANCE, DEFAULT_GPU_TDP,
};

/// Estimated system draw: base + CPU TDP + GPU TDP, in watts
///
/// Unselected parts contribute nothing; selected parts without a TDP use the
/// category default. Summed in `u64` so absurd TDP strings cannot overflow.
pub fn estimate_power_draw(selection: &Selection) -> u64 {
    let cpu = selection
        .processor()
        .map_or(0, |c| spec_number(c, "TDP", DEFAULT_CPU_TDP));
    let gpu = selection
        .gpu()
        .map_or(0, |g| spec_number(g, "TDP", DEFAULT_GPU_TDP));
    u64::from(BASE_SYSTEM_POWER) + u64::from(cpu) + u64::from(gpu)
}

/// `ceil(watts * percent / 100)` without floating point, saturating
pub fn with_headroom(watts: u64, percent: u64) -> u64 {
    watts.saturating_mul(percent).div_ceil(100)
}

/// Evaluates compatibility rules over a selection
pub struct CompatibilityChecker<'a> {
    catalog: &'a Catalog,
}

impl<'a> CompatibilityChecker<'a> {
    /// Create a checker backed by a catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Run every rule, returning issues in rule order
    pub fn check(&self, selection: &Selection) -> Vec<CompatibilityIssue> {
        let mut issues = Vec::new();

        issues.extend(self.check_socket(selection));
        issues.extend(self.check_memory_type(selection));
        issues.extend(self.check_memory_generation(selection));
        issues.extend(self.check_power(selection));
        issues.extend(self.check_gpu_clearance(selection));
        issues.extend(self.check_cooler_clearance(selection));
        issues.extend(self.check_cooler_socket(selection));
        issues.extend(self.check_memory_speed(selection));
        issues.extend(self.check_form_factor(selection));

        tracing::debug!(
            "Compatibility check over {} part(s): {} issue(s)",
            selection.len(),
            issues.len()
        );
        issues
    }

    fn check_socket(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let cpu_socket = selection.processor()?.spec("Socket")?;
        let board_socket = selection.motherboard()?.spec("Socket")?;

        (cpu_socket != board_socket).then(|| {
            CompatibilityIssue::error(
                RuleTag::Socket,
                format!(
                    "CPU socket ({}) is not compatible with motherboard socket ({})",
                    cpu_socket, board_socket
                ),
                &[Category::Processor, Category::Motherboard],
            )
        })
    }

    fn check_memory_type(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let memory_type = selection.memory()?.spec("Type")?;
        let board_memory = selection.motherboard()?.spec("Memory")?;
        let standard = MemoryStandard::classify(memory_type);

        (!board_memory.contains(standard.as_str())).then(|| {
            CompatibilityIssue::error(
                RuleTag::Memory,
                format!(
                    "{} memory is not compatible with motherboard that supports {}",
                    memory_type, board_memory
                ),
                &[Category::Memory, Category::Motherboard],
            )
        })
    }

    fn check_memory_generation(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let cpu = selection.processor()?;
        let memory_type = selection.memory()?.spec("Type")?;

        let ddr5 = MemoryStandard::classify(memory_type) == MemoryStandard::Ddr5;
        (ddr5 && !self.catalog.supports_ddr5(&cpu.id)).then(|| {
            CompatibilityIssue::warning(
                RuleTag::Memory,
                "This CPU may not support DDR5 memory. Check CPU specifications.",
                &[Category::Processor, Category::Memory],
            )
        })
    }

    fn check_power(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let psu = selection.power_supply()?;
        if selection.processor().is_none() && selection.gpu().is_none() {
            return None;
        }

        let wattage = u64::from(spec_number(psu, "Wattage", 0));
        let estimated = estimate_power_draw(selection);
        let recommended = with_headroom(estimated, 120);

        if wattage < recommended {
            Some(CompatibilityIssue::error(
                RuleTag::Power,
                format!(
                    "Power supply ({}W) may be insufficient. Recommended: {}W+",
                    wattage, recommended
                ),
                &[Category::PowerSupply, Category::Processor, Category::Gpu],
            ))
        } else if wattage.saturating_mul(10) < estimated.saturating_mul(11) {
            Some(CompatibilityIssue::warning(
                RuleTag::Power,
                "Power supply wattage is close to estimated consumption. Consider higher wattage for better efficiency.",
                &[Category::PowerSupply],
            ))
        } else {
            None
        }
    }

    fn check_gpu_clearance(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let gpu = selection.gpu()?;
        let clearances = selection.case()?.spec("Clearances")?;

        let length = gpu_length(&gpu.name);
        let limit = clearance_limit(clearances, "GPU", DEFAULT_GPU_CLEARANCE);

        (length > limit).then(|| {
            CompatibilityIssue::error(
                RuleTag::Clearance,
                format!(
                    "GPU may not fit in case. Estimated GPU length: {}mm, Case clearance: {}mm",
                    length, limit
                ),
                &[Category::Gpu, Category::Case],
            )
        })
    }

    fn check_cooler_clearance(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let cooler = selection.cooler()?;
        let clearances = selection.case()?.spec("Clearances")?;

        let height = spec_number(cooler, "Height", DEFAULT_COOLER_HEIGHT);
        let limit = clearance_limit(clearances, "CPU", DEFAULT_CPU_CLEARANCE);

        (height > limit).then(|| {
            CompatibilityIssue::error(
                RuleTag::Clearance,
                format!(
                    "CPU cooler ({}mm) may not fit in case. Maximum height: {}mm",
                    height, limit
                ),
                &[Category::CpuCooler, Category::Case],
            )
        })
    }

    fn check_cooler_socket(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let support = selection.cooler()?.spec("Socket Support")?;
        let cpu_socket = selection.processor()?.spec("Socket")?;

        (!support.contains(cpu_socket)).then(|| {
            CompatibilityIssue::error(
                RuleTag::Cooler,
                format!("CPU cooler does not support {} socket", cpu_socket),
                &[Category::CpuCooler, Category::Processor],
            )
        })
    }

    fn check_memory_speed(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let speed = selection
            .memory()?
            .spec("Speed")
            .and_then(leading_number)
            .filter(|s| *s > 0)?;
        let board_memory = selection.motherboard()?.spec("Memory")?;
        let ceiling = memory_speed_ceiling(board_memory);

        (speed > ceiling).then(|| {
            CompatibilityIssue::warning(
                RuleTag::Memory,
                format!(
                    "Memory speed ({}MHz) exceeds motherboard specification ({}MHz+). May run at lower speed.",
                    speed, ceiling
                ),
                &[Category::Memory, Category::Motherboard],
            )
        })
    }

    fn check_form_factor(&self, selection: &Selection) -> Option<CompatibilityIssue> {
        let board = selection.motherboard()?.spec("Form Factor")?;
        let case = selection.case()?.spec("Form Factor")?;

        // only the one asymmetric misfit is flagged
        (board == "ATX" && case == "Micro-ATX").then(|| {
            CompatibilityIssue::error(
                RuleTag::FormFactor,
                "ATX motherboard will not fit in Micro-ATX case",
                &[Category::Motherboard, Category::Case],
            )
        })
    }
}

/// Check a selection against a catalog in one call
pub fn check_compatibility(catalog: &Catalog, selection: &Selection) -> Vec<CompatibilityIssue> {
    CompatibilityChecker::new(catalog).check(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Component;
    use crate::compat::Severity;
    use proptest::prelude::*;

    fn pick(catalog: &Catalog, ids: &[&str]) -> Selection {
        ids.iter()
            .map(|id| catalog.find(id).cloned().unwrap())
            .collect()
    }

    fn psu(watts: u32) -> Component {
        Component::new("psu-x", Category::PowerSupply, "ACME", "Test PSU", 50.0)
            .with_spec("Wattage", format!("{}W", watts))
    }

    #[test]
    fn test_matching_socket_has_no_issue() {
        let catalog = Catalog::reference();
        let issues = check_compatibility(&catalog, &pick(&catalog, &["cpu-2", "mb-2"]));
        assert!(issues.iter().all(|i| i.rule != RuleTag::Socket));
    }

    #[test]
    fn test_socket_mismatch() {
        let catalog = Catalog::reference();
        let issues = check_compatibility(&catalog, &pick(&catalog, &["cpu-1", "mb-2"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].rule, RuleTag::Socket);
        assert_eq!(
            issues[0].message,
            "CPU socket (LGA1700) is not compatible with motherboard socket (AM5)"
        );
    }

    #[test]
    fn test_underpowered_psu() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "gpu-1", "psu-3"]);
        assert_eq!(estimate_power_draw(&selection), 675);
        assert_eq!(with_headroom(675, 120), 810);

        let issues = check_compatibility(&catalog, &selection);
        let power: Vec<_> = issues.iter().filter(|i| i.rule == RuleTag::Power).collect();
        assert_eq!(power.len(), 1);
        assert!(power[0].is_error());
        assert_eq!(
            power[0].message,
            "Power supply (650W) may be insufficient. Recommended: 810W+"
        );
    }

    #[test]
    fn test_power_boundary() {
        let catalog = Catalog::reference();
        let base = pick(&catalog, &["cpu-1", "gpu-1"]);

        let exact = base.clone().with(psu(810));
        let issues = check_compatibility(&catalog, &exact);
        assert!(!issues.iter().any(|i| i.rule == RuleTag::Power && i.is_error()));

        let short = base.with(psu(809));
        let issues = check_compatibility(&catalog, &short);
        assert!(issues.iter().any(|i| i.rule == RuleTag::Power && i.is_error()));
    }

    #[test]
    fn test_power_uses_default_tdp() {
        let catalog = Catalog::new();
        // 100 + 65 default CPU TDP = 165W, 1.2x = 198
        let cpu = Component::new("c", Category::Processor, "X", "Y", 1.0);
        let selection = Selection::new().with(cpu);
        assert_eq!(estimate_power_draw(&selection), 165);

        let issues = check_compatibility(&catalog, &selection.clone().with(psu(198)));
        assert!(issues.is_empty());

        // 181W sits under 1.1x too, but the error outranks the warning
        let issues = check_compatibility(&catalog, &selection.with(psu(181)));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_psu_without_wattage_counts_as_zero() {
        let catalog = Catalog::reference();
        let unlabeled = Component::new("psu-x", Category::PowerSupply, "ACME", "Mystery", 5.0);
        let selection = pick(&catalog, &["gpu-4"]).with(unlabeled);
        let issues = check_compatibility(&catalog, &selection);
        assert_eq!(
            issues[0].message,
            "Power supply (0W) may be insufficient. Recommended: 258W+"
        );
    }

    #[test]
    fn test_absurd_tdp_does_not_overflow() {
        let catalog = Catalog::new();
        let cpu = Component::new("c", Category::Processor, "X", "Y", 1.0)
            .with_spec("TDP", "4000000000W");
        let selection = Selection::new().with(cpu).with(psu(850));
        assert_eq!(estimate_power_draw(&selection), 4_000_000_100);

        let issues = check_compatibility(&catalog, &selection);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].message,
            "Power supply (850W) may be insufficient. Recommended: 4800000120W+"
        );

        let moderate = Component::new("c", Category::Processor, "X", "Y", 1.0)
            .with_spec("TDP", "40000000W");
        let selection = Selection::new().with(moderate).with(psu(850));
        let issues = check_compatibility(&catalog, &selection);
        assert!(issues[0].message.ends_with("Recommended: 48000120W+"));

        assert_eq!(with_headroom(u64::MAX, 130), u64::MAX.div_ceil(100));
    }

    #[test]
    fn test_power_needs_cpu_or_gpu() {
        let catalog = Catalog::reference();
        assert!(check_compatibility(&catalog, &pick(&catalog, &["psu-3"])).is_empty());
    }

    #[test]
    fn test_memory_rules() {
        let catalog = Catalog::reference();

        // DDR4 kit on a DDR5 board
        let issues = check_compatibility(&catalog, &pick(&catalog, &["ram-2", "mb-1"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "DDR4 memory is not compatible with motherboard that supports DDR5-7600+ (OC)"
        );

        // DDR5 kit on a CPU outside the allow-list
        let issues = check_compatibility(&catalog, &pick(&catalog, &["cpu-4", "ram-1"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].affected_components, vec![Category::Processor, Category::Memory]);

        // 6000 MHz kit on a board rated 5200+
        let issues = check_compatibility(&catalog, &pick(&catalog, &["ram-1", "mb-3"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Memory speed (6000MHz) exceeds motherboard specification (5200MHz+). May run at lower speed."
        );
    }

    #[test]
    fn test_ddr5_allow_list_is_injected() {
        let mut catalog = Catalog::reference();
        catalog.ddr5_processors.insert("cpu-4".to_string());
        let issues = check_compatibility(&catalog, &pick(&catalog, &["cpu-4", "ram-1"]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_clearance_rules() {
        let catalog = Catalog::reference();

        // NH-D15 (165mm) in the MB311L (159mm)
        let issues = check_compatibility(&catalog, &pick(&catalog, &["cooler-1", "case-3"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "CPU cooler (165mm) may not fit in case. Maximum height: 159mm"
        );

        let tiny = Component::new("case-x", Category::Case, "ACME", "Shoebox", 10.0)
            .with_spec("Clearances", "GPU: 280mm, CPU: 120mm");
        let selection = pick(&catalog, &["gpu-1"]).with(tiny);
        let issues = check_compatibility(&catalog, &selection);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "GPU may not fit in case. Estimated GPU length: 340mm, Case clearance: 280mm"
        );
    }

    #[test]
    fn test_clearance_needs_clearance_string() {
        let catalog = Catalog::reference();
        let bare = Component::new("case-x", Category::Case, "ACME", "Open Frame", 10.0);
        let selection = pick(&catalog, &["gpu-1", "cooler-1"]).with(bare);
        assert!(check_compatibility(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_cooler_socket_support() {
        let catalog = Catalog::reference();
        let cooler = Component::new("cooler-x", Category::CpuCooler, "ACME", "AM4 Only", 20.0)
            .with_spec("Socket Support", "AM4");
        let selection = pick(&catalog, &["cpu-2"]).with(cooler);
        let issues = check_compatibility(&catalog, &selection);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleTag::Cooler);
        assert_eq!(issues[0].message, "CPU cooler does not support AM5 socket");
    }

    #[test]
    fn test_form_factor_is_asymmetric() {
        let catalog = Catalog::reference();
        let issues = check_compatibility(&catalog, &pick(&catalog, &["mb-1", "case-3"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleTag::FormFactor);

        let matx = Component::new("mb-x", Category::Motherboard, "ACME", "B650M", 100.0)
            .with_spec("Form Factor", "Micro-ATX");
        let selection = pick(&catalog, &["case-1"]).with(matx);
        assert!(check_compatibility(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_rule_order() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "mb-2", "gpu-1", "psu-3", "cooler-1", "case-3"]);
        let rules: Vec<RuleTag> = check_compatibility(&catalog, &selection)
            .iter()
            .map(|i| i.rule)
            .collect();
        assert_eq!(
            rules,
            vec![RuleTag::Socket, RuleTag::Power, RuleTag::Clearance, RuleTag::FormFactor]
        );
    }

    #[test]
    fn test_empty_selection() {
        let catalog = Catalog::reference();
        assert!(check_compatibility(&catalog, &Selection::new()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_check_is_deterministic(ids in proptest::sample::subsequence(
            vec!["cpu-1", "cpu-4", "mb-2", "mb-1", "gpu-1", "gpu-4", "ram-1", "ram-2",
                 "psu-3", "psu-1", "cooler-1", "case-3", "case-1"], 0..8)) {
            let catalog = Catalog::reference();
            let selection = pick(&catalog, &ids);
            let first = check_compatibility(&catalog, &selection);
            let second = check_compatibility(&catalog, &selection);
            prop_assert_eq!(first, second);
        }
    }
}
