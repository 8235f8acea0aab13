//! Recommendation engine
//!
//! Maps each error-level issue to catalog alternatives that would resolve it.
//! Warnings and info issues never produce recommendations.

use super::{ComponentRecommendation, PriceImpact, Priority};
use crate::catalog::{Catalog, Category, Component, Selection};
use crate::compat::{estimate_power_draw, with_headroom, CompatibilityIssue, RuleTag};
use crate::specs::{case_size, gpu_tier, spec_number, MemoryStandard, DEFAULT_COOLER_HEIGHT};
use std::collections::HashSet;

/// Maximum smaller GPUs or larger cases offered per GPU clearance issue
const CLEARANCE_ALTERNATIVES: usize = 2;

/// Generates ranked alternatives for compatibility errors
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine that draws alternatives from a catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Recommendations for every error issue, deduplicated and ranked
    pub fn recommend(
        &self,
        issues: &[CompatibilityIssue],
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let mut recommendations = Vec::new();

        for issue in issues.iter().filter(|i| i.is_error()) {
            recommendations.extend(self.resolve(issue, selection));
        }

        let candidates = recommendations.len();
        let mut recommendations = dedup(recommendations);
        rank(&mut recommendations);

        tracing::debug!(
            "Recommendations: {} candidate(s), {} after dedup",
            candidates,
            recommendations.len()
        );
        recommendations
    }

    fn resolve(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        match issue.rule {
            RuleTag::Socket => self.resolve_socket(issue, selection),
            RuleTag::Memory => self.resolve_memory(issue, selection),
            RuleTag::Power => self.resolve_power(issue, selection),
            RuleTag::Clearance => self.resolve_clearance(issue, selection),
            RuleTag::Cooler => self.resolve_cooler(issue, selection),
            RuleTag::FormFactor => self.resolve_form_factor(issue, selection),
        }
    }

    fn resolve_socket(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let mut recs = Vec::new();
        let (Some(cpu), Some(board)) = (selection.processor(), selection.motherboard()) else {
            return recs;
        };

        if let Some(socket) = board.spec("Socket") {
            for option in self.options(Category::Processor, cpu) {
                if option.spec("Socket") == Some(socket) {
                    recs.push(suggest(
                        issue,
                        option,
                        cpu,
                        format!(
                            "Compatible with your {} motherboard ({} socket)",
                            board.full_name(),
                            socket
                        ),
                        Priority::High,
                    ));
                }
            }
        }

        if let Some(socket) = cpu.spec("Socket") {
            for option in self.options(Category::Motherboard, board) {
                if option.spec("Socket") == Some(socket) {
                    recs.push(suggest(
                        issue,
                        option,
                        board,
                        format!(
                            "Compatible with your {} processor ({} socket)",
                            cpu.full_name(),
                            socket
                        ),
                        Priority::High,
                    ));
                }
            }
        }

        recs
    }

    fn resolve_memory(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let (Some(memory), Some(board)) = (selection.memory(), selection.motherboard()) else {
            return Vec::new();
        };
        let Some(board_memory) = board.spec("Memory") else {
            return Vec::new();
        };
        let required = MemoryStandard::classify(board_memory);

        self.options(Category::Memory, memory)
            .filter(|option| {
                option
                    .spec("Type")
                    .is_some_and(|t| t.contains(required.as_str()))
            })
            .map(|option| {
                suggest(
                    issue,
                    option,
                    memory,
                    format!(
                        "Compatible {} memory for your {} motherboard",
                        required,
                        board.full_name()
                    ),
                    Priority::High,
                )
            })
            .collect()
    }

    fn resolve_power(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let Some(psu) = selection.power_supply() else {
            return Vec::new();
        };
        let estimated = estimate_power_draw(selection);
        let required = with_headroom(estimated, 130);

        self.options(Category::PowerSupply, psu)
            .filter(|option| u64::from(spec_number(option, "Wattage", 0)) >= required)
            .map(|option| {
                let wattage = option.spec("Wattage").unwrap_or_default();
                suggest(
                    issue,
                    option,
                    psu,
                    format!(
                        "Provides sufficient power ({}) for your system (estimated {}W + headroom)",
                        wattage, estimated
                    ),
                    Priority::High,
                )
            })
            .collect()
    }

    fn resolve_clearance(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let mut recs = Vec::new();

        if issue.message.contains("GPU") {
            if let (Some(gpu), Some(case)) = (selection.gpu(), selection.case()) {
                let tier = gpu_tier(&gpu.name);
                let smaller_gpus = self
                    .options(Category::Gpu, gpu)
                    .filter(|option| gpu_tier(&option.name) < tier)
                    .take(CLEARANCE_ALTERNATIVES);
                for option in smaller_gpus {
                    recs.push(suggest(
                        issue,
                        option,
                        gpu,
                        format!(
                            "Smaller form factor that should fit in your {}",
                            case.full_name()
                        ),
                        Priority::Medium,
                    ));
                }

                let size = case_size(&case.name);
                let larger_cases = self
                    .options(Category::Case, case)
                    .filter(|option| case_size(&option.name) > size)
                    .take(CLEARANCE_ALTERNATIVES);
                for option in larger_cases {
                    recs.push(suggest(
                        issue,
                        option,
                        case,
                        format!(
                            "Larger case with better clearance for your {}",
                            gpu.full_name()
                        ),
                        Priority::Medium,
                    ));
                }
            }
        }

        if issue.message.contains("CPU cooler") {
            if let (Some(cooler), Some(case)) = (selection.cooler(), selection.case()) {
                let height = spec_number(cooler, "Height", DEFAULT_COOLER_HEIGHT);
                for option in self.options(Category::CpuCooler, cooler) {
                    let option_height = spec_number(option, "Height", DEFAULT_COOLER_HEIGHT);
                    if option_height < height {
                        let label = option
                            .spec("Height")
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{}mm", option_height));
                        recs.push(suggest(
                            issue,
                            option,
                            cooler,
                            format!(
                                "Lower profile cooler ({}) that fits in your {}",
                                label,
                                case.full_name()
                            ),
                            Priority::High,
                        ));
                    }
                }
            }
        }

        recs
    }

    fn resolve_cooler(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let (Some(cooler), Some(cpu)) = (selection.cooler(), selection.processor()) else {
            return Vec::new();
        };
        let Some(socket) = cpu.spec("Socket") else {
            return Vec::new();
        };

        self.options(Category::CpuCooler, cooler)
            .filter(|option| {
                option
                    .spec("Socket Support")
                    .is_some_and(|s| s.contains(socket))
            })
            .map(|option| {
                suggest(
                    issue,
                    option,
                    cooler,
                    format!(
                        "Supports your {} processor ({} socket)",
                        cpu.full_name(),
                        socket
                    ),
                    Priority::High,
                )
            })
            .collect()
    }

    fn resolve_form_factor(
        &self,
        issue: &CompatibilityIssue,
        selection: &Selection,
    ) -> Vec<ComponentRecommendation> {
        let (Some(board), Some(case)) = (selection.motherboard(), selection.case()) else {
            return Vec::new();
        };
        let Some(board_form) = board.spec("Form Factor") else {
            return Vec::new();
        };

        self.options(Category::Case, case)
            .filter(|option| match (board_form, option.spec("Form Factor")) {
                ("ATX", Some(form)) => form.contains("ATX"),
                ("Micro-ATX", Some(_)) => true,
                _ => false,
            })
            .map(|option| {
                suggest(
                    issue,
                    option,
                    case,
                    format!(
                        "Supports {} motherboards like your {}",
                        board_form,
                        board.full_name()
                    ),
                    Priority::High,
                )
            })
            .collect()
    }

    /// Catalog parts of `category` other than `current`, in listing order
    fn options<'c>(
        &'c self,
        category: Category,
        current: &'c Component,
    ) -> impl Iterator<Item = &'a Component> + 'c {
        self.catalog
            .by_category(category)
            .filter(move |option| option.id != current.id)
    }
}

fn suggest(
    issue: &CompatibilityIssue,
    option: &Component,
    current: &Component,
    reason: String,
    priority: Priority,
) -> ComponentRecommendation {
    ComponentRecommendation {
        component_type: option.category,
        component: option.clone(),
        reason,
        resolves_issues: vec![issue.rule],
        price_impact: PriceImpact::from_prices(option.price, current.price),
        priority,
    }
}

/// Keep the first recommendation for each (category, id) pair
fn dedup(recommendations: Vec<ComponentRecommendation>) -> Vec<ComponentRecommendation> {
    let mut seen = HashSet::new();
    recommendations
        .into_iter()
        .filter(|rec| seen.insert((rec.component_type, rec.component.id.clone())))
        .collect()
}

/// Stable sort: priority first, then cheaper alternatives
fn rank(recommendations: &mut [ComponentRecommendation]) {
    recommendations.sort_by_key(|rec| (rec.priority.rank(), rec.price_impact.rank()));
}

/// Recommendations for a set of issues in one call
pub fn generate_recommendations(
    catalog: &Catalog,
    issues: &[CompatibilityIssue],
    selection: &Selection,
) -> Vec<ComponentRecommendation> {
    RecommendationEngine::new(catalog).recommend(issues, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::check_compatibility;

    fn pick(catalog: &Catalog, ids: &[&str]) -> Selection {
        ids.iter()
            .map(|id| catalog.find(id).cloned().unwrap())
            .collect()
    }

    fn recommend(catalog: &Catalog, selection: &Selection) -> Vec<ComponentRecommendation> {
        let issues = check_compatibility(catalog, selection);
        generate_recommendations(catalog, &issues, selection)
    }

    fn ids(recs: &[ComponentRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.component.id.as_str()).collect()
    }

    #[test]
    fn test_socket_alternatives() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "mb-2"]);
        let recs = recommend(&catalog, &selection);

        assert_eq!(ids(&recs), vec!["cpu-2", "cpu-4", "mb-1"]);
        assert!(recs.iter().all(|r| r.priority == Priority::High));
        assert!(recs.iter().all(|r| r.resolves_issues == vec![RuleTag::Socket]));
        assert_eq!(
            recs[0].reason,
            "Compatible with your Gigabyte X670E Aorus Master motherboard (AM5 socket)"
        );
        assert_eq!(
            recs[2].reason,
            "Compatible with your Intel Core i9-13900K processor (LGA1700 socket)"
        );
    }

    #[test]
    fn test_only_errors_produce_recommendations() {
        let catalog = Catalog::reference();
        // DDR5 on cpu-4 is only a warning
        let selection = pick(&catalog, &["cpu-4", "ram-1"]);
        let issues = check_compatibility(&catalog, &selection);
        assert_eq!(issues.len(), 1);
        assert!(generate_recommendations(&catalog, &issues, &selection).is_empty());
    }

    #[test]
    fn test_power_alternatives() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "gpu-1", "psu-3"]);
        let recs = recommend(&catalog, &selection);

        // 675W * 1.3 = 878W: only the 1000W unit qualifies
        assert_eq!(ids(&recs), vec!["psu-1"]);
        assert_eq!(recs[0].price_impact, PriceImpact::Higher);
        assert_eq!(
            recs[0].reason,
            "Provides sufficient power (1000W) for your system (estimated 675W + headroom)"
        );
    }

    #[test]
    fn test_absurd_tdp_leaves_no_power_alternatives() {
        let catalog = Catalog::reference();
        let cpu = Component::new("c", Category::Processor, "X", "Y", 1.0)
            .with_spec("TDP", "4000000000W");
        let selection = pick(&catalog, &["psu-2"]).with(cpu);
        let recs = recommend(&catalog, &selection);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_memory_alternatives() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["ram-2", "mb-1"]);
        let recs = recommend(&catalog, &selection);
        assert_eq!(ids(&recs), vec!["ram-1", "ram-3"]);
        assert_eq!(
            recs[0].reason,
            "Compatible DDR5 memory for your ASUS ROG Strix Z790-E motherboard"
        );
    }

    #[test]
    fn test_gpu_clearance_alternatives() {
        let catalog = Catalog::reference();
        let cramped = Component::new("case-x", Category::Case, "ACME", "Compact Shoebox", 60.0)
            .with_spec("Clearances", "GPU: 280mm, CPU: 120mm");
        let selection = pick(&catalog, &["gpu-1"]).with(cramped);
        let recs = recommend(&catalog, &selection);

        let gpus: Vec<_> = recs.iter().filter(|r| r.component_type == Category::Gpu).collect();
        let cases: Vec<_> = recs.iter().filter(|r| r.component_type == Category::Case).collect();
        assert_eq!(gpus.len(), 2);
        assert_eq!(cases.len(), 2);
        assert!(recs.iter().all(|r| r.priority == Priority::Medium));
        assert!(cases.iter().all(|r| r.component.id != "case-2"));
    }

    #[test]
    fn test_cooler_clearance_alternatives() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cooler-1", "case-3"]);
        let recs = recommend(&catalog, &selection);

        assert_eq!(ids(&recs), vec!["cooler-3", "cooler-2"]);
        let aio = recs.iter().find(|r| r.component.id == "cooler-2").unwrap();
        assert_eq!(
            aio.reason,
            "Lower profile cooler (150mm) that fits in your Cooler Master MasterBox MB311L"
        );
    }

    #[test]
    fn test_form_factor_alternatives_exclude_current_case() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["mb-1", "case-3"]);
        let recs = recommend(&catalog, &selection);
        assert_eq!(ids(&recs), vec!["case-1", "case-2"]);
        assert_eq!(
            recs[0].reason,
            "Supports ATX motherboards like your ASUS ROG Strix Z790-E"
        );
    }

    #[test]
    fn test_cooler_socket_alternatives() {
        let catalog = Catalog::reference();
        let am4_only = Component::new("cooler-x", Category::CpuCooler, "ACME", "AM4 Only", 50.0)
            .with_spec("Socket Support", "AM4");
        let selection = pick(&catalog, &["cpu-2"]).with(am4_only);
        let recs = recommend(&catalog, &selection);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.component_type == Category::CpuCooler));
    }

    #[test]
    fn test_duplicate_issues_are_deduplicated() {
        let catalog = Catalog::reference();
        let selection = pick(&catalog, &["cpu-1", "mb-2"]);
        let mut issues = check_compatibility(&catalog, &selection);
        issues.extend(issues.clone());

        let recs = generate_recommendations(&catalog, &issues, &selection);
        assert_eq!(ids(&recs), vec!["cpu-2", "cpu-4", "mb-1"]);
    }

    #[test]
    fn test_rank_orders_priority_then_price() {
        let part = |id: &str| Component::new(id, Category::Gpu, "X", id, 1.0);
        let rec = |id: &str, priority, price_impact| ComponentRecommendation {
            component_type: Category::Gpu,
            component: part(id),
            reason: String::new(),
            resolves_issues: vec![RuleTag::Clearance],
            price_impact,
            priority,
        };

        let mut recs = vec![
            rec("a", Priority::Low, PriceImpact::Lower),
            rec("b", Priority::High, PriceImpact::Higher),
            rec("c", Priority::Medium, PriceImpact::Similar),
            rec("d", Priority::High, PriceImpact::Lower),
            rec("e", Priority::High, PriceImpact::Higher),
        ];
        rank(&mut recs);
        assert_eq!(ids(&recs), vec!["d", "b", "e", "c", "a"]);
    }
}
