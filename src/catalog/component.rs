//! Component and selection model
//!
//! A [`Component`] is an immutable catalog entry with free-text specifications.
//! A [`Selection`] maps each [`Category`] to at most one chosen component.

use crate::error::RigCheckError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Part category of a PC build
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// CPU
    Processor,
    /// CPU cooler (air or AIO)
    CpuCooler,
    /// Motherboard
    Motherboard,
    /// Graphics card
    Gpu,
    /// RAM kit
    Memory,
    /// SSD or HDD
    Storage,
    /// Power supply unit
    PowerSupply,
    /// Chassis
    Case,
}

impl Category {
    /// All categories in build order
    pub const ALL: [Category; 8] = [
        Category::Processor,
        Category::CpuCooler,
        Category::Motherboard,
        Category::Gpu,
        Category::Memory,
        Category::Storage,
        Category::PowerSupply,
        Category::Case,
    ];

    /// Stable key used in selections, build files and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Processor => "processor",
            Self::CpuCooler => "cpu-cooler",
            Self::Motherboard => "motherboard",
            Self::Gpu => "gpu",
            Self::Memory => "memory",
            Self::Storage => "storage",
            Self::PowerSupply => "power-supply",
            Self::Case => "case",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Processor => "Processor",
            Self::CpuCooler => "CPU Cooler",
            Self::Motherboard => "Motherboard",
            Self::Gpu => "GPU",
            Self::Memory => "Memory",
            Self::Storage => "Storage",
            Self::PowerSupply => "Power Supply",
            Self::Case => "Case",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = RigCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .ok_or_else(|| RigCheckError::UnknownCategory(s.to_string()))
    }
}

/// Catalog entry for a purchasable part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique id, the only stable join key across catalog revisions
    pub id: String,
    /// Part category
    pub category: Category,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub name: String,
    /// Price in USD
    pub price: f64,
    /// Free-text specifications; keys vary by category
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Marketing tier label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
}

impl Component {
    /// Create a component without specifications
    pub fn new(
        id: impl Into<String>,
        category: Category,
        brand: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            brand: brand.into(),
            name: name.into(),
            price,
            specifications: BTreeMap::new(),
            performance: None,
        }
    }

    /// Add a specification entry
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    /// Set the marketing tier label
    pub fn with_performance(mut self, label: impl Into<String>) -> Self {
        self.performance = Some(label.into());
        self
    }

    /// Look up a specification value
    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specifications.get(key).map(String::as_str)
    }

    /// "Brand Name" as shown to users
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

/// The user's current per-category choices
///
/// The analysis core only ever reads a selection; swaps produce new values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    parts: BTreeMap<Category, Component>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Selection::set`]
    pub fn with(mut self, component: Component) -> Self {
        self.set(component);
        self
    }

    /// Select a component under its own category, returning the replaced one
    pub fn set(&mut self, component: Component) -> Option<Component> {
        self.parts.insert(component.category, component)
    }

    /// Deselect a category
    pub fn remove(&mut self, category: Category) -> Option<Component> {
        self.parts.remove(&category)
    }

    /// Copy of this selection with `category` replaced by `component`
    pub fn with_swapped(&self, category: Category, component: Component) -> Self {
        let mut parts = self.parts.clone();
        parts.insert(category, component);
        Self { parts }
    }

    /// Component chosen for a category
    pub fn get(&self, category: Category) -> Option<&Component> {
        self.parts.get(&category)
    }

    /// Selected CPU
    pub fn processor(&self) -> Option<&Component> {
        self.get(Category::Processor)
    }

    /// Selected CPU cooler
    pub fn cooler(&self) -> Option<&Component> {
        self.get(Category::CpuCooler)
    }

    /// Selected motherboard
    pub fn motherboard(&self) -> Option<&Component> {
        self.get(Category::Motherboard)
    }

    /// Selected GPU
    pub fn gpu(&self) -> Option<&Component> {
        self.get(Category::Gpu)
    }

    /// Selected memory kit
    pub fn memory(&self) -> Option<&Component> {
        self.get(Category::Memory)
    }

    /// Selected storage drive
    pub fn storage(&self) -> Option<&Component> {
        self.get(Category::Storage)
    }

    /// Selected power supply
    pub fn power_supply(&self) -> Option<&Component> {
        self.get(Category::PowerSupply)
    }

    /// Selected case
    pub fn case(&self) -> Option<&Component> {
        self.get(Category::Case)
    }

    /// Number of selected parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate over selected parts in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Component)> {
        self.parts.iter().map(|(c, p)| (*c, p))
    }

    /// Sum of the selected parts' prices
    pub fn total_price(&self) -> f64 {
        self.parts.values().map(|p| p.price).sum()
    }
}

impl FromIterator<Component> for Selection {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for component in iter {
            selection.set(component);
        }
        selection
    }
}
