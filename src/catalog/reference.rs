//! Built-in reference catalog
//!
//! Parts, ratings and CPU baselines shipped with the binary. Benchmark tables
//! live in `reference_benchmarks`.

use super::{Category, Component, CpuRating, GpuRating, MemoryRating, RatingTables, StorageRating};
use std::collections::{BTreeMap, BTreeSet};

fn part(
    id: &str,
    category: Category,
    brand: &str,
    name: &str,
    price: f64,
    performance: &str,
    specs: &[(&str, &str)],
) -> Component {
    specs
        .iter()
        .fold(Component::new(id, category, brand, name, price), |c, (k, v)| c.with_spec(*k, *v))
        .with_performance(performance)
}

#[rustfmt::skip]
pub(crate) fn components() -> Vec<Component> {
    use Category::*;

    vec![
        // Processors
        part("cpu-1", Processor, "Intel", "Core i9-13900K", 589.0, "High-End Gaming & Workstation", &[
            ("Cores", "24 (8P+16E)"),
            ("Threads", "32"),
            ("Base Clock", "3.0 GHz"),
            ("Boost Clock", "5.8 GHz"),
            ("Socket", "LGA1700"),
            ("TDP", "125W"),
        ]),
        part("cpu-2", Processor, "AMD", "Ryzen 9 7900X", 429.0, "High-End Gaming & Content Creation", &[
            ("Cores", "12"),
            ("Threads", "24"),
            ("Base Clock", "4.7 GHz"),
            ("Boost Clock", "5.6 GHz"),
            ("Socket", "AM5"),
            ("TDP", "170W"),
        ]),
        part("cpu-3", Processor, "Intel", "Core i5-13600K", 319.0, "Mid-Range Gaming", &[
            ("Cores", "14 (6P+8E)"),
            ("Threads", "20"),
            ("Base Clock", "3.5 GHz"),
            ("Boost Clock", "5.1 GHz"),
            ("Socket", "LGA1700"),
            ("TDP", "125W"),
        ]),
        part("cpu-4", Processor, "AMD", "Ryzen 5 7600X", 229.0, "Budget Gaming", &[
            ("Cores", "6"),
            ("Threads", "12"),
            ("Base Clock", "4.7 GHz"),
            ("Boost Clock", "5.3 GHz"),
            ("Socket", "AM5"),
            ("TDP", "105W"),
        ]),
        // Coolers
        part("cooler-1", CpuCooler, "Noctua", "NH-D15", 109.0, "Premium Air Cooling", &[
            ("Type", "Air Cooler"),
            ("Height", "165mm"),
            ("Fans", "2x 140mm"),
            ("Socket Support", "LGA1700, AM5, AM4"),
            ("Noise Level", "24.6 dB(A)"),
        ]),
        part("cooler-2", CpuCooler, "NZXT", "Kraken X63", 149.0, "High-Performance Liquid", &[
            ("Type", "AIO Liquid"),
            ("Radiator Size", "280mm"),
            ("Fans", "2x 140mm"),
            ("Socket Support", "LGA1700, AM5, AM4"),
            ("Pump Speed", "2800 RPM"),
        ]),
        part("cooler-3", CpuCooler, "Cooler Master", "Hyper 212 RGB", 44.0, "Budget-Friendly", &[
            ("Type", "Air Cooler"),
            ("Height", "158.8mm"),
            ("Fans", "1x 120mm RGB"),
            ("Socket Support", "LGA1700, AM5, AM4"),
            ("Noise Level", "26 dB(A)"),
        ]),
        // Motherboards
        part("mb-1", Motherboard, "ASUS", "ROG Strix Z790-E", 449.0, "Premium Features", &[
            ("Socket", "LGA1700"),
            ("Chipset", "Z790"),
            ("Form Factor", "ATX"),
            ("Memory", "DDR5-7600+ (OC)"),
            ("PCIe Slots", "4x PCIe 5.0"),
            ("WiFi", "WiFi 6E"),
        ]),
        part("mb-2", Motherboard, "Gigabyte", "X670E Aorus Master", 499.0, "Enthusiast Grade", &[
            ("Socket", "AM5"),
            ("Chipset", "X670E"),
            ("Form Factor", "ATX"),
            ("Memory", "DDR5-6400+ (OC)"),
            ("PCIe Slots", "4x PCIe 5.0"),
            ("WiFi", "WiFi 6E"),
        ]),
        part("mb-3", Motherboard, "MSI", "B650 Gaming X AX", 199.0, "Mid-Range Value", &[
            ("Socket", "AM5"),
            ("Chipset", "B650"),
            ("Form Factor", "ATX"),
            ("Memory", "DDR5-5200+ (OC)"),
            ("PCIe Slots", "2x PCIe 4.0"),
            ("WiFi", "WiFi 6"),
        ]),
        // Graphics cards
        part("gpu-1", Gpu, "NVIDIA", "GeForce RTX 4090", 1599.0, "4K Gaming Ultra", &[
            ("Memory", "24GB GDDR6X"),
            ("Base Clock", "2230 MHz"),
            ("Boost Clock", "2520 MHz"),
            ("CUDA Cores", "16384"),
            ("Memory Bus", "384-bit"),
            ("TDP", "450W"),
        ]),
        part("gpu-2", Gpu, "NVIDIA", "GeForce RTX 4070 Ti", 799.0, "1440p Gaming High", &[
            ("Memory", "12GB GDDR6X"),
            ("Base Clock", "2310 MHz"),
            ("Boost Clock", "2610 MHz"),
            ("CUDA Cores", "7680"),
            ("Memory Bus", "192-bit"),
            ("TDP", "285W"),
        ]),
        part("gpu-3", Gpu, "AMD", "Radeon RX 7800 XT", 499.0, "1440p Gaming", &[
            ("Memory", "16GB GDDR6"),
            ("Game Clock", "2124 MHz"),
            ("Boost Clock", "2430 MHz"),
            ("Stream Processors", "3840"),
            ("Memory Bus", "256-bit"),
            ("TDP", "263W"),
        ]),
        part("gpu-4", Gpu, "NVIDIA", "GeForce RTX 4060", 299.0, "1080p Gaming High", &[
            ("Memory", "8GB GDDR6"),
            ("Base Clock", "1830 MHz"),
            ("Boost Clock", "2460 MHz"),
            ("CUDA Cores", "3072"),
            ("Memory Bus", "128-bit"),
            ("TDP", "115W"),
        ]),
        // Memory
        part("ram-1", Memory, "G.Skill", "Trident Z5 RGB 32GB", 179.0, "High-Performance", &[
            ("Capacity", "32GB (2x16GB)"),
            ("Type", "DDR5"),
            ("Speed", "6000 MHz"),
            ("Timings", "CL30-38-38-96"),
            ("Voltage", "1.35V"),
            ("RGB", "Yes"),
        ]),
        part("ram-2", Memory, "Corsair", "Vengeance LPX 16GB", 89.0, "Value Gaming", &[
            ("Capacity", "16GB (2x8GB)"),
            ("Type", "DDR4"),
            ("Speed", "3200 MHz"),
            ("Timings", "CL16-18-18-36"),
            ("Voltage", "1.35V"),
            ("RGB", "No"),
        ]),
        part("ram-3", Memory, "Corsair", "Dominator Platinum RGB 64GB", 449.0, "Workstation/Creator", &[
            ("Capacity", "64GB (2x32GB)"),
            ("Type", "DDR5"),
            ("Speed", "5600 MHz"),
            ("Timings", "CL40-40-40-77"),
            ("Voltage", "1.25V"),
            ("RGB", "Yes"),
        ]),
        // Storage
        part("ssd-1", Storage, "Samsung", "980 PRO 2TB", 199.0, "Premium Performance", &[
            ("Capacity", "2TB"),
            ("Type", "NVMe M.2"),
            ("Interface", "PCIe 4.0"),
            ("Read Speed", "7000 MB/s"),
            ("Write Speed", "6900 MB/s"),
            ("Form Factor", "2280"),
        ]),
        part("ssd-2", Storage, "WD", "SN770 1TB", 79.0, "Budget Gaming", &[
            ("Capacity", "1TB"),
            ("Type", "NVMe M.2"),
            ("Interface", "PCIe 3.0"),
            ("Read Speed", "3500 MB/s"),
            ("Write Speed", "3000 MB/s"),
            ("Form Factor", "2280"),
        ]),
        part("hdd-1", Storage, "Seagate", "Barracuda 4TB", 89.0, "Mass Storage", &[
            ("Capacity", "4TB"),
            ("Type", "HDD 3.5\""),
            ("Interface", "SATA III"),
            ("RPM", "5400"),
            ("Cache", "256MB"),
            ("Form Factor", "3.5\""),
        ]),
        // Power supplies
        part("psu-1", PowerSupply, "Corsair", "RM1000x", 199.0, "High-End Systems", &[
            ("Wattage", "1000W"),
            ("Efficiency", "80+ Gold"),
            ("Modular", "Fully Modular"),
            ("Form Factor", "ATX"),
            ("Fan Size", "135mm"),
            ("Warranty", "10 Years"),
        ]),
        part("psu-2", PowerSupply, "Seasonic", "Focus GX-850", 139.0, "Gaming Systems", &[
            ("Wattage", "850W"),
            ("Efficiency", "80+ Gold"),
            ("Modular", "Fully Modular"),
            ("Form Factor", "ATX"),
            ("Fan Size", "135mm"),
            ("Warranty", "10 Years"),
        ]),
        part("psu-3", PowerSupply, "Corsair", "CV650", 69.0, "Budget Builds", &[
            ("Wattage", "650W"),
            ("Efficiency", "80+ Bronze"),
            ("Modular", "Non-Modular"),
            ("Form Factor", "ATX"),
            ("Fan Size", "120mm"),
            ("Warranty", "5 Years"),
        ]),
        // Cases
        part("case-1", Case, "NZXT", "H7 Flow", 149.0, "Excellent Airflow", &[
            ("Form Factor", "Mid-Tower ATX"),
            ("Dimensions", "435 x 230 x 494mm"),
            ("Clearances", "GPU: 381mm, CPU: 185mm"),
            ("Drive Bays", "2x 3.5\", 4x 2.5\""),
            ("Front I/O", "1x USB-C, 2x USB-A"),
            ("Fans Included", "3x 120mm"),
        ]),
        part("case-2", Case, "Fractal Design", "Define 7 Compact", 109.0, "Silent Computing", &[
            ("Form Factor", "Mid-Tower ATX"),
            ("Dimensions", "399 x 212 x 453mm"),
            ("Clearances", "GPU: 315mm, CPU: 169mm"),
            ("Drive Bays", "2x 3.5\", 3x 2.5\""),
            ("Front I/O", "2x USB-A, Audio"),
            ("Fans Included", "2x 140mm"),
        ]),
        part("case-3", Case, "Cooler Master", "MasterBox MB311L", 59.0, "Compact Budget", &[
            ("Form Factor", "Micro-ATX"),
            ("Dimensions", "387 x 192 x 411mm"),
            ("Clearances", "GPU: 350mm, CPU: 159mm"),
            ("Drive Bays", "1x 3.5\", 2x 2.5\""),
            ("Front I/O", "2x USB-A, Audio"),
            ("Fans Included", "1x 120mm"),
        ]),
    ]
}

#[rustfmt::skip]
pub(crate) fn ratings() -> RatingTables {
    let cpu = |single_core, multi_core, gaming, productivity| CpuRating {
        single_core,
        multi_core,
        gaming,
        productivity,
    };
    let gpu = |performance_1080p, performance_1440p, performance_4k, ray_tracing, productivity| GpuRating {
        performance_1080p,
        performance_1440p,
        performance_4k,
        ray_tracing,
        productivity,
    };
    let memory = |capacity, speed, gaming, productivity| MemoryRating {
        capacity,
        speed,
        gaming,
        productivity,
    };
    let storage = |speed, capacity, gaming, productivity| StorageRating {
        speed,
        capacity,
        gaming,
        productivity,
    };

    RatingTables {
        processor: BTreeMap::from([
            ("cpu-1".to_string(), cpu(95.0, 98.0, 92.0, 96.0)),
            ("cpu-2".to_string(), cpu(92.0, 94.0, 90.0, 94.0)),
            ("cpu-3".to_string(), cpu(88.0, 85.0, 85.0, 82.0)),
            ("cpu-4".to_string(), cpu(85.0, 78.0, 82.0, 75.0)),
        ]),
        gpu: BTreeMap::from([
            ("gpu-1".to_string(), gpu(100.0, 100.0, 95.0, 100.0, 95.0)),
            ("gpu-2".to_string(), gpu(90.0, 85.0, 70.0, 85.0, 80.0)),
            ("gpu-3".to_string(), gpu(88.0, 82.0, 68.0, 75.0, 75.0)),
            ("gpu-4".to_string(), gpu(75.0, 65.0, 45.0, 65.0, 60.0)),
        ]),
        memory: BTreeMap::from([
            ("ram-1".to_string(), memory(90.0, 85.0, 85.0, 88.0)),
            ("ram-2".to_string(), memory(60.0, 65.0, 70.0, 65.0)),
            ("ram-3".to_string(), memory(100.0, 80.0, 82.0, 95.0)),
        ]),
        storage: BTreeMap::from([
            ("ssd-1".to_string(), storage(95.0, 85.0, 90.0, 92.0)),
            ("ssd-2".to_string(), storage(80.0, 70.0, 78.0, 80.0)),
            ("hdd-1".to_string(), storage(25.0, 95.0, 40.0, 45.0)),
        ]),
    }
}

/// Relative CPU strength for frame-rate scaling; the fastest part is 1.0
pub(crate) fn cpu_baselines() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("cpu-1".to_string(), 1.0),
        ("cpu-2".to_string(), 0.96),
        ("cpu-3".to_string(), 0.88),
        ("cpu-4".to_string(), 0.82),
    ])
}

/// Processors assumed to have a DDR5 memory controller
pub(crate) fn ddr5_processors() -> BTreeSet<String> {
    ["cpu-1", "cpu-2", "cpu-3"].iter().map(|s| s.to_string()).collect()
}
