//! Provincial source-guide routing
//!
//! Each province's reference figures trace to its own published guides;
//! Manitoba shares the Saskatchewan crop planning data.

use shared::Province;

/// Citation set for one province's reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceSources {
    pub crop_guide: &'static str,
    pub protection_guide: &'static str,
    pub nutrient_guide: &'static str,
}

/// Source guides backing a province's reference rows
pub fn province_sources(province: Province) -> ProvinceSources {
    match province {
        Province::Alberta => ProvinceSources {
            crop_guide: "AB Cropping Alternatives 2025 (AgriProfit$)",
            protection_guide: "AB Crop Protection Guide 2025 (Alberta Grains)",
            nutrient_guide: "AB Nutrient Management Planning Guide",
        },
        Province::Saskatchewan => ProvinceSources {
            crop_guide: "SK Crop Planning Guide 2026 (SK Min. of Agriculture)",
            protection_guide: "SK Guide to Crop Protection 2025",
            nutrient_guide: "SK Crop Planning Guide 2026",
        },
        Province::Manitoba => ProvinceSources {
            crop_guide: "SK Crop Planning Guide 2026 (shared prairie data)",
            protection_guide: "MB Guide to Crop Protection 2025",
            nutrient_guide: "SK Crop Planning Guide 2026 (shared prairie data)",
        },
    }
}
