//! Crop reference models (provincial crop planning guide data)

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{CropCategory, DamageType, Province, SoilZone, TargetYield, UnitPrice};

/// Per-zone economics and fertility row for a crop.
///
/// One row per soil zone, transcribed from the provincial crop planning
/// guides. Yields and prices carry explicit units; some specialty crops
/// (sunflower, dry beans) are quoted in pounds rather than bushels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ZoneEconomics {
    pub target_yield: TargetYield,
    pub guide_price: UnitPrice,
    /// Expected gross revenue per acre at target yield and guide price
    pub gross_revenue_per_acre: Decimal,
    pub nitrogen_lb_per_acre: u32,
    pub phosphorus_lb_per_acre: u32,
    pub sulphur_lb_per_acre: u32,
    pub potassium_lb_per_acre: u32,
    pub breakeven_yield: TargetYield,
    pub breakeven_price: UnitPrice,
}

/// Static reference entry for a single crop.
///
/// Immutable guide data; never mutated at runtime. The zone list preserves
/// the order of the source tables, and the first entry doubles as the
/// fallback row for zones the guide does not cover.
#[derive(Debug, Clone, Serialize)]
pub struct CropReference {
    pub name: &'static str,
    pub category: CropCategory,
    pub provinces: &'static [Province],
    pub zones: Vec<(SoilZone, ZoneEconomics)>,
    pub rotation_notes: &'static str,
    pub insects: &'static [&'static str],
    pub diseases: &'static [&'static str],
    pub disease_notes: &'static str,
    pub weed_notes: &'static str,
    /// Spray-timing descriptor as printed in the guide
    /// (e.g. "Pre-harv, Pre-seed, Soil, In-crop")
    pub spray_timings: &'static str,
    pub source: &'static str,
}

impl CropReference {
    /// Zone row exactly as defined, without fallback
    pub fn zone_data_strict(&self, zone: SoilZone) -> Option<&ZoneEconomics> {
        self.zones
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, data)| data)
    }

    /// First zone defined for this crop (the fallback row)
    pub fn first_zone(&self) -> Option<(SoilZone, &ZoneEconomics)> {
        self.zones.first().map(|(z, data)| (*z, data))
    }

    pub fn grows_in(&self, province: Province) -> bool {
        self.provinces.contains(&province)
    }

    /// Known pest list for a damage category
    pub fn pest_list(&self, damage: DamageType) -> &'static [&'static str] {
        match damage {
            DamageType::Insect => self.insects,
            DamageType::Disease => self.diseases,
        }
    }
}
