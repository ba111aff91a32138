//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prairie soil zones (provincial agro-climatic classification)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilZone {
    Brown,
    DarkBrown,
    Black,
    GreyWooded,
    Peace,
    Irrigated,
}

impl SoilZone {
    /// Human-readable zone label as printed in the provincial guides
    pub fn label(&self) -> &'static str {
        match self {
            SoilZone::Brown => "Brown",
            SoilZone::DarkBrown => "Dark Brown",
            SoilZone::Black => "Black",
            SoilZone::GreyWooded => "Grey-Wooded",
            SoilZone::Peace => "Peace",
            SoilZone::Irrigated => "Irrigated",
        }
    }
}

impl std::fmt::Display for SoilZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Provinces covered by the reference guide data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Province {
    #[serde(rename = "SK")]
    Saskatchewan,
    #[serde(rename = "AB")]
    Alberta,
    #[serde(rename = "MB")]
    Manitoba,
}

impl Province {
    pub fn code(&self) -> &'static str {
        match self {
            Province::Saskatchewan => "SK",
            Province::Alberta => "AB",
            Province::Manitoba => "MB",
        }
    }

    /// Soil zones with reference coverage in this province
    pub fn zones(&self) -> &'static [SoilZone] {
        match self {
            Province::Alberta => &[
                SoilZone::Brown,
                SoilZone::DarkBrown,
                SoilZone::Black,
                SoilZone::GreyWooded,
                SoilZone::Peace,
                SoilZone::Irrigated,
            ],
            Province::Saskatchewan => &[SoilZone::Brown, SoilZone::DarkBrown, SoilZone::Black],
            Province::Manitoba => &[
                SoilZone::Brown,
                SoilZone::DarkBrown,
                SoilZone::Black,
                SoilZone::GreyWooded,
            ],
        }
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Crop categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Oilseed,
    Pulse,
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCategory::Cereal => write!(f, "Cereal"),
            CropCategory::Oilseed => write!(f, "Oilseed"),
            CropCategory::Pulse => write!(f, "Pulse"),
        }
    }
}

/// Damage categories for the scouting diagnostic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Insect,
    Disease,
}

/// Pricing unit for a commodity price.
///
/// Carried explicitly on every reference price so comparison rules never
/// have to sniff a formatted display string for a "/lb" suffix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    CadPerBushel,
    CadPerPound,
}

impl PriceUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            PriceUnit::CadPerBushel => "bu",
            PriceUnit::CadPerPound => "lb",
        }
    }
}

/// Yield unit for a reference yield figure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YieldUnit {
    BushelsPerAcre,
    PoundsPerAcre,
}

impl YieldUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            YieldUnit::BushelsPerAcre => "bu",
            YieldUnit::PoundsPerAcre => "lb",
        }
    }
}

/// A commodity price with its explicit unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitPrice {
    pub amount: Decimal,
    pub unit: PriceUnit,
}

impl UnitPrice {
    pub fn new(amount: Decimal, unit: PriceUnit) -> Self {
        Self { amount, unit }
    }
}

impl std::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}/{}", self.amount, self.unit.suffix())
    }
}

/// A per-acre yield with its explicit unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetYield {
    pub amount: Decimal,
    pub unit: YieldUnit,
}

impl TargetYield {
    pub fn new(amount: Decimal, unit: YieldUnit) -> Self {
        Self { amount, unit }
    }
}

impl std::fmt::Display for TargetYield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/ac", self.amount, self.unit.suffix())
    }
}
