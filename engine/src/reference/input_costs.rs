//! Per-acre input cost baseline
//!
//! AgriProfit$-style cost categories with prairie-average defaults, used by
//! the zone-level breakeven analysis when the operator has not entered
//! their own figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-acre cost baseline, $/acre per category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputCostBaseline {
    // Variable
    pub seed: Decimal,
    pub fertilizer: Decimal,
    pub crop_protection: Decimal,
    pub crop_insurance: Decimal,
    pub trucking: Decimal,
    pub fuel: Decimal,
    pub machinery_repairs: Decimal,
    pub building_repairs: Decimal,
    pub custom_work: Decimal,
    pub labour: Decimal,
    pub utilities: Decimal,
    pub operating_interest: Decimal,
    // Fixed
    pub land_rent: Decimal,
    pub licenses_insurance: Decimal,
    pub depreciation: Decimal,
    pub capital_interest: Decimal,
}

impl InputCostBaseline {
    /// Prairie-average defaults from the AgriProfit$ cropping alternatives
    pub fn prairie_default() -> Self {
        Self {
            seed: Decimal::from(35),
            fertilizer: Decimal::from(89),
            crop_protection: Decimal::from(55),
            crop_insurance: Decimal::from(20),
            trucking: Decimal::from(30),
            fuel: Decimal::from(38),
            machinery_repairs: Decimal::from(30),
            building_repairs: Decimal::from(4),
            custom_work: Decimal::from(6),
            labour: Decimal::from(22),
            utilities: Decimal::from(21),
            operating_interest: Decimal::from(12),
            land_rent: Decimal::from(80),
            licenses_insurance: Decimal::from(15),
            depreciation: Decimal::from(55),
            capital_interest: Decimal::from(12),
        }
    }

    /// Variable cost categories with display labels, in guide order
    pub fn variable_categories(&self) -> [(&'static str, Decimal); 12] {
        [
            ("Seed", self.seed),
            ("Fertilizer", self.fertilizer),
            ("Crop Protection", self.crop_protection),
            ("Crop Insurance", self.crop_insurance),
            ("Trucking", self.trucking),
            ("Fuel", self.fuel),
            ("Machinery Repairs", self.machinery_repairs),
            ("Building Repairs", self.building_repairs),
            ("Custom Work", self.custom_work),
            ("Labour", self.labour),
            ("Utilities", self.utilities),
            ("Operating Interest", self.operating_interest),
        ]
    }

    /// Fixed cost categories with display labels, in guide order
    pub fn fixed_categories(&self) -> [(&'static str, Decimal); 4] {
        [
            ("Land Rent / Taxes", self.land_rent),
            ("Licenses & Insurance", self.licenses_insurance),
            ("Depreciation", self.depreciation),
            ("Capital Interest", self.capital_interest),
        ]
    }

    pub fn variable_total(&self) -> Decimal {
        self.variable_categories().iter().map(|(_, v)| *v).sum()
    }

    pub fn fixed_total(&self) -> Decimal {
        self.fixed_categories().iter().map(|(_, v)| *v).sum()
    }

    /// Total cost per acre across all categories
    pub fn total(&self) -> Decimal {
        self.variable_total() + self.fixed_total()
    }
}

impl Default for InputCostBaseline {
    fn default() -> Self {
        Self::prairie_default()
    }
}
