//! Cost line items and derived crop economics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::sanitize_amount;

/// How a crop's volume is counted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InventoryMode {
    /// Harvested grain sitting in the bin
    OnHand,
    /// Seeded or planned acres at an expected yield
    #[default]
    Forecast,
}

/// Per-crop cost and inventory entry owned by the farm operator.
///
/// Farmer-entered spreadsheet-style data: fields are sparse, optional, and
/// occasionally nonsense. Derived economics are always recomputed from the
/// current field values and never stored alongside them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CostLineItem {
    pub crop: String,
    pub mode: InventoryMode,
    /// Bushels in the bin (on-hand mode)
    pub bushels_on_hand: Decimal,
    /// Seeded acres (forecast mode)
    pub acres: Decimal,
    /// Average Production History, bu/ac (forecast mode)
    pub aph: Decimal,
    /// Target sale price, $/bu
    pub target_price: Decimal,

    // Fixed costs, $/acre
    pub land_rent: Decimal,
    pub equipment_depreciation: Decimal,
    pub insurance: Decimal,
    pub property_tax: Decimal,
    pub overhead: Decimal,

    // Variable costs, $/acre
    pub seed: Decimal,
    pub fertilizer: Decimal,
    pub herbicide: Decimal,
    pub fungicide: Decimal,
    pub insecticide: Decimal,
    pub fuel: Decimal,
    pub drying: Decimal,
    pub trucking: Decimal,
    pub elevation: Decimal,
    pub crop_insurance: Decimal,
}

impl CostLineItem {
    /// Sum of the fixed cost fields, $/acre.
    ///
    /// Negative entries coerce to zero rather than poisoning the total.
    pub fn fixed_per_acre(&self) -> Decimal {
        [
            self.land_rent,
            self.equipment_depreciation,
            self.insurance,
            self.property_tax,
            self.overhead,
        ]
        .into_iter()
        .map(sanitize_amount)
        .sum()
    }

    /// Sum of the variable cost fields, $/acre
    pub fn variable_per_acre(&self) -> Decimal {
        [
            self.seed,
            self.fertilizer,
            self.herbicide,
            self.fungicide,
            self.insecticide,
            self.fuel,
            self.drying,
            self.trucking,
            self.elevation,
            self.crop_insurance,
        ]
        .into_iter()
        .map(sanitize_amount)
        .sum()
    }
}

/// Economics derived from a [`CostLineItem`].
///
/// Pure function of the line item; no field here is ever persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropEconomics {
    pub bushels: Decimal,
    pub acres: Decimal,
    pub fixed_per_acre: Decimal,
    pub variable_per_acre: Decimal,
    pub total_cost_per_acre: Decimal,
    pub total_cost: Decimal,
    pub gross_revenue: Decimal,
    pub net_profit: Decimal,
    /// Minimum sale price to cover costs, $/bu. Zero when acres or yield
    /// are zero rather than a division error.
    pub breakeven_price: Decimal,
}

/// Whole-farm totals across the crop inventory
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmSummary {
    pub gross_revenue: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}
