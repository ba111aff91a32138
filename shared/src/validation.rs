//! Validation utilities for the Prairie Farm Management Platform
//!
//! Profile and seeding data is farmer-entered and expected to be sparse or
//! incomplete, so the calculators coerce rather than reject; the validators
//! here exist for the profile-edit surfaces that want to tell the operator
//! what is wrong.

use rust_decimal::Decimal;

use crate::models::{CostLineItem, SeedingRecord};
use crate::types::{Province, SoilZone};

/// Coerce a farmer-entered amount into calculator-safe territory.
///
/// Negative entries become zero. Decimal arithmetic has no NaN or infinity,
/// so this is the whole sanitation rule.
pub fn sanitize_amount(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Validate that a soil zone has reference coverage in a province
pub fn validate_zone_for_province(province: Province, zone: SoilZone) -> Result<(), &'static str> {
    if province.zones().contains(&zone) {
        Ok(())
    } else {
        Err("Soil zone has no reference coverage in this province")
    }
}

/// Validate a cost line item before saving it to the profile
pub fn validate_cost_line_item(item: &CostLineItem) -> Result<(), &'static str> {
    if item.crop.trim().is_empty() {
        return Err("Crop name is required");
    }
    if item.acres < Decimal::ZERO {
        return Err("Acres cannot be negative");
    }
    if item.aph < Decimal::ZERO {
        return Err("APH cannot be negative");
    }
    if item.bushels_on_hand < Decimal::ZERO {
        return Err("Bushels on hand cannot be negative");
    }
    if item.target_price < Decimal::ZERO {
        return Err("Target price cannot be negative");
    }
    Ok(())
}

/// Validate a seeding log entry
pub fn validate_seeding_record(record: &SeedingRecord) -> Result<(), &'static str> {
    if record.crop.trim().is_empty() {
        return Err("Crop name is required");
    }
    if record.acres < Decimal::ZERO {
        return Err("Acres cannot be negative");
    }
    Ok(())
}

/// Validate total acres on the farm profile
pub fn validate_total_acres(acres: Decimal) -> Result<(), &'static str> {
    if acres < Decimal::ZERO {
        return Err("Total acres cannot be negative");
    }
    Ok(())
}
