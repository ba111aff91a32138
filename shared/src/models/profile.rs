//! Farm profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CostLineItem;
use crate::types::{Province, SoilZone};

/// Marketing risk posture selected by the operator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

/// The operator's farm profile as supplied by the profile store.
///
/// The engine reads this; it never writes it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmProfile {
    pub farm_name: String,
    pub province: Province,
    pub soil_zone: SoilZone,
    #[serde(default)]
    pub total_acres: Decimal,
    #[serde(default)]
    pub storage_capacity_bu: Decimal,
    #[serde(default)]
    pub primary_elevator: String,
    #[serde(default)]
    pub risk_profile: RiskProfile,
    #[serde(default)]
    pub inventory: Vec<CostLineItem>,
}
