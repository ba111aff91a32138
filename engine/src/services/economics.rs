//! Crop and farm economics calculations
//!
//! Everything here is a pure function of its inputs. Derived economics are
//! recomputed on every call and never cached, so a profile edit can never
//! leave a stale breakeven on screen.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    sanitize_amount, CostLineItem, CropCategory, CropEconomics, FarmSummary, InventoryMode,
    PriceUnit, Province, SoilZone, TargetYield, UnitPrice, YieldUnit,
};

use crate::reference::{crops_for_province, zone_data, InputCostBaseline};

/// Derive the economics for one cost line item.
///
/// On-hand mode counts the bin and carries no per-acre cost basis; forecast
/// mode projects acres at the entered APH. Zero acres or zero yield give a
/// zero breakeven rather than a division error.
pub fn evaluate(item: &CostLineItem) -> CropEconomics {
    let acres = match item.mode {
        InventoryMode::OnHand => Decimal::ZERO,
        InventoryMode::Forecast => sanitize_amount(item.acres),
    };
    let aph = sanitize_amount(item.aph);
    let bushels = match item.mode {
        InventoryMode::OnHand => sanitize_amount(item.bushels_on_hand),
        InventoryMode::Forecast => acres * aph,
    };

    let fixed_per_acre = item.fixed_per_acre();
    let variable_per_acre = item.variable_per_acre();
    let total_cost_per_acre = fixed_per_acre + variable_per_acre;
    let total_cost = total_cost_per_acre * acres;

    let gross_revenue = bushels * sanitize_amount(item.target_price);
    let net_profit = gross_revenue - total_cost;

    let breakeven_price = if acres > Decimal::ZERO && aph > Decimal::ZERO {
        total_cost_per_acre / aph
    } else {
        Decimal::ZERO
    };

    CropEconomics {
        bushels,
        acres,
        fixed_per_acre,
        variable_per_acre,
        total_cost_per_acre,
        total_cost,
        gross_revenue,
        net_profit,
        breakeven_price,
    }
}

/// Whole-farm totals across the crop inventory
pub fn farm_summary(inventory: &[CostLineItem]) -> FarmSummary {
    let mut gross_revenue = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;
    for item in inventory {
        let econ = evaluate(item);
        gross_revenue += econ.gross_revenue;
        total_cost += econ.total_cost;
    }
    FarmSummary {
        gross_revenue,
        total_cost,
        net_profit: gross_revenue - total_cost,
    }
}

/// Profitability at guide price vs. the cost baseline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Profitability {
    Profitable,
    AtRisk,
}

impl std::fmt::Display for Profitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profitability::Profitable => write!(f, "Profitable"),
            Profitability::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// One crop's zone-level economics at a cost baseline
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ZoneCropEconomics {
    pub crop: &'static str,
    pub category: CropCategory,
    pub target_yield: TargetYield,
    pub guide_price: UnitPrice,
    /// Baseline cost divided by target yield, in the yield's unit
    pub breakeven_price: UnitPrice,
    pub gross_revenue_per_acre: Decimal,
    pub net_margin_per_acre: Decimal,
    pub profitability: Profitability,
}

/// Zone-level crop comparison for a province
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ZoneAnalysis {
    pub province: Province,
    pub zone: SoilZone,
    pub total_cost_per_acre: Decimal,
    /// Crops ranked by gross revenue per acre, best first
    pub rankings: Vec<ZoneCropEconomics>,
    pub profitable_count: usize,
    pub at_risk_count: usize,
}

impl ZoneAnalysis {
    /// Top crop by gross revenue, if the province has any coverage
    pub fn best(&self) -> Option<&ZoneCropEconomics> {
        self.rankings.first()
    }
}

/// Classify a crop at guide price against a breakeven and margin.
///
/// Per-pound crops are quoted against a bushel yield in the guide tables,
/// so the price comparison is unit-mismatched there; they classify on net
/// margin instead.
pub fn classify_profitability(
    guide_price: &UnitPrice,
    breakeven_price: &UnitPrice,
    net_margin: Decimal,
) -> Profitability {
    let profitable = match guide_price.unit {
        PriceUnit::CadPerPound => net_margin >= Decimal::ZERO,
        PriceUnit::CadPerBushel => guide_price.amount > breakeven_price.amount,
    };
    if profitable {
        Profitability::Profitable
    } else {
        Profitability::AtRisk
    }
}

/// Rank every crop grown in a province for one soil zone at a cost baseline.
///
/// Zone rows fall back to each crop's first defined zone, matching the
/// reference lookup rule.
pub fn rank_zone_economics(
    province: Province,
    zone: SoilZone,
    baseline: &InputCostBaseline,
) -> ZoneAnalysis {
    let total_cost_per_acre = baseline.total();

    let mut rankings: Vec<ZoneCropEconomics> = crops_for_province(province)
        .filter_map(|crop| {
            let data = zone_data(crop, zone)?;
            let yield_amount = data.target_yield.amount;
            let breakeven_amount = if yield_amount > Decimal::ZERO {
                (total_cost_per_acre / yield_amount).round_dp(2)
            } else {
                Decimal::ZERO
            };
            let breakeven_unit = match data.target_yield.unit {
                YieldUnit::BushelsPerAcre => PriceUnit::CadPerBushel,
                YieldUnit::PoundsPerAcre => PriceUnit::CadPerPound,
            };
            let breakeven_price = UnitPrice::new(breakeven_amount, breakeven_unit);
            let net_margin_per_acre = data.gross_revenue_per_acre - total_cost_per_acre;
            let profitability =
                classify_profitability(&data.guide_price, &breakeven_price, net_margin_per_acre);

            Some(ZoneCropEconomics {
                crop: crop.name,
                category: crop.category,
                target_yield: data.target_yield,
                guide_price: data.guide_price,
                breakeven_price,
                gross_revenue_per_acre: data.gross_revenue_per_acre,
                net_margin_per_acre,
                profitability,
            })
        })
        .collect();

    rankings.sort_by(|a, b| b.gross_revenue_per_acre.cmp(&a.gross_revenue_per_acre));

    let profitable_count = rankings
        .iter()
        .filter(|r| r.profitability == Profitability::Profitable)
        .count();
    let at_risk_count = rankings.len() - profitable_count;

    ZoneAnalysis {
        province,
        zone,
        total_cost_per_acre,
        rankings,
        profitable_count,
        at_risk_count,
    }
}
