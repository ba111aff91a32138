//! Tests for the crop economics calculator
//! Covers the cost identities, division guards, and profitability rules

use agronomy_engine::reference::InputCostBaseline;
use agronomy_engine::services::economics::{
    classify_profitability, evaluate, farm_summary, rank_zone_economics, Profitability,
};
use rust_decimal::Decimal;
use shared::{CostLineItem, InventoryMode, PriceUnit, Province, SoilZone, UnitPrice};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// A 100-acre canola forecast with typical prairie costs
fn forecast_item() -> CostLineItem {
    CostLineItem {
        crop: "Canola".to_string(),
        mode: InventoryMode::Forecast,
        acres: dec("100"),
        aph: dec("40"),
        target_price: dec("13.00"),
        seed: dec("35"),
        fertilizer: dec("89"),
        herbicide: dec("55"),
        land_rent: dec("80"),
        equipment_depreciation: dec("55"),
        ..Default::default()
    }
}

// =============================================================================
// Forecast-Mode Economics
// =============================================================================

mod forecast_economics {
    use super::*;

    #[test]
    fn forecast_scenario_derives_all_figures() {
        let econ = evaluate(&forecast_item());

        assert_eq!(econ.bushels, dec("4000"));
        assert_eq!(econ.acres, dec("100"));
        assert_eq!(econ.fixed_per_acre, dec("135"));
        assert_eq!(econ.variable_per_acre, dec("179"));
        assert_eq!(econ.total_cost_per_acre, dec("314"));
        assert_eq!(econ.total_cost, dec("31400"));
        assert_eq!(econ.gross_revenue, dec("52000"));
        assert_eq!(econ.net_profit, dec("20600"));
        assert_eq!(econ.breakeven_price, dec("7.85"));
        assert!(econ.breakeven_price > Decimal::ZERO);
    }

    #[test]
    fn cost_identities_hold() {
        let econ = evaluate(&forecast_item());
        assert_eq!(
            econ.total_cost_per_acre,
            econ.fixed_per_acre + econ.variable_per_acre
        );
        assert_eq!(econ.net_profit, econ.gross_revenue - econ.total_cost);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let item = forecast_item();
        assert_eq!(evaluate(&item), evaluate(&item));
    }
}

// =============================================================================
// Division Guards and Input Coercion
// =============================================================================

mod zero_guards {
    use super::*;

    #[test]
    fn zero_acres_gives_zero_breakeven() {
        let item = CostLineItem {
            acres: Decimal::ZERO,
            ..forecast_item()
        };
        let econ = evaluate(&item);
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
        assert_eq!(econ.bushels, Decimal::ZERO);
        assert_eq!(econ.total_cost, Decimal::ZERO);
    }

    #[test]
    fn zero_yield_gives_zero_breakeven() {
        let item = CostLineItem {
            aph: Decimal::ZERO,
            ..forecast_item()
        };
        let econ = evaluate(&item);
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
        assert_eq!(econ.bushels, Decimal::ZERO);
        assert_eq!(econ.gross_revenue, Decimal::ZERO);
    }

    #[test]
    fn negative_entries_coerce_to_zero() {
        let item = CostLineItem {
            seed: dec("-35"),
            land_rent: dec("-80"),
            ..forecast_item()
        };
        let econ = evaluate(&item);
        // The nonsense entries drop out; the rest still count
        assert_eq!(econ.variable_per_acre, dec("144"));
        assert_eq!(econ.fixed_per_acre, dec("55"));
    }

    #[test]
    fn negative_acres_coerce_to_zero() {
        let item = CostLineItem {
            acres: dec("-100"),
            ..forecast_item()
        };
        let econ = evaluate(&item);
        assert_eq!(econ.bushels, Decimal::ZERO);
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
    }

    #[test]
    fn empty_item_is_all_zeros() {
        let econ = evaluate(&CostLineItem::default());
        assert_eq!(econ.gross_revenue, Decimal::ZERO);
        assert_eq!(econ.total_cost, Decimal::ZERO);
        assert_eq!(econ.net_profit, Decimal::ZERO);
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
    }
}

// =============================================================================
// On-Hand Mode
// =============================================================================

mod on_hand_economics {
    use super::*;

    #[test]
    fn on_hand_counts_the_bin() {
        let item = CostLineItem {
            crop: "HRS Wheat".to_string(),
            mode: InventoryMode::OnHand,
            bushels_on_hand: dec("48000"),
            target_price: dec("7.76"),
            // Per-acre cost fields are ignored without acres
            land_rent: dec("80"),
            seed: dec("35"),
            ..Default::default()
        };
        let econ = evaluate(&item);
        assert_eq!(econ.bushels, dec("48000"));
        assert_eq!(econ.acres, Decimal::ZERO);
        assert_eq!(econ.gross_revenue, dec("372480"));
        assert_eq!(econ.total_cost, Decimal::ZERO);
        assert_eq!(econ.net_profit, econ.gross_revenue);
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
    }

    #[test]
    fn on_hand_ignores_forecast_fields() {
        let item = CostLineItem {
            mode: InventoryMode::OnHand,
            bushels_on_hand: dec("1000"),
            acres: dec("500"),
            aph: dec("50"),
            target_price: dec("10"),
            ..Default::default()
        };
        assert_eq!(evaluate(&item).bushels, dec("1000"));
    }
}

// =============================================================================
// Farm Summary
// =============================================================================

mod farm_totals {
    use super::*;

    #[test]
    fn summary_sums_across_crops() {
        let wheat = CostLineItem {
            crop: "HRS Wheat".to_string(),
            mode: InventoryMode::Forecast,
            acres: dec("200"),
            aph: dec("60"),
            target_price: dec("8.00"),
            seed: dec("30"),
            land_rent: dec("70"),
            ..Default::default()
        };
        let summary = farm_summary(&[forecast_item(), wheat.clone()]);

        let canola = evaluate(&forecast_item());
        let wheat_econ = evaluate(&wheat);
        assert_eq!(
            summary.gross_revenue,
            canola.gross_revenue + wheat_econ.gross_revenue
        );
        assert_eq!(summary.total_cost, canola.total_cost + wheat_econ.total_cost);
        assert_eq!(
            summary.net_profit,
            summary.gross_revenue - summary.total_cost
        );
    }

    #[test]
    fn empty_inventory_is_all_zeros() {
        let summary = farm_summary(&[]);
        assert_eq!(summary.gross_revenue, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert_eq!(summary.net_profit, Decimal::ZERO);
    }
}

// =============================================================================
// Profile Store Wire Shape
// =============================================================================

mod wire_shape {
    use super::*;

    #[test]
    fn sparse_json_defaults_missing_fields_to_zero() {
        // Farmer profiles arrive with only the fields that were filled in
        let item: CostLineItem = serde_json::from_str(
            r#"{
                "crop": "Canola",
                "mode": "forecast",
                "acres": 100,
                "aph": 40,
                "target_price": 13.00
            }"#,
        )
        .unwrap();

        assert_eq!(item.seed, Decimal::ZERO);
        assert_eq!(item.land_rent, Decimal::ZERO);

        let econ = evaluate(&item);
        assert_eq!(econ.bushels, dec("4000"));
        assert_eq!(econ.gross_revenue, dec("52000"));
        assert_eq!(econ.breakeven_price, Decimal::ZERO);
    }
}

// =============================================================================
// Zone-Level Breakeven Analysis
// =============================================================================

mod zone_analysis {
    use super::*;

    #[test]
    fn default_baseline_totals() {
        let baseline = InputCostBaseline::prairie_default();
        assert_eq!(baseline.variable_total(), dec("362"));
        assert_eq!(baseline.fixed_total(), dec("162"));
        assert_eq!(baseline.total(), dec("524"));
    }

    #[test]
    fn canola_leads_sk_black_zone() {
        let analysis = rank_zone_economics(
            Province::Saskatchewan,
            SoilZone::Black,
            &InputCostBaseline::prairie_default(),
        );
        assert_eq!(analysis.total_cost_per_acre, dec("524"));

        let best = analysis.best().unwrap();
        assert_eq!(best.crop, "Canola");
        assert_eq!(best.gross_revenue_per_acre, dec("600"));
        assert_eq!(best.net_margin_per_acre, dec("76"));
        assert_eq!(best.profitability, Profitability::Profitable);
    }

    #[test]
    fn rankings_are_sorted_by_gross_revenue() {
        let analysis = rank_zone_economics(
            Province::Saskatchewan,
            SoilZone::Black,
            &InputCostBaseline::prairie_default(),
        );
        for pair in analysis.rankings.windows(2) {
            assert!(pair[0].gross_revenue_per_acre >= pair[1].gross_revenue_per_acre);
        }
        assert_eq!(
            analysis.profitable_count + analysis.at_risk_count,
            analysis.rankings.len()
        );
    }

    #[test]
    fn per_bushel_crops_classify_on_price_comparison() {
        let analysis = rank_zone_economics(
            Province::Saskatchewan,
            SoilZone::Black,
            &InputCostBaseline::prairie_default(),
        );
        // HRS Wheat in the Black zone: $7.62 guide against a $8.06 breakeven
        let wheat = analysis
            .rankings
            .iter()
            .find(|r| r.crop == "HRS Wheat")
            .unwrap();
        assert_eq!(wheat.breakeven_price.amount, dec("8.06"));
        assert_eq!(wheat.profitability, Profitability::AtRisk);
    }

    #[test]
    fn per_pound_crops_classify_on_margin() {
        let analysis = rank_zone_economics(
            Province::Saskatchewan,
            SoilZone::Black,
            &InputCostBaseline::prairie_default(),
        );
        // Yellow Mustard falls back to its Brown row: $380/ac gross against
        // $524/ac baseline costs, so it is at risk on margin alone
        let mustard = analysis
            .rankings
            .iter()
            .find(|r| r.crop == "Yellow Mustard")
            .unwrap();
        assert_eq!(mustard.guide_price.unit, PriceUnit::CadPerPound);
        assert_eq!(mustard.net_margin_per_acre, dec("-144"));
        assert_eq!(mustard.profitability, Profitability::AtRisk);
    }

    #[test]
    fn per_pound_negative_margin_is_at_risk_regardless_of_price() {
        // Guide price far above the numeric breakeven, but margin is negative
        let guide = UnitPrice::new(dec("0.38"), PriceUnit::CadPerPound);
        let breakeven = UnitPrice::new(dec("0.10"), PriceUnit::CadPerPound);
        assert_eq!(
            classify_profitability(&guide, &breakeven, dec("-1")),
            Profitability::AtRisk
        );
        assert_eq!(
            classify_profitability(&guide, &breakeven, Decimal::ZERO),
            Profitability::Profitable
        );
    }

    #[test]
    fn per_bushel_price_edge_is_at_risk() {
        // Guide price exactly at breakeven does not clear it
        let guide = UnitPrice::new(dec("8.00"), PriceUnit::CadPerBushel);
        let breakeven = UnitPrice::new(dec("8.00"), PriceUnit::CadPerBushel);
        assert_eq!(
            classify_profitability(&guide, &breakeven, dec("100")),
            Profitability::AtRisk
        );
    }
}

// =============================================================================
// Calculator Properties
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn money() -> impl Strategy<Value = Decimal> {
        (0i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn cost_identities_hold_for_all_inputs(
            seed in money(),
            fertilizer in money(),
            herbicide in money(),
            land_rent in money(),
            depreciation in money(),
            acres in 0i64..=10_000,
            aph in 0i64..=300,
            price in money(),
        ) {
            let item = CostLineItem {
                crop: "Test".to_string(),
                mode: InventoryMode::Forecast,
                acres: Decimal::from(acres),
                aph: Decimal::from(aph),
                target_price: price,
                seed,
                fertilizer,
                herbicide,
                land_rent,
                equipment_depreciation: depreciation,
                ..Default::default()
            };
            let econ = evaluate(&item);
            prop_assert_eq!(
                econ.total_cost_per_acre,
                econ.fixed_per_acre + econ.variable_per_acre
            );
            prop_assert_eq!(econ.net_profit, econ.gross_revenue - econ.total_cost);
            prop_assert_eq!(econ.clone(), evaluate(&item));
        }

        #[test]
        fn breakeven_is_zero_without_acres_or_yield(
            costs in money(),
            acres in 0i64..=10_000,
        ) {
            let item = CostLineItem {
                crop: "Test".to_string(),
                mode: InventoryMode::Forecast,
                acres: Decimal::from(acres),
                aph: Decimal::ZERO,
                seed: costs,
                ..Default::default()
            };
            prop_assert_eq!(evaluate(&item).breakeven_price, Decimal::ZERO);
        }
    }
}
