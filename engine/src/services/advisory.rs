//! Advisory context formatting
//!
//! The advisory chat service prepends plain-text context blocks to its
//! prompt. The engine formats those blocks from its own outputs and knows
//! nothing about the chat protocol; callers get strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{FarmProfile, SeedingRecord};

use crate::services::economics::{evaluate, farm_summary};
use crate::services::windows::{days_since_seeding, stage_for_day};

/// Seeding-log context block: what is in the ground and which window each
/// crop is in. `None` when the log is empty.
pub fn seeding_context(log: &[SeedingRecord], today: NaiveDate) -> Option<String> {
    if log.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(log.len());
    for record in log {
        let days = days_since_seeding(today, record.seeding_date);
        let status = match stage_for_day(days) {
            Some(window) => window.label,
            None if days < 0 => "Planning stage",
            None => "Season windows closed",
        };

        let mut line = format!("  - {}", record.crop);
        if !record.field_name.is_empty() {
            line.push_str(&format!(" ({})", record.field_name));
        }
        if record.acres > Decimal::ZERO {
            line.push_str(&format!(" · {} ac", record.acres));
        }
        line.push_str(&format!(
            " · Seeded {} · Day {} · STATUS: {}",
            record.seeding_date.format("%b %-d"),
            days,
            status
        ));
        lines.push(line);
    }

    Some(format!(
        "ACTIVE SEEDED CROPS — WHAT IS IN THE GROUND RIGHT NOW:\n{}\n\n\
         Reference these crops and their current spray or scouting windows in \
         your advice. If a window is open, say what to do now.",
        lines.join("\n")
    ))
}

/// Farm economics context block: per-crop breakeven and margin plus farm
/// totals. `None` when the profile has no crop inventory.
pub fn economics_context(profile: &FarmProfile) -> Option<String> {
    if profile.inventory.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(profile.inventory.len());
    for item in &profile.inventory {
        let econ = evaluate(item);
        let crop = if item.crop.trim().is_empty() {
            "Unnamed crop"
        } else {
            item.crop.as_str()
        };
        lines.push(format!(
            "  - {}: breakeven ${}/bu · gross revenue {} · net profit {}",
            crop,
            econ.breakeven_price.round_dp(2),
            format_cad(econ.gross_revenue),
            format_cad(econ.net_profit)
        ));
    }

    let totals = farm_summary(&profile.inventory);
    Some(format!(
        "FARM ECONOMICS — {} ({} · {} zone):\n{}\n\n\
         TOTALS: gross revenue {} · total cost {} · net profit {}",
        profile.farm_name,
        profile.province,
        profile.soil_zone,
        lines.join("\n"),
        format_cad(totals.gross_revenue),
        format_cad(totals.total_cost),
        format_cad(totals.net_profit)
    ))
}

/// Whole-dollar CAD display with thousands separators
pub fn format_cad(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
