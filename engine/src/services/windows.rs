//! Crop-stage window calculator
//!
//! Maps days-since-seeding to the agronomic window the crop is in and the
//! action to take. Day offsets are computed against the farm's fixed
//! agricultural day, never the caller's system timezone, so a record seeded
//! "May 12" means the same thing from any machine.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use shared::SeedingRecord;

/// Calendar context for day-boundary math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmCalendar {
    offset: FixedOffset,
}

impl FarmCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The prairie agricultural day: CST year-round (Saskatchewan keeps no
    /// daylight saving)
    pub fn prairie() -> Self {
        Self {
            offset: FixedOffset::west_opt(6 * 3600).expect("static UTC-6 offset"),
        }
    }

    /// Calendar date of an instant on this farm's clock
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

impl Default for FarmCalendar {
    fn default() -> Self {
        Self::prairie()
    }
}

/// Whole days elapsed since seeding; negative before the seeding date
pub fn days_since_seeding(today: NaiveDate, seeded: NaiveDate) -> i64 {
    (today - seeded).num_days()
}

/// A crop-stage window with its advisory text
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropStageWindow {
    pub label: &'static str,
    pub color_class: &'static str,
    pub urgent: bool,
    pub advisory: &'static str,
}

struct StageRule {
    last_day: i64,
    window: CropStageWindow,
}

// Ordered; first rule whose span covers the day wins.
const STAGE_TABLE: &[StageRule] = &[
    StageRule {
        last_day: 7,
        window: CropStageWindow {
            label: "Pre-Seed / Just Seeded",
            color_class: "amber",
            urgent: false,
            advisory: "Pre-seed burnoff window. Apply glyphosate 1-3 days before seeding. Add Group 14 partner for resistance management.",
        },
    },
    StageRule {
        last_day: 21,
        window: CropStageWindow {
            label: "Early Scout Window",
            color_class: "blue",
            urgent: true,
            advisory: "Scout for cutworms and flea beetles. Check for uneven emergence. Pre-emergence soil herbicide window closing soon.",
        },
    },
    StageRule {
        last_day: 42,
        window: CropStageWindow {
            label: "In-Crop Spray Window",
            color_class: "green",
            urgent: true,
            advisory: "In-crop herbicide window is open. Scout weed pressure before spraying. Apply at 1-4 leaf stage for best results.",
        },
    },
    StageRule {
        last_day: 70,
        window: CropStageWindow {
            label: "Fungicide Window",
            color_class: "purple",
            urgent: true,
            advisory: "Fungicide timing window. Cereals: apply at flag leaf to heading. Canola: apply at 20-50% bloom for sclerotinia. Timing is critical — do not miss this window.",
        },
    },
    StageRule {
        last_day: 100,
        window: CropStageWindow {
            label: "Pre-Harvest Window",
            color_class: "orange",
            urgent: true,
            advisory: "Pre-harvest approaching. Check crop maturity. Canola: 60%+ seed colour change. Wheat: <30% grain moisture. Confirm PHI and buyer requirements before applying.",
        },
    },
    StageRule {
        last_day: 120,
        window: CropStageWindow {
            label: "Harvest Approaching",
            color_class: "red",
            urgent: true,
            advisory: "Crop approaching harvest maturity. Prepare equipment, arrange trucking, confirm bin space and elevator delivery windows.",
        },
    },
];

/// The window covering a day offset, or `None` before seeding and after the
/// final window closes. Exactly one window covers any in-range day.
pub fn stage_for_day(days: i64) -> Option<&'static CropStageWindow> {
    if days < 0 {
        return None;
    }
    STAGE_TABLE
        .iter()
        .find(|rule| days <= rule.last_day)
        .map(|rule| &rule.window)
}

/// Day count and active window for one seeding record
pub fn window_for_record(
    record: &SeedingRecord,
    today: NaiveDate,
) -> Option<(i64, &'static CropStageWindow)> {
    let days = days_since_seeding(today, record.seeding_date);
    stage_for_day(days).map(|window| (days, window))
}

/// An urgent window attached to its seeding record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeedingReminder {
    pub record: SeedingRecord,
    pub day: i64,
    pub window: &'static CropStageWindow,
}

/// Urgent reminders for the overview feed, in seeding-log order.
///
/// The just-seeded window is informational and not surfaced here.
pub fn active_reminders(log: &[SeedingRecord], today: NaiveDate) -> Vec<SeedingReminder> {
    log.iter()
        .filter_map(|record| {
            window_for_record(record, today)
                .filter(|(_, window)| window.urgent)
                .map(|(day, window)| SeedingReminder {
                    record: record.clone(),
                    day,
                    window,
                })
        })
        .collect()
}
