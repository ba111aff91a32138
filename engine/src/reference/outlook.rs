//! Commodity outlook table
//!
//! Long-range price context per crop, joined by crop name. Advisory text
//! only; nothing here feeds the calculators.

/// Outlook direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlookDirection {
    Up,
    Flat,
    Trending,
}

impl OutlookDirection {
    /// Arrow glyph used by the dashboards
    pub fn arrow(&self) -> &'static str {
        match self {
            OutlookDirection::Up => "↑",
            OutlookDirection::Flat => "↔",
            OutlookDirection::Trending => "↗",
        }
    }
}

/// Five-year outlook for a commodity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommodityOutlook {
    pub crop: &'static str,
    pub range_10yr: &'static str,
    pub forecast_5yr: &'static str,
    pub rating: &'static str,
    pub direction: OutlookDirection,
}

/// Outlook rows for the major prairie commodities
pub const COMMODITY_OUTLOOK: &[CommodityOutlook] = &[
    CommodityOutlook {
        crop: "HRS Wheat",
        range_10yr: "$5.50-$14.50/bu",
        forecast_5yr: "$7.00-$9.50 — global demand steady",
        rating: "Stable",
        direction: OutlookDirection::Flat,
    },
    CommodityOutlook {
        crop: "Canola",
        range_10yr: "$8.50-$22.00/bu",
        forecast_5yr: "$13.00-$17.00 — crush capacity expanding",
        rating: "Strong",
        direction: OutlookDirection::Up,
    },
    CommodityOutlook {
        crop: "Durum Wheat",
        range_10yr: "$6.00-$16.00/bu",
        forecast_5yr: "$8.00-$11.00 — niche demand steady",
        rating: "Mod-Strong",
        direction: OutlookDirection::Trending,
    },
    CommodityOutlook {
        crop: "Field Peas",
        range_10yr: "$6.00-$16.00/bu",
        forecast_5yr: "$8.50-$12.00 — plant protein demand growing",
        rating: "Strong",
        direction: OutlookDirection::Up,
    },
    CommodityOutlook {
        crop: "Red Lentils",
        range_10yr: "$0.15-$0.55/lb",
        forecast_5yr: "$0.25-$0.40 — India import policies volatile",
        rating: "Moderate",
        direction: OutlookDirection::Trending,
    },
    CommodityOutlook {
        crop: "Feed Barley",
        range_10yr: "$3.50-$9.00/bu",
        forecast_5yr: "$5.00-$6.50 — feedlot demand steady",
        rating: "Stable",
        direction: OutlookDirection::Flat,
    },
    CommodityOutlook {
        crop: "Malt Barley",
        range_10yr: "$4.00-$9.50/bu",
        forecast_5yr: "$5.50-$7.50 — craft brewing steady",
        rating: "Mod-Strong",
        direction: OutlookDirection::Trending,
    },
    CommodityOutlook {
        crop: "Flax",
        range_10yr: "$9.00-$24.00/bu",
        forecast_5yr: "$13.00-$18.00 — health food demand growing",
        rating: "Moderate",
        direction: OutlookDirection::Trending,
    },
    CommodityOutlook {
        crop: "Milling Oats",
        range_10yr: "$2.50-$8.00/bu",
        forecast_5yr: "$4.00-$5.50 — food use growing",
        rating: "Moderate",
        direction: OutlookDirection::Trending,
    },
    CommodityOutlook {
        crop: "Yellow Mustard",
        range_10yr: "$0.20-$0.65/lb",
        forecast_5yr: "$0.35-$0.50 — condiment demand steady",
        rating: "Stable",
        direction: OutlookDirection::Flat,
    },
];

/// Outlook row for a crop, if one exists
pub fn outlook_for(crop_name: &str) -> Option<&'static CommodityOutlook> {
    COMMODITY_OUTLOOK.iter().find(|o| o.crop == crop_name)
}
