//! Crop reference table
//!
//! One entry per crop with per-zone yield, price, fertility, and breakeven
//! rows plus scouting and rotation notes. Figures come from the Alberta
//! Cropping Alternatives 2025 (AgriProfit$) and Saskatchewan Crop Planning
//! Guide 2026 tables; Manitoba uses the shared prairie rows.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use shared::{
    CropReference, PriceUnit, Province, SoilZone, TargetYield, UnitPrice, YieldUnit, ZoneEconomics,
};

use shared::CropCategory::{Cereal, Oilseed, Pulse};
use shared::Province::{Alberta as AB, Manitoba as MB, Saskatchewan as SK};
use shared::SoilZone::{Black, Brown, DarkBrown, GreyWooded, Irrigated, Peace};

/// Yield in bushels per acre
fn bu(amount: i64) -> TargetYield {
    TargetYield::new(Decimal::from(amount), YieldUnit::BushelsPerAcre)
}

/// Yield in pounds per acre
fn lb(amount: i64) -> TargetYield {
    TargetYield::new(Decimal::from(amount), YieldUnit::PoundsPerAcre)
}

/// Price in cents per bushel
fn per_bu(cents: i64) -> UnitPrice {
    UnitPrice::new(Decimal::new(cents, 2), PriceUnit::CadPerBushel)
}

/// Price in cents per pound
fn per_lb(cents: i64) -> UnitPrice {
    UnitPrice::new(Decimal::new(cents, 2), PriceUnit::CadPerPound)
}

#[allow(clippy::too_many_arguments)]
fn zone_row(
    target_yield: TargetYield,
    guide_price: UnitPrice,
    gross_revenue: i64,
    n: u32,
    p: u32,
    s: u32,
    k: u32,
    breakeven_yield: TargetYield,
    breakeven_price: UnitPrice,
) -> ZoneEconomics {
    ZoneEconomics {
        target_yield,
        guide_price,
        gross_revenue_per_acre: Decimal::from(gross_revenue),
        nitrogen_lb_per_acre: n,
        phosphorus_lb_per_acre: p,
        sulphur_lb_per_acre: s,
        potassium_lb_per_acre: k,
        breakeven_yield,
        breakeven_price,
    }
}

static CROPS: OnceLock<Vec<CropReference>> = OnceLock::new();

/// All crops in the reference table
pub fn crops() -> &'static [CropReference] {
    CROPS.get_or_init(build_crops)
}

/// Look up a crop by name (case-insensitive)
pub fn crop(name: &str) -> Option<&'static CropReference> {
    crops().iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// Crops with reference coverage in a province
pub fn crops_for_province(province: Province) -> impl Iterator<Item = &'static CropReference> {
    crops().iter().filter(move |c| c.grows_in(province))
}

/// Zone row for a crop, substituting the crop's first defined zone when the
/// requested zone has no coverage.
///
/// The substitution keeps provinces without a given zone usable, at the cost
/// of showing a neighbouring zone's figures; callers that need exact
/// coverage should use [`CropReference::zone_data_strict`].
pub fn zone_data(crop: &CropReference, zone: SoilZone) -> Option<&ZoneEconomics> {
    if let Some(data) = crop.zone_data_strict(zone) {
        return Some(data);
    }
    match crop.first_zone() {
        Some((fallback, data)) => {
            tracing::debug!(
                crop = crop.name,
                requested = %zone,
                fallback = %fallback,
                "no zone row for crop, substituting first defined zone"
            );
            Some(data)
        }
        None => None,
    }
}

fn build_crops() -> Vec<CropReference> {
    vec![
        CropReference {
            name: "HRS Wheat",
            category: Cereal,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(40), per_bu(776), 310, 50, 20, 0, 5, bu(57), per_bu(1103))),
                (DarkBrown, zone_row(bu(44), per_bu(776), 341, 60, 25, 0, 5, bu(56), per_bu(979))),
                (Black, zone_row(bu(65), per_bu(762), 495, 80, 30, 0, 10, bu(82), per_bu(951))),
                (GreyWooded, zone_row(bu(58), per_bu(762), 442, 80, 25, 0, 10, bu(75), per_bu(980))),
                (Peace, zone_row(bu(56), per_bu(762), 427, 70, 25, 0, 5, bu(68), per_bu(922))),
                (Irrigated, zone_row(bu(96), per_bu(776), 745, 100, 40, 0, 5, bu(129), per_bu(1042))),
            ],
            rotation_notes: "Break cereals to decompose residue. Avoid back-to-back wheat.",
            insects: &[
                "Wheat midge",
                "Cutworms",
                "Aphids",
                "Grasshoppers",
                "Armyworms",
                "Sawfly",
                "Wireworms",
            ],
            diseases: &["FHB", "Leaf spot", "Stripe rust", "Leaf rust", "Stem rust"],
            disease_notes: "Fungicide at FHB timing (early anthesis). Additional leaf disease spray if high pressure.",
            weed_notes: "Many herbicide options. Layering pre-seed burnoff + in-crop recommended.",
            spray_timings: "Pre-harv, Pre-seed, Soil, In-crop",
            source: "AB Cropping Alt 2025; SK CPG 2026",
        },
        CropReference {
            name: "CPS Wheat",
            category: Cereal,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(42), per_bu(735), 309, 50, 20, 0, 5, bu(60), per_bu(1038))),
                (Black, zone_row(bu(72), per_bu(735), 529, 80, 30, 0, 10, bu(86), per_bu(870))),
                (GreyWooded, zone_row(bu(70), per_bu(735), 515, 80, 25, 0, 10, bu(78), per_bu(814))),
                (Peace, zone_row(bu(65), per_bu(735), 478, 70, 25, 0, 5, bu(71), per_bu(803))),
            ],
            rotation_notes: "Break cereals. Diverse rotations preferred.",
            insects: &["Wheat midge", "Cutworms", "Aphids", "Grasshoppers"],
            diseases: &["FHB", "Leaf diseases"],
            disease_notes: "Single fungicide included at heading.",
            weed_notes: "Many herbicide options available.",
            spray_timings: "Pre-seed, In-crop",
            source: "AB Cropping Alt 2025",
        },
        CropReference {
            name: "Durum Wheat",
            category: Cereal,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(42), per_bu(871), 366, 50, 20, 0, 5, bu(52), per_bu(1062))),
                (DarkBrown, zone_row(bu(41), per_bu(871), 357, 60, 25, 0, 5, bu(51), per_bu(1072))),
            ],
            rotation_notes: "Midge tolerant varieties recommended. Avoid back-to-back durum.",
            insects: &["Wheat midge", "Cutworms", "Aphids", "Grasshoppers", "Sawfly"],
            diseases: &["FHB", "Leaf diseases"],
            disease_notes: "Single fungicide. Midge tolerant blends available.",
            weed_notes: "Fewer soil-applied options than CWRS.",
            spray_timings: "Pre-harv, Pre-seed, In-crop",
            source: "AB Cropping Alt 2025; SK CPG 2026",
        },
        CropReference {
            name: "Feed Barley",
            category: Cereal,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(52), per_bu(556), 289, 60, 25, 0, 5, bu(72), per_bu(767))),
                (DarkBrown, zone_row(bu(63), per_bu(556), 350, 70, 25, 0, 5, bu(73), per_bu(641))),
                (Black, zone_row(bu(85), per_bu(556), 473, 80, 30, 0, 10, bu(101), per_bu(657))),
                (GreyWooded, zone_row(bu(78), per_bu(556), 434, 80, 30, 0, 10, bu(95), per_bu(672))),
                (Peace, zone_row(bu(76), per_bu(556), 423, 70, 25, 0, 5, bu(87), per_bu(633))),
            ],
            rotation_notes: "Competitive crop — suppresses weeds naturally.",
            insects: &["Cutworms", "Aphids", "Thrips", "Grasshoppers", "Armyworm", "Wireworms"],
            diseases: &["FHB", "Net blotch", "Spot blotch"],
            disease_notes: "Fungicide based on field history and disease pressure.",
            weed_notes: "Competitive crop — can reduce herbicide applications.",
            spray_timings: "Pre-harv, Pre-seed, In-crop",
            source: "AB Cropping Alt 2025; SK CPG 2026",
        },
        CropReference {
            name: "Malt Barley",
            category: Cereal,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(53), per_bu(590), 313, 50, 30, 10, 10, bu(75), per_bu(829))),
                (DarkBrown, zone_row(bu(63), per_bu(590), 372, 60, 30, 10, 15, bu(77), per_bu(720))),
                (Black, zone_row(bu(83), per_bu(590), 490, 70, 30, 10, 20, bu(107), per_bu(758))),
            ],
            rotation_notes: "Diverse rotations. Competitive crop.",
            insects: &["Cutworms", "Aphids", "Thrips", "Grasshoppers", "Armyworm"],
            diseases: &["FHB", "Leaf diseases"],
            disease_notes: "Single fungicide included. Secure malt contract before seeding.",
            weed_notes: "Soil-applied for Group 1 resistant wild oats.",
            spray_timings: "Pre-harv, Pre-seed, Soil, In-crop",
            source: "AB Cropping Alt 2025",
        },
        CropReference {
            name: "Milling Oats",
            category: Cereal,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(58), per_bu(465), 270, 50, 20, 0, 0, bu(85), per_bu(680))),
                (DarkBrown, zone_row(bu(75), per_bu(465), 349, 55, 20, 0, 0, bu(83), per_bu(513))),
                (Black, zone_row(bu(98), per_bu(465), 456, 70, 30, 0, 0, bu(123), per_bu(580))),
                (GreyWooded, zone_row(bu(94), per_bu(465), 437, 75, 25, 0, 0, bu(114), per_bu(564))),
                (Peace, zone_row(bu(99), per_bu(465), 460, 65, 20, 0, 0, bu(105), per_bu(491))),
            ],
            rotation_notes: "Very competitive — suppresses weeds. Good break crop.",
            insects: &["Cutworms", "Aphids", "Grasshoppers", "Armyworm"],
            diseases: &["Crown rust", "Leaf diseases"],
            disease_notes: "Some milling buyers prohibit pre-harvest glyphosate — check contract.",
            weed_notes: "Wild oats CANNOT be controlled in tame oats. Plan rotation accordingly.",
            spray_timings: "Pre-harv, Pre-seed, In-crop",
            source: "AB Cropping Alt 2025",
        },
        CropReference {
            name: "Canola",
            category: Oilseed,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(30), per_bu(1304), 391, 65, 25, 10, 10, bu(39), per_bu(1669))),
                (DarkBrown, zone_row(bu(35), per_bu(1304), 456, 75, 30, 15, 10, bu(40), per_bu(1481))),
                (Black, zone_row(bu(46), per_bu(1304), 600, 100, 40, 20, 15, bu(53), per_bu(1478))),
                (GreyWooded, zone_row(bu(44), per_bu(1304), 574, 100, 40, 20, 25, bu(52), per_bu(1536))),
                (Peace, zone_row(bu(40), per_bu(1304), 522, 85, 30, 15, 20, bu(47), per_bu(1504))),
                (Irrigated, zone_row(bu(58), per_bu(1304), 756, 110, 50, 20, 5, bu(81), per_bu(1800))),
            ],
            rotation_notes: "3-4 year rotation minimum. Critical for clubroot and blackleg management.",
            insects: &[
                "Flea beetles",
                "Cutworms",
                "Lygus bugs",
                "Seedpod weevil",
                "Diamondback moth",
                "Bertha armyworm",
                "Grasshoppers",
            ],
            diseases: &["Sclerotinia", "Blackleg", "Alternaria", "Clubroot"],
            disease_notes: "Fungicide for sclerotinia at 20-50% bloom based on disease risk checklist.",
            weed_notes: "HT system dependent. Soil-active products for cleavers control.",
            spray_timings: "Pre-harv, Pre-seed, Soil, In-crop ×2, Desiccation",
            source: "AB Cropping Alt 2025; SK CPG 2026",
        },
        CropReference {
            name: "Field Peas",
            category: Pulse,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(45), per_bu(898), 404, 5, 20, 0, 10, bu(50), per_bu(980))),
                (DarkBrown, zone_row(bu(48), per_bu(898), 431, 5, 20, 0, 10, bu(50), per_bu(924))),
                (Black, zone_row(bu(56), per_bu(898), 503, 5, 30, 0, 15, bu(71), per_bu(1132))),
                (GreyWooded, zone_row(bu(50), per_bu(898), 449, 5, 25, 0, 15, bu(65), per_bu(1156))),
                (Peace, zone_row(bu(50), per_bu(898), 449, 5, 20, 0, 15, bu(58), per_bu(1028))),
            ],
            rotation_notes: "Extended rotations critical for aphanomyces root rot management.",
            insects: &[
                "Wireworms",
                "Cutworms",
                "Lygus bugs",
                "Pea aphid",
                "Grasshoppers",
                "Pea leaf weevil",
            ],
            diseases: &["Mycosphaerella", "Ascochyta", "Aphanomyces root rot", "White mould"],
            disease_notes: "Single fungicide for mycosphaerella. Apply based on disease risk at flowering.",
            weed_notes: "Control weeds 10-14 days after emergence. Limited in-crop options.",
            spray_timings: "Pre-harv, Pre-seed, Soil, In-crop, Desiccation",
            source: "AB Cropping Alt 2025; SK CPG 2026",
        },
        CropReference {
            name: "Red Lentils",
            category: Pulse,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(28), per_lb(30), 336, 5, 20, 0, 10, bu(33), per_lb(37))),
                (DarkBrown, zone_row(bu(30), per_lb(30), 360, 5, 20, 0, 10, bu(33), per_lb(34))),
            ],
            rotation_notes: "Avoid lentil-on-lentil. Minimum 3-year rotation.",
            insects: &["Cutworms", "Lygus bugs", "Pea aphid", "Grasshoppers"],
            diseases: &["Ascochyta", "Stemphylium", "Botrytis grey mould", "Sclerotinia"],
            disease_notes: "Fungicide based on ascochyta risk. Two applications may be needed in high pressure years.",
            weed_notes: "Very limited herbicide options. Clean fields critical. Pre-seed burnoff essential.",
            spray_timings: "Pre-seed, In-crop, Desiccation",
            source: "SK CPG 2026",
        },
        CropReference {
            name: "Small Red Lentils",
            category: Pulse,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(25), per_lb(28), 308, 5, 20, 0, 10, bu(31), per_lb(35))),
                (DarkBrown, zone_row(bu(28), per_lb(28), 338, 5, 20, 0, 10, bu(32), per_lb(32))),
            ],
            rotation_notes: "Minimum 3-year rotation. Avoid lentil-on-lentil.",
            insects: &["Cutworms", "Lygus bugs", "Pea aphid", "Grasshoppers"],
            diseases: &["Ascochyta", "Stemphylium", "Botrytis grey mould", "Sclerotinia"],
            disease_notes: "Fungicide based on ascochyta risk. Two applications may be needed in high pressure years.",
            weed_notes: "Very limited herbicide options. Clean fields critical. Pre-seed burnoff essential.",
            spray_timings: "Pre-seed, In-crop, Desiccation",
            source: "SK CPG 2026",
        },
        CropReference {
            name: "Large Green Lentils",
            category: Pulse,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(26), per_lb(32), 358, 5, 20, 0, 10, bu(30), per_lb(36))),
                (DarkBrown, zone_row(bu(30), per_lb(32), 413, 5, 20, 0, 10, bu(32), per_lb(33))),
                (Black, zone_row(bu(32), per_lb(32), 440, 5, 25, 0, 10, bu(36), per_lb(33))),
            ],
            rotation_notes: "Minimum 3-year rotation. Susceptible to same diseases as red lentils.",
            insects: &["Cutworms", "Lygus bugs", "Pea aphid", "Grasshoppers"],
            diseases: &["Ascochyta", "Stemphylium", "Botrytis grey mould", "Sclerotinia"],
            disease_notes: "Similar disease package to red lentils. Fungicide timing critical at early flower.",
            weed_notes: "Very limited herbicide options. Pre-seed burnoff and clean seedbed essential.",
            spray_timings: "Pre-seed, In-crop, Desiccation",
            source: "SK CPG 2026",
        },
        CropReference {
            name: "Yellow Peas",
            category: Pulse,
            provinces: &[SK, MB, AB],
            zones: vec![
                (Brown, zone_row(bu(42), per_bu(850), 357, 5, 20, 0, 10, bu(48), per_bu(960))),
                (DarkBrown, zone_row(bu(46), per_bu(850), 391, 5, 20, 0, 10, bu(48), per_bu(890))),
                (Black, zone_row(bu(54), per_bu(850), 459, 5, 30, 0, 15, bu(68), per_bu(1090))),
                (Peace, zone_row(bu(48), per_bu(850), 408, 5, 20, 0, 15, bu(56), per_bu(990))),
            ],
            rotation_notes: "Extended rotations for aphanomyces. Same rotation considerations as field peas.",
            insects: &[
                "Wireworms",
                "Cutworms",
                "Lygus bugs",
                "Pea aphid",
                "Grasshoppers",
                "Pea leaf weevil",
            ],
            diseases: &["Mycosphaerella", "Ascochyta", "Aphanomyces root rot", "White mould"],
            disease_notes: "Same disease management as field peas. Fungicide at early flower for mycosphaerella.",
            weed_notes: "Control weeds 10-14 days after emergence. Limited in-crop options.",
            spray_timings: "Pre-harv, Pre-seed, Soil, In-crop, Desiccation",
            source: "SK CPG 2026; AB Cropping Alt 2025",
        },
        CropReference {
            name: "Chickpeas",
            category: Pulse,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(28), per_lb(38), 570, 5, 20, 0, 10, bu(30), per_lb(40))),
                (DarkBrown, zone_row(bu(30), per_lb(38), 611, 5, 20, 0, 10, bu(31), per_lb(38))),
            ],
            rotation_notes: "4+ year rotation. Sensitive to wet conditions and heavy soils.",
            insects: &["Cutworms", "Lygus bugs", "Grasshoppers"],
            diseases: &["Ascochyta", "Botrytis grey mould", "Sclerotinia"],
            disease_notes: "Fungicide critical for ascochyta. Multiple applications often needed in wet years.",
            weed_notes: "Very limited herbicide options. Weed-free seedbed essential.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026; AB Cropping Alt 2025",
        },
        CropReference {
            name: "Flax",
            category: Oilseed,
            provinces: &[SK, MB, AB],
            zones: vec![
                (DarkBrown, zone_row(bu(22), per_bu(1550), 341, 50, 20, 10, 5, bu(26), per_bu(1800))),
                (Black, zone_row(bu(28), per_bu(1550), 434, 60, 25, 10, 5, bu(31), per_bu(1646))),
            ],
            rotation_notes: "Avoid flax-on-flax. 4+ year rotation for aster yellows management.",
            insects: &["Cutworms", "Grasshoppers", "Aphids", "Flea beetles"],
            diseases: &["Pasmo", "Aster yellows", "Powdery mildew"],
            disease_notes: "No consistent fungicide recommendation. Monitor for pasmo.",
            weed_notes: "Very limited herbicide options. Few Group 1 options registered.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026",
        },
        CropReference {
            name: "Yellow Mustard",
            category: Oilseed,
            provinces: &[SK, AB],
            zones: vec![
                (Brown, zone_row(bu(22), per_lb(38), 380, 50, 20, 10, 5, bu(26), per_lb(44))),
                (DarkBrown, zone_row(bu(25), per_lb(38), 432, 55, 20, 10, 5, bu(28), per_lb(41))),
            ],
            rotation_notes: "Avoid brassica-on-brassica. Minimum 3-year break.",
            insects: &["Flea beetles", "Cutworms", "Diamondback moth", "Lygus bugs"],
            diseases: &["Sclerotinia", "Alternaria", "White rust"],
            disease_notes: "Fungicide for sclerotinia at flowering if risk conditions met.",
            weed_notes: "Fewer herbicide options than canola. Pre-seed burnoff critical.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026; AB Cropping Alt 2025",
        },
        CropReference {
            name: "Faba Beans",
            category: Pulse,
            provinces: &[SK],
            zones: vec![(
                Black,
                zone_row(bu(55), per_bu(950), 523, 5, 30, 0, 20, bu(65), per_bu(1109)),
            )],
            rotation_notes: "Excellent nitrogen fixer. 4+ year rotation.",
            insects: &["Cutworms", "Pea aphid", "Lygus bugs"],
            diseases: &["Ascochyta", "Botrytis", "Sclerotinia"],
            disease_notes: "Fungicide at flowering for botrytis/sclerotinia based on risk.",
            weed_notes: "Limited herbicide options. Competitive at canopy closure.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026",
        },
        CropReference {
            name: "Soybeans",
            category: Pulse,
            provinces: &[MB],
            zones: vec![(
                Black,
                zone_row(bu(35), per_bu(1300), 455, 5, 30, 0, 20, bu(42), per_bu(1529)),
            )],
            rotation_notes: "Inoculant critical. 3+ year rotation.",
            insects: &["Soybean aphid", "Cutworms", "Grasshoppers"],
            diseases: &["Sclerotinia", "Phytophthora root rot", "White mould"],
            disease_notes: "Fungicide based on sclerotinia pressure at R1-R3 growth stage.",
            weed_notes: "Roundup Ready system standard. Pre-emerge options available.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026 (shared prairie data)",
        },
        CropReference {
            name: "Sunflower",
            category: Oilseed,
            provinces: &[MB],
            zones: vec![(
                Black,
                zone_row(lb(1400), per_lb(22), 308, 80, 35, 0, 20, lb(1600), per_lb(26)),
            )],
            rotation_notes: "4+ year rotation. Avoid fields with volunteer sunflower issues.",
            insects: &["Sunflower beetle", "Cutworms", "Lygus bugs", "Sunflower moth"],
            diseases: &["Sclerotinia", "Downy mildew", "Verticillium"],
            disease_notes: "Fungicide for sclerotinia at R3-R5. Downy mildew seed treatment critical.",
            weed_notes: "Limited in-crop options. Pre-emerge soil-applied products key.",
            spray_timings: "Pre-seed, In-crop",
            source: "SK CPG 2026 (shared prairie data)",
        },
        CropReference {
            name: "Dry Beans",
            category: Pulse,
            provinces: &[AB],
            zones: vec![(
                Irrigated,
                zone_row(lb(2200), per_lb(40), 880, 5, 30, 0, 15, lb(2500), per_lb(46)),
            )],
            rotation_notes: "3-4 year rotation. Irrigation management critical.",
            insects: &["Mexican bean beetle", "Cutworms", "Lygus bugs"],
            diseases: &["White mould", "Anthracnose", "Common bacterial blight"],
            disease_notes: "Fungicide for white mould at flowering. Multiple passes may be needed.",
            weed_notes: "Limited options. Inter-row cultivation used in some systems.",
            spray_timings: "Pre-seed, In-crop",
            source: "AB Cropping Alt 2025",
        },
    ]
}
