//! Spray rate table
//!
//! Registered products, rates, and mode-of-action groups per pest, from the
//! SK/AB Guide to Crop Protection 2025 charts. Rates here are the guide's
//! published figures; the label remains the final authority.

use shared::{SprayProduct, SprayRecommendation};

/// All spray recommendations, in guide order
pub const SPRAY_RATES: &[SprayRecommendation] = &[
    SprayRecommendation {
        pest: "Cutworms",
        crops: "All crops",
        products: &[
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Apply evening when cutworms are active. 25-30% plant damage = threshold.",
            },
            SprayProduct {
                name: "Decis 100 EC",
                rate: "20-30 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Ground or aerial. Check for cutworm presence before applying.",
            },
            SprayProduct {
                name: "Lorsban 4E (chlorpyrifos)",
                rate: "580-1160 mL/ac",
                moa_group: "1B (OP)",
                notes: "Soil drench for below-ground species. Check provincial registration.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Cutworm Charts",
    },
    SprayRecommendation {
        pest: "Grasshoppers",
        crops: "All crops",
        products: &[
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "8-12 hoppers/m² at field edge = threshold. Treat borders first.",
            },
            SprayProduct {
                name: "Malathion 85E",
                rate: "405-544 mL/ac",
                moa_group: "1B (OP)",
                notes: "Ground or aerial. Short residual — monitor for re-entry.",
            },
            SprayProduct {
                name: "Carbamalt (carbaryl)",
                rate: "Per label",
                moa_group: "1A (Carbamate)",
                notes: "Bait formulation available for rangeland use.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025",
    },
    SprayRecommendation {
        pest: "Wheat Midge",
        crops: "Wheat, Durum",
        products: &[
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Apply warm evening at heading. 1 midge per 4-5 heads = threshold.",
            },
            SprayProduct {
                name: "Decis 100 EC",
                rate: "20-30 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Ground or aerial at heading. Midge tolerant varieties reduce need.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Cereal Insect Charts",
    },
    SprayRecommendation {
        pest: "Flea Beetles",
        crops: "Canola, Mustard",
        products: &[
            SprayProduct {
                name: "Decis 100 EC",
                rate: "20-30 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Apply when >25% defoliation at cotyledon to 2-leaf stage.",
            },
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Ground only. Do not graze treated areas.",
            },
            SprayProduct {
                name: "Malathion 85E",
                rate: "405-544 mL/ac",
                moa_group: "1B (OP)",
                notes: "Ground or aerial application.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Canola Insect Charts",
    },
    SprayRecommendation {
        pest: "Bertha Armyworm",
        crops: "Canola",
        products: &[
            SprayProduct {
                name: "Coragen MaX",
                rate: "34-51 mL/ac",
                moa_group: "28 (Diamide)",
                notes: "0 day PHI. Best choice for resistance management.",
            },
            SprayProduct {
                name: "Decis 100 EC",
                rate: "20-30 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "~20 larvae/m² threshold.",
            },
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Ground only.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Canola Insect Charts",
    },
    SprayRecommendation {
        pest: "Cabbage Seedpod Weevil",
        crops: "Canola",
        products: &[
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "3-4 weevils per 10 sweeps at early flower = threshold. Spray field edges first.",
            },
            SprayProduct {
                name: "Decis 100 EC",
                rate: "20-30 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "Ground or aerial at early flower.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Canola Insect Charts",
    },
    SprayRecommendation {
        pest: "Diamondback Moth",
        crops: "Canola, Mustard",
        products: &[
            SprayProduct {
                name: "Coragen MaX",
                rate: "34-51 mL/ac",
                moa_group: "28 (Diamide)",
                notes: "100-150 larvae/m² pre-flower threshold.",
            },
            SprayProduct {
                name: "Matador/Silencer 120EC",
                rate: "34 mL/ac",
                moa_group: "3A (Pyrethroid)",
                notes: "DBM resistance to pyrethroids is common — check local efficacy data.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025",
    },
    SprayRecommendation {
        pest: "FHB (Fusarium Head Blight)",
        crops: "Wheat, Barley, Durum",
        products: &[
            SprayProduct {
                name: "Prosaro PRO",
                rate: "324 mL/ac",
                moa_group: "3+7",
                notes: "Apply at early anthesis (Zadoks 60-65). Best FHB product available.",
            },
            SprayProduct {
                name: "Proline 480SC",
                rate: "162 mL/ac",
                moa_group: "3 (Triazole)",
                notes: "At anthesis. Apply within 2 days of flowering.",
            },
            SprayProduct {
                name: "Caramba",
                rate: "405 mL/ac",
                moa_group: "3 (Triazole)",
                notes: "At anthesis.",
            },
            SprayProduct {
                name: "Miravis Ace",
                rate: "405 mL/ac",
                moa_group: "3+7",
                notes: "At anthesis. Broad spectrum disease control.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Foliar Fungicide Tables 3-4",
    },
    SprayRecommendation {
        pest: "Sclerotinia Stem Rot",
        crops: "Canola",
        products: &[
            SprayProduct {
                name: "Proline 480SC",
                rate: "162 mL/ac",
                moa_group: "3 (Triazole)",
                notes: "20-50% bloom. Apply based on sclerotinia risk checklist.",
            },
            SprayProduct {
                name: "Lance WDG",
                rate: "112 g/ac",
                moa_group: "7 (SDHI)",
                notes: "20-50% bloom.",
            },
            SprayProduct {
                name: "Cotegra",
                rate: "202-304 mL/ac",
                moa_group: "7+3",
                notes: "20-50% bloom. Dual mode of action.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Foliar Fungicide Table 7",
    },
    SprayRecommendation {
        pest: "Ascochyta / Mycosphaerella",
        crops: "Peas, Lentils, Chickpeas",
        products: &[
            SprayProduct {
                name: "Priaxor",
                rate: "121-162 mL/ac",
                moa_group: "7+11",
                notes: "Apply at early flower or before expected rain event.",
            },
            SprayProduct {
                name: "Headline EC",
                rate: "162 mL/ac",
                moa_group: "11 (Strobilurin)",
                notes: "Preventative at early flower.",
            },
            SprayProduct {
                name: "Bravo/Echo (chlorothalonil)",
                rate: "0.5-1.0 L/ac",
                moa_group: "M5",
                notes: "Low resistance risk. Good tank mix partner.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Foliar Fungicide Table 6",
    },
    SprayRecommendation {
        pest: "Leaf Diseases (Cereals)",
        crops: "Wheat, Barley, Oats",
        products: &[
            SprayProduct {
                name: "Tilt 250E / Propiconazole",
                rate: "202 mL/ac",
                moa_group: "3 (Triazole)",
                notes: "Flag leaf to heading. Low cost option.",
            },
            SprayProduct {
                name: "Stratego PRO",
                rate: "243 mL/ac",
                moa_group: "3+11",
                notes: "Flag leaf timing.",
            },
            SprayProduct {
                name: "Nexicor",
                rate: "304 mL/ac",
                moa_group: "3+7+11",
                notes: "Broad spectrum. Flag to heading.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Foliar Fungicide Tables 3-4",
    },
    SprayRecommendation {
        pest: "Pre-Seed Burnoff",
        crops: "All crops",
        products: &[
            SprayProduct {
                name: "Glyphosate 360",
                rate: "0.5-1.0 L/ac (acid equiv.)",
                moa_group: "9",
                notes: "1-3 days before seeding. 20-40 L/ac water volume.",
            },
            SprayProduct {
                name: "Aim EC (carfentrazone)",
                rate: "15-47 mL/ac",
                moa_group: "14 (PPO)",
                notes: "Tank mix with glyphosate for resistance management. Add surfactant.",
            },
            SprayProduct {
                name: "Heat LQ (saflufenacil)",
                rate: "14.4 mL/ac",
                moa_group: "14 (PPO)",
                notes: "Tank mix with glyphosate. Excellent kochia control.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Herbicide Section",
    },
    SprayRecommendation {
        pest: "Desiccation / Pre-Harvest",
        crops: "Wheat, Barley, Canola, Peas, Lentils",
        products: &[
            SprayProduct {
                name: "Glyphosate 360",
                rate: "0.67-1.0 L/ac",
                moa_group: "9",
                notes: "Wheat: <30% grain moisture. Canola: 60%+ seed color change. Always check PHI.",
            },
            SprayProduct {
                name: "Reglone / Diquat",
                rate: "0.34-0.45 L/ac",
                moa_group: "22 (Contact)",
                notes: "Canola, pulses. Contact desiccant — good spray coverage critical.",
            },
            SprayProduct {
                name: "Aim EC",
                rate: "30-47 mL/ac",
                moa_group: "14",
                notes: "Harvest aid for cereals, pulses. Add surfactant.",
            },
        ],
        source: "SK/AB Guide to Crop Protection 2025, Herbicide Section",
    },
];
