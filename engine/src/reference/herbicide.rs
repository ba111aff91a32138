//! The five-pass prairie herbicide timing program

/// One pass in the standard prairie spray program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HerbicidePass {
    pub pass: u8,
    pub label: &'static str,
    pub timing: &'static str,
    pub products: &'static str,
    pub target_weeds: &'static str,
    pub crops: &'static str,
    pub notes: &'static str,
}

/// The 5-pass program, in application order
pub const HERBICIDE_PASSES: &[HerbicidePass] = &[
    HerbicidePass {
        pass: 1,
        label: "Pre-Seed Burnoff",
        timing: "1-3 days before seeding",
        products: "Glyphosate 360 + Aim EC / Heat LQ",
        target_weeds: "All emerged grassy & broadleaf weeds, volunteer crops",
        crops: "All crops",
        notes: "Critical first pass. Sets the stage for the whole season. Add Group 14 partner for resistance management.",
    },
    HerbicidePass {
        pass: 2,
        label: "Pre-Emergence (Soil)",
        timing: "After seeding, before crop emergence",
        products: "Authority (Grp 14), Edge/Fortress (Grp 8/15), Eptam/Avadex (Grp 15), Zidua SC (Grp 15)",
        target_weeds: "Wild oats, green foxtail, cleavers, kochia, volunteer canola",
        crops: "Cereals, Canola, Pulses (varies by crop)",
        notes: "Soil moisture required for activation. Check label for crop safety. Excellent for Group 1 resistant wild oats.",
    },
    HerbicidePass {
        pass: 3,
        label: "In-Crop Pass 1",
        timing: "1-4 leaf crop stage",
        products: "Assure/Axial (Grp 1), Simplicity (Grp 1+2), Buctril M (Grp 6+4), MCPA (Grp 4), Infinity (Grp 6+4)",
        target_weeds: "Emerged broadleaf and grassy weeds",
        crops: "Cereals, Canola (HT specific)",
        notes: "Timing is critical — apply before weeds compete. Scout first. Match product to weed spectrum.",
    },
    HerbicidePass {
        pass: 4,
        label: "In-Crop Fungicide",
        timing: "Flag leaf / early flower",
        products: "Prosaro/Caramba (Grp 3/7), Proline (Grp 3), Lance (Grp 7), Priaxor (Grp 7+11)",
        target_weeds: "FHB, sclerotinia, leaf diseases",
        crops: "Cereals at heading, Canola at 20-50% bloom, Pulses at flower",
        notes: "Timing is everything — missing the window costs more than the product. Use disease risk tools (FHB Risk Map, canola sclerotinia checklist).",
    },
    HerbicidePass {
        pass: 5,
        label: "Pre-Harvest",
        timing: "Crop maturity — check crop-specific thresholds",
        products: "Glyphosate 360 (Grp 9), Reglone/Diquat (Grp 22), Aim EC (Grp 14)",
        target_weeds: "Desiccation, green weed control, crop dry-down",
        crops: "Wheat, Barley, Canola, Peas, Lentils",
        notes: "Always confirm PHI for your crop and buyer. Some milling oat buyers prohibit glyphosate. Check contract terms.",
    },
];
