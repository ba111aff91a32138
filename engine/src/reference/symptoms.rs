//! Symptom tables for the scouting diagnostic
//!
//! Each observable symptom maps to the pests or diseases that commonly
//! cause it. Candidate names are matched against a crop's own pest lists by
//! the fuzzy name rule, so spelling variants between tables are tolerated.

use shared::DamageType;

/// One observable symptom and its candidate causes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomEntry {
    pub label: &'static str,
    pub candidates: &'static [&'static str],
}

/// Insect damage symptoms
pub const INSECT_SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        label: "Holes / Defoliation",
        candidates: &[
            "Flea Beetles",
            "Bertha Armyworm",
            "Grasshoppers",
            "Diamondback Moth",
            "Cutworms",
        ],
    },
    SymptomEntry {
        label: "Wilting / Lodging",
        candidates: &["Cutworms", "Wireworms"],
    },
    SymptomEntry {
        label: "Stunted Growth",
        candidates: &["Wireworms", "Cutworms", "Aphids", "Pea aphid"],
    },
    SymptomEntry {
        label: "Pod / Head Damage",
        candidates: &[
            "Cabbage Seedpod Weevil",
            "Lygus bugs",
            "Wheat Midge",
            "Bertha Armyworm",
        ],
    },
    SymptomEntry {
        label: "Stem Damage",
        candidates: &["Cutworms", "Sawfly"],
    },
    SymptomEntry {
        label: "Leaf Curling / Sticky Residue",
        candidates: &["Aphids", "Pea aphid"],
    },
    SymptomEntry {
        label: "Root Damage",
        candidates: &["Wireworms", "Cutworms"],
    },
    SymptomEntry {
        label: "General Feeding Damage",
        candidates: &["Grasshoppers", "Armyworms"],
    },
];

/// Disease symptoms
pub const DISEASE_SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        label: "Yellowing / Chlorosis",
        candidates: &["Leaf Diseases (Cereals)", "Ascochyta / Mycosphaerella"],
    },
    SymptomEntry {
        label: "Lesions / Spots on Leaves",
        candidates: &[
            "FHB (Fusarium Head Blight)",
            "Leaf Diseases (Cereals)",
            "Ascochyta / Mycosphaerella",
        ],
    },
    SymptomEntry {
        label: "White / Grey Mould on Stem",
        candidates: &["Sclerotinia Stem Rot"],
    },
    SymptomEntry {
        label: "Blackened / Rotted Stem Base",
        candidates: &["Sclerotinia Stem Rot", "Ascochyta / Mycosphaerella"],
    },
    SymptomEntry {
        label: "Head / Spike Discolouration",
        candidates: &["FHB (Fusarium Head Blight)"],
    },
    SymptomEntry {
        label: "Root Rot / Damping Off",
        candidates: &["Ascochyta / Mycosphaerella"],
    },
    SymptomEntry {
        label: "Premature Ripening",
        candidates: &["Sclerotinia Stem Rot", "FHB (Fusarium Head Blight)"],
    },
    SymptomEntry {
        label: "Powdery Coating on Leaves",
        candidates: &["Leaf Diseases (Cereals)"],
    },
];

/// Symptom table for a damage category
pub fn symptoms_for(damage: DamageType) -> &'static [SymptomEntry] {
    match damage {
        DamageType::Insect => INSECT_SYMPTOMS,
        DamageType::Disease => DISEASE_SYMPTOMS,
    }
}
