//! Tests for the guided pest and disease diagnostic

use agronomy_engine::error::EngineError;
use agronomy_engine::reference::{crop, DISEASE_SYMPTOMS, INSECT_SYMPTOMS};
use agronomy_engine::services::diagnostics::{
    spray_recommendations, DiagnosticOutcome, DiagnosticSession, ADVISOR_FALLBACK,
};
use agronomy_engine::services::matching::names_match;
use shared::DamageType;

// =============================================================================
// Guided Flow
// =============================================================================

mod guided_flow {
    use super::*;

    #[test]
    fn canola_defoliation_narrows_to_symptom_candidates() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        session.select_symptom("Holes / Defoliation").unwrap();

        let candidates = session.candidate_pests();
        assert!(!candidates.is_empty());
        assert!(candidates.contains(&"Flea beetles"));

        // Every candidate comes from canola's own insect list
        let canola = crop("Canola").unwrap();
        for pest in &candidates {
            assert!(canola.insects.contains(pest));
        }

        // And every candidate fits the symptom's candidate set
        let symptom = INSECT_SYMPTOMS
            .iter()
            .find(|s| s.label == "Holes / Defoliation")
            .unwrap();
        for pest in &candidates {
            assert!(symptom.candidates.iter().any(|c| names_match(pest, c)));
        }

        // Pod feeders are not defoliation candidates
        assert!(!candidates.contains(&"Seedpod weevil"));
        assert!(!candidates.contains(&"Lygus bugs"));
    }

    #[test]
    fn full_flow_resolves_to_products() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        session.select_symptom("Holes / Defoliation").unwrap();
        session.select_pest("Flea beetles").unwrap();

        match session.resolve().unwrap() {
            DiagnosticOutcome::Recommendations(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].pest, "Flea Beetles");
                assert!(entries[0].products.iter().any(|p| p.name == "Decis 100 EC"));
            }
            other => panic!("expected recommendations, got {other:?}"),
        }
    }

    #[test]
    fn disease_flow_reaches_fungicide_charts() {
        let mut session = DiagnosticSession::new();
        session.select_crop("HRS Wheat").unwrap();
        session.select_damage_type(DamageType::Disease).unwrap();
        session
            .select_symptom("Head / Spike Discolouration")
            .unwrap();

        let candidates = session.candidate_pests();
        assert_eq!(candidates, vec!["FHB"]);

        session.select_pest("FHB").unwrap();
        match session.resolve().unwrap() {
            DiagnosticOutcome::Recommendations(entries) => {
                assert_eq!(entries[0].pest, "FHB (Fusarium Head Blight)");
                assert!(entries[0].products.iter().any(|p| p.name == "Prosaro PRO"));
            }
            other => panic!("expected recommendations, got {other:?}"),
        }
    }

    #[test]
    fn candidates_without_symptom_are_the_full_crop_list() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        assert_eq!(
            session.candidate_pests(),
            crop("Canola").unwrap().insects.to_vec()
        );
    }

    #[test]
    fn no_spray_data_is_an_explicit_no_match() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Field Peas").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        session
            .select_symptom("Leaf Curling / Sticky Residue")
            .unwrap();

        let candidates = session.candidate_pests();
        assert_eq!(candidates, vec!["Pea aphid"]);

        // The spray charts have no aphid entry, so the session hands off
        session.select_pest("Pea aphid").unwrap();
        assert_eq!(
            session.resolve().unwrap(),
            DiagnosticOutcome::NoMatch {
                pest: "Pea aphid".to_string()
            }
        );
        assert!(ADVISOR_FALLBACK.contains("advisor"));
    }

    #[test]
    fn resolve_is_none_before_pest_selection() {
        let mut session = DiagnosticSession::new();
        assert!(session.resolve().is_none());
        session.select_crop("Canola").unwrap();
        assert!(session.resolve().is_none());
    }
}

// =============================================================================
// Stage Ordering and Resets
// =============================================================================

mod stage_ordering {
    use super::*;

    #[test]
    fn selections_must_run_in_order() {
        let mut session = DiagnosticSession::new();
        assert!(matches!(
            session.select_damage_type(DamageType::Insect),
            Err(EngineError::SelectionOrder(_))
        ));
        assert!(matches!(
            session.select_symptom("Holes / Defoliation"),
            Err(EngineError::SelectionOrder(_))
        ));
        assert!(matches!(
            session.select_pest("Cutworms"),
            Err(EngineError::SelectionOrder(_))
        ));
    }

    #[test]
    fn upstream_selection_resets_downstream() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        session.select_symptom("Holes / Defoliation").unwrap();
        session.select_pest("Flea beetles").unwrap();

        // Changing the crop clears everything downstream
        session.select_crop("HRS Wheat").unwrap();
        assert!(session.damage_type().is_none());
        assert!(session.symptom().is_none());
        assert!(session.pest().is_none());
        assert!(session.resolve().is_none());

        // Changing the damage type clears symptom and pest
        session.select_damage_type(DamageType::Insect).unwrap();
        session.select_symptom("Stem Damage").unwrap();
        session.select_pest("Sawfly").unwrap();
        session.select_damage_type(DamageType::Disease).unwrap();
        assert!(session.symptom().is_none());
        assert!(session.pest().is_none());
    }

    #[test]
    fn reset_clears_the_whole_session() {
        let mut session = DiagnosticSession::new();
        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        session.reset();
        assert!(session.crop().is_none());
        assert!(session.damage_type().is_none());
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut session = DiagnosticSession::new();
        assert_eq!(
            session.select_crop("Quinoa"),
            Err(EngineError::UnknownCrop("Quinoa".to_string()))
        );

        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        assert_eq!(
            session.select_symptom("Glowing Leaves"),
            Err(EngineError::UnknownSymptom("Glowing Leaves".to_string()))
        );
    }
}

// =============================================================================
// Symptom Tables
// =============================================================================

mod symptom_tables {
    use super::*;

    #[test]
    fn each_damage_type_has_its_own_symptoms() {
        let mut session = DiagnosticSession::new();
        assert!(session.symptoms().is_empty());

        session.select_crop("Canola").unwrap();
        session.select_damage_type(DamageType::Insect).unwrap();
        assert_eq!(session.symptoms().len(), INSECT_SYMPTOMS.len());

        session.select_damage_type(DamageType::Disease).unwrap();
        assert_eq!(session.symptoms().len(), DISEASE_SYMPTOMS.len());
    }

    #[test]
    fn symptom_candidates_are_nonempty() {
        for entry in INSECT_SYMPTOMS.iter().chain(DISEASE_SYMPTOMS.iter()) {
            assert!(
                !entry.candidates.is_empty(),
                "symptom {} has no candidates",
                entry.label
            );
        }
    }
}

// =============================================================================
// Spray Chart Lookup
// =============================================================================

mod spray_lookup {
    use super::*;

    #[test]
    fn lookup_tolerates_naming_variants() {
        // Crop tables say "Sclerotinia"; the chart title is longer
        let entries = spray_recommendations("Sclerotinia");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pest, "Sclerotinia Stem Rot");

        let entries = spray_recommendations("fhb");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pest, "FHB (Fusarium Head Blight)");
    }

    #[test]
    fn lookup_misses_return_empty() {
        assert!(spray_recommendations("Sawfly").is_empty());
        assert!(spray_recommendations("").is_empty());
    }
}
