//! Guided pest and disease diagnostic
//!
//! Four sequential selection stages: crop, damage type, symptom, pest.
//! Changing any upstream selection clears everything downstream, so the
//! session can never show a pest that no longer fits the crop. The terminal
//! state is either a product list or an explicit no-match handoff to the
//! farm advisor; an empty list never surfaces silently.

use shared::{CropReference, DamageType, SprayRecommendation};

use crate::error::{EngineError, EngineResult};
use crate::reference::{crop, symptoms_for, SymptomEntry, SPRAY_RATES};
use crate::services::matching::names_match;

/// Handoff text when the spray charts have nothing for a pest
pub const ADVISOR_FALLBACK: &str =
    "No registered product data found for this pest. Ask the farm advisor for guidance.";

/// Terminal state of a diagnostic session
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticOutcome {
    Recommendations(Vec<&'static SprayRecommendation>),
    /// Nothing matched in the spray charts; direct the operator to the advisor
    NoMatch { pest: String },
}

/// One operator's walk through the diagnostic tree.
///
/// Stateless with respect to everything but the four selections; no I/O.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSession {
    crop: Option<&'static CropReference>,
    damage_type: Option<DamageType>,
    symptom: Option<&'static SymptomEntry>,
    pest: Option<String>,
}

impl DiagnosticSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crop(&self) -> Option<&'static CropReference> {
        self.crop
    }

    pub fn damage_type(&self) -> Option<DamageType> {
        self.damage_type
    }

    pub fn symptom(&self) -> Option<&'static SymptomEntry> {
        self.symptom
    }

    pub fn pest(&self) -> Option<&str> {
        self.pest.as_deref()
    }

    /// Stage 1: pick the crop. Clears all downstream selections.
    pub fn select_crop(&mut self, name: &str) -> EngineResult<()> {
        let selected = crop(name).ok_or_else(|| EngineError::UnknownCrop(name.to_string()))?;
        self.crop = Some(selected);
        self.damage_type = None;
        self.symptom = None;
        self.pest = None;
        Ok(())
    }

    /// Stage 2: insect damage or disease symptoms. Clears symptom and pest.
    pub fn select_damage_type(&mut self, damage: DamageType) -> EngineResult<()> {
        if self.crop.is_none() {
            return Err(EngineError::SelectionOrder(
                "select a crop before the damage type",
            ));
        }
        self.damage_type = Some(damage);
        self.symptom = None;
        self.pest = None;
        Ok(())
    }

    /// Symptom choices for the selected damage type; empty before stage 2
    pub fn symptoms(&self) -> &'static [SymptomEntry] {
        self.damage_type.map(symptoms_for).unwrap_or(&[])
    }

    /// Stage 3: the observed symptom. Clears the pest selection.
    pub fn select_symptom(&mut self, label: &str) -> EngineResult<()> {
        let damage = self.damage_type.ok_or(EngineError::SelectionOrder(
            "select a damage type before the symptom",
        ))?;
        let entry = symptoms_for(damage)
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| EngineError::UnknownSymptom(label.to_string()))?;
        self.symptom = Some(entry);
        self.pest = None;
        Ok(())
    }

    /// Pests known for the crop that also fit the observed symptom.
    ///
    /// Before a symptom is chosen this is the crop's full list for the
    /// damage type; afterwards it is the fuzzy intersection with the
    /// symptom's candidates. Empty means "no match — ask the advisor".
    pub fn candidate_pests(&self) -> Vec<&'static str> {
        let (Some(crop), Some(damage)) = (self.crop, self.damage_type) else {
            return Vec::new();
        };
        let known = crop.pest_list(damage);
        match self.symptom {
            Some(symptom) => known
                .iter()
                .copied()
                .filter(|pest| symptom.candidates.iter().any(|c| names_match(pest, c)))
                .collect(),
            None => known.to_vec(),
        }
    }

    /// Stage 4: identify the pest
    pub fn select_pest(&mut self, name: &str) -> EngineResult<()> {
        if self.symptom.is_none() {
            return Err(EngineError::SelectionOrder(
                "select a symptom before the pest",
            ));
        }
        self.pest = Some(name.trim().to_string());
        Ok(())
    }

    /// Terminal state; `None` until a pest has been selected
    pub fn resolve(&self) -> Option<DiagnosticOutcome> {
        let pest = self.pest.as_deref()?;
        let recommendations = spray_recommendations(pest);
        if recommendations.is_empty() {
            tracing::warn!(pest, "no spray recommendation matched");
            Some(DiagnosticOutcome::NoMatch {
                pest: pest.to_string(),
            })
        } else {
            Some(DiagnosticOutcome::Recommendations(recommendations))
        }
    }

    /// Start over
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Spray chart entries whose pest name fuzzily matches
pub fn spray_recommendations(pest: &str) -> Vec<&'static SprayRecommendation> {
    SPRAY_RATES
        .iter()
        .filter(|entry| names_match(entry.pest, pest))
        .collect()
}
