//! Spray product and rate models (provincial crop protection guide data)

use serde::Serialize;

/// A registered product with its labelled rate and mode-of-action group
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SprayProduct {
    pub name: &'static str,
    pub rate: &'static str,
    /// Mode-of-action group code (e.g. "3A (Pyrethroid)")
    pub moa_group: &'static str,
    pub notes: &'static str,
}

/// Product recommendations for one pest or disease.
///
/// Looked up by the fuzzy name-match rule, since pest naming varies between
/// the crop tables and the protection guide ("Pea aphid" vs "Aphids").
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SprayRecommendation {
    pub pest: &'static str,
    /// Crops the recommendation applies to, as printed in the guide
    pub crops: &'static str,
    pub products: &'static [SprayProduct],
    pub source: &'static str,
}
