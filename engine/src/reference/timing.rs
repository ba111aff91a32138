//! Spray-timing descriptor parsing
//!
//! The crop tables carry the guide's timing descriptor as printed
//! ("Pre-harv, Pre-seed, Soil, In-crop ×2, Desiccation"). The spray
//! calendar needs those as typed passes with approximate month spans.

/// One spray pass named by a crop's timing descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SprayTiming {
    PreSeed,
    SoilApplied,
    InCrop,
    /// Two in-crop herbicide passes (herbicide-tolerant canola systems)
    InCropTwice,
    PreHarvest,
    Desiccation,
}

impl SprayTiming {
    /// Approximate calendar span as (first month, last month), 1-12
    pub fn month_span(&self) -> (u32, u32) {
        match self {
            SprayTiming::PreSeed => (4, 4),
            SprayTiming::SoilApplied => (5, 5),
            SprayTiming::InCrop | SprayTiming::InCropTwice => (6, 7),
            SprayTiming::PreHarvest | SprayTiming::Desiccation => (9, 10),
        }
    }
}

/// Parse a guide timing descriptor into typed passes.
///
/// Unknown tokens are skipped; the descriptors are hand-maintained guide
/// text, not a schema.
pub fn parse_timings(descriptor: &str) -> Vec<SprayTiming> {
    descriptor
        .split(',')
        .filter_map(|token| {
            let token = token.trim().to_lowercase();
            match token.as_str() {
                "pre-seed" => Some(SprayTiming::PreSeed),
                "soil" => Some(SprayTiming::SoilApplied),
                "in-crop" => Some(SprayTiming::InCrop),
                "in-crop ×2" | "in-crop x2" => Some(SprayTiming::InCropTwice),
                "pre-harv" | "pre-harvest" => Some(SprayTiming::PreHarvest),
                "desiccation" => Some(SprayTiming::Desiccation),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let timings = parse_timings("Pre-harv, Pre-seed, Soil, In-crop ×2, Desiccation");
        assert_eq!(
            timings,
            vec![
                SprayTiming::PreHarvest,
                SprayTiming::PreSeed,
                SprayTiming::SoilApplied,
                SprayTiming::InCropTwice,
                SprayTiming::Desiccation,
            ]
        );
    }

    #[test]
    fn test_parse_skips_unknown_tokens() {
        assert_eq!(
            parse_timings("Pre-seed, Moon phase, In-crop"),
            vec![SprayTiming::PreSeed, SprayTiming::InCrop]
        );
        assert!(parse_timings("").is_empty());
    }

    #[test]
    fn test_month_spans_cover_growing_season() {
        assert_eq!(SprayTiming::PreSeed.month_span(), (4, 4));
        assert_eq!(SprayTiming::InCrop.month_span(), (6, 7));
        assert_eq!(SprayTiming::Desiccation.month_span(), (9, 10));
    }
}
