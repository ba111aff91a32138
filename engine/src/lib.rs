//! Agronomy Reference & Farm-Economics Engine
//!
//! Pure-function core behind the platform's agronomy and crop-economics
//! pages: static reference tables from the prairie crop planning and
//! protection guides, per-crop cost/revenue/breakeven arithmetic, a guided
//! pest and disease diagnostic, and crop-stage spray window reminders
//! derived from the seeding log.
//!
//! Everything here is synchronous, deterministic, and side-effect free.
//! The reference tables are read-only process-wide state initialized on
//! first use; every calculator call is independent, so concurrent callers
//! need no coordination.

pub mod error;
pub mod reference;
pub mod services;

pub use error::{EngineError, EngineResult};
