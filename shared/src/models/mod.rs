//! Domain models for the Prairie Farm Management Platform

mod costs;
mod crop;
mod profile;
mod seeding;
mod spray;

pub use costs::*;
pub use crop::*;
pub use profile::*;
pub use seeding::*;
pub use spray::*;
