//! Static agronomic reference tables
//!
//! Read-only, process-wide data transcribed from the provincial crop
//! planning and crop protection guides. Tables are initialized once and
//! never mutated, so concurrent readers need no locking.

mod crops;
mod herbicide;
mod input_costs;
mod outlook;
mod provinces;
mod spray;
mod symptoms;
mod timing;

pub use crops::*;
pub use herbicide::*;
pub use input_costs::*;
pub use outlook::*;
pub use provinces::*;
pub use spray::*;
pub use symptoms::*;
pub use timing::*;
