//! Order transformation domain module.
//!
//! This crate turns inbound platform order lines into itemized, cleaned
//! output lines, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod expand;
pub mod order;
pub mod pipeline;

pub use expand::{RunState, expand_order};
pub use order::{CleanedOrder, InputOrder};
pub use pipeline::{CLEANNER_SUFFIX, WIPING_CLOTH_ID, transform_orders};
