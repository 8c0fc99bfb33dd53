//! Mapping application: coercion, transforms, renaming.
//!
//! The applier consumes a frame plus a validated mapping set and
//! produces an [`ImportResult`](tis_model::ImportResult) with the
//! remapped frame, accumulating per-mapping errors and per-cell
//! transform warnings along the way.

pub mod apply;
pub mod coerce;

pub use apply::apply_mappings;
pub use coerce::coerce_series;
