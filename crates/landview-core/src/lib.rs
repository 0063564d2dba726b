//! landview-core: shared vocabulary for the landview view layer.
//!
//! This crate holds the pieces every other landview crate agrees on:
//! - Identifier normalization (the candidate forms tried during resolution)
//! - The declared schema table: root label, identifier property priority,
//!   and the fixed set of one-hop relationships expanded from a parcel

pub mod normalize;
pub mod schema;

pub use normalize::{candidates, IdCandidates};
