#![doc = "Bubblemap public API"]
mod common;
mod io;
mod sources;

pub mod cli;
pub mod commands;
pub mod packing;

#[doc(inline)]
pub use packing::{
    BUBBLE_LIMIT, Bubble, CoverageSummary, PackState, coverage_percent, pack_boundary,
    radius_upper_bound, summarize,
};

#[doc(inline)]
pub use sources::{BoundarySource, Constituency, SOURCES, load_constituencies};
