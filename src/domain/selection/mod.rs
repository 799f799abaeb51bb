//! Selection state, its reducer, and load tags.

mod load_tag;
mod state;

pub use load_tag::{LoadGeneration, LoadTag};
pub use state::{ActiveView, SelectionEffect, SelectionEvent, SelectionState};
