#![deny(missing_docs)]

//! Replay cursor that applies a recorded trace to a live graph, one step per call.

mod cursor;

pub use cursor::{Advance, ReplayCursor, ReplaySummary};
