//! Session setup
//!
//! Startup data for a new session. Nothing is read from disk; the ledger
//! starts empty or with the sample data below.

pub mod sample;

pub use sample::{sample_ledger, seed_sample_data};
