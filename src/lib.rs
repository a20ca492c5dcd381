//! coachlog - Mood journal with rule-based coaching
//!
//! Journal entries are scored for sentiment, classified by intent and mined
//! for keywords when written. Recommendations are composed on demand from
//! goals, the latest mood and the latest keywords. All analysis is lexicon
//! and regex driven.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::CoachError;
