//! Business logic services
//!
//! Services coordinate the history repositories with the coaching engine.

pub mod coaching;

pub use coaching::CoachingService;
