//! Fitness Coach App Library
//!
//! This library exposes the app modules for use in tests and the binary.

pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod state;
