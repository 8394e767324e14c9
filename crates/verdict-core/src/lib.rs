//! Verdict Core Library
//!
//! Core domain logic for the Verdict fault-localization grader.

pub mod error;
pub mod fault;
pub mod format;
pub mod loader;
pub mod logging;
pub mod scoring;
pub mod token;
