//! Command implementations for the quizbank CLI

pub mod serve;

pub use serve::run_serve;
