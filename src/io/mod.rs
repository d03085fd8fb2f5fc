//! Boundary I/O: turning files into typed data for the core.

pub mod files;

pub use files::{load_sequences, load_settings, LoadError};
