//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, clone protocol and timeout resolution tests
//! - `loading`: End-to-end loading from environment and CLI arguments

mod helpers;
mod loading;
