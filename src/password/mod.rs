//! Stateless password helpers.
//!
//! Pure functions with no dependency on vault state:
//! - secure password generation (`generator`)
//! - strength scoring with per-criterion feedback (`strength`)

pub mod generator;
pub mod strength;

pub use generator::generate;
pub use strength::{score, Strength};
