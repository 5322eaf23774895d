//! Package manifest and lint config handling
//!
//! - Static dependency fragments (versions pinned once, never mutated)
//! - Loading the base configs out of the template root
//! - Right-biased config merge
//! - Answer-driven augmentation of the loaded configs

pub mod augment;
pub mod fragments;
pub mod loader;
pub mod merge;

pub use augment::{augment, AugmentedConfigs};
pub use loader::{load_json_config, select_base_configs, BaseConfigs};
pub use merge::merge_config;
