//! Configuration module for tnav.
//!
//! Handles loading and saving application settings.

mod settings;

pub use settings::{ServiceSettings, SessionSettings, Settings};
