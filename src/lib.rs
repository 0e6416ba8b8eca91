#![cfg_attr(not(test), no_std)]

//! Build-time configuration of the Azure IoT Hub GPS tracker firmware.
//!
//! `build.rs` reads `cfg.toml` (or the file named by `IOT_CONFIG_FILE`),
//! validates it and bakes it into [`CONFIG`]. A missing or malformed value
//! fails the build; nothing here can fail at run time.

pub mod config;
pub mod constants;
pub mod secret;
pub mod validate;

pub use config::{Config, CONFIG};
pub use secret::Secret;
