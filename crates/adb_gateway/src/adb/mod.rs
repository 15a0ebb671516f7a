//! ADB (Android Debug Bridge) command gateway
//!
//! This module provides:
//! - `gateway`: command assembly and execution
//! - `parse`: parsers for the tool's text output
//! - `connection`: server control and device discovery
//! - `device`: device properties, focus and display queries
//! - `packages`: package queries and app lifecycle
//! - `input`: taps, swipes, text and key events
//! - `screenshot`: screen capture
//! - `keycode`: named key codes

mod connection;
mod device;
mod gateway;
mod input;
pub mod keycode;
mod packages;
pub mod parse;
mod screenshot;
mod types;

#[cfg(all(test, unix))]
mod fake_tool;

pub use gateway::{AdbGateway, CommandLine};
pub use input::SETTLE_DELAY;
pub use types::{DeviceRecord, ScreenPoint, Screenshot};
