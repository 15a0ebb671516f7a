//! adb_gateway: a typed gateway over the `adb` command-line tool
//!
//! This library provides:
//! - A command gateway that turns device operations into `adb` command lines
//!   and parses the tool's text output back into values
//! - Explicit session configuration (tool path, device selector, line
//!   terminator, text encoding)
//! - Small helpers for string substitution, file text I/O, MD5 and timestamps
//!
//! # Example
//!
//! ```no_run
//! use adb_gateway::{AdbGateway, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> adb_gateway::Result<()> {
//!     let config = SessionConfig::new("adb").with_device_selector("emulator-5554");
//!     let gateway = AdbGateway::new(config);
//!
//!     for device in gateway.list_devices().await? {
//!         println!("{} ({})", device.serial, device.state);
//!     }
//!     gateway.tap(540, 1200).await?;
//!     println!("Battery: {}%", gateway.battery_field("level").await?);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Device gateway
pub mod adb;

// Helpers
pub mod util;

// Re-export commonly used types and functions
pub use error::{Error, Result};

pub use config::{Launcher, LineTerminator, SessionConfig, TextEncoding, HOST_DEFAULTS};

pub use adb::{keycode, AdbGateway, CommandLine, DeviceRecord, ScreenPoint, Screenshot, SETTLE_DELAY};

pub use util::{md5_string, replace_by_dict, str_to_int_list};
