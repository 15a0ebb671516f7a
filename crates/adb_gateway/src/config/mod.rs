//! Configuration module for adb_gateway
//!
//! This module contains:
//! - `encoding`: text encodings for tool output and file I/O
//! - `session`: session configuration and host defaults

mod encoding;
mod session;

pub use encoding::TextEncoding;
pub use session::{HostDefaults, Launcher, LineTerminator, SessionConfig, HOST_DEFAULTS};
