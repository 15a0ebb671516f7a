//! Session configuration for the command gateway

use super::encoding::TextEncoding;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Line terminator the external tool uses in its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    Lf,
    CrLf,
    Cr,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

impl FromStr for LineTerminator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" | "\n" => Ok(Self::Lf),
            "crlf" | "\r\n" => Ok(Self::CrLf),
            "cr" | "\r" => Ok(Self::Cr),
            other => Err(format!("Invalid line terminator: {}", other)),
        }
    }
}

/// Host shell used to run assembled command lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    /// `sh -c <line>`
    Sh,
    /// `cmd /C <line>`
    Cmd,
}

impl Launcher {
    pub fn program(&self) -> &'static str {
        match self {
            Self::Sh => "sh",
            Self::Cmd => "cmd",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::Sh => "-c",
            Self::Cmd => "/C",
        }
    }
}

/// Defaults derived from the host platform
#[derive(Debug, Clone)]
pub struct HostDefaults {
    pub line_terminator: LineTerminator,
    pub encoding: TextEncoding,
    pub launcher: Launcher,
}

impl HostDefaults {
    fn detect() -> Self {
        if cfg!(windows) {
            Self {
                line_terminator: LineTerminator::CrLf,
                encoding: TextEncoding::gbk(),
                launcher: Launcher::Cmd,
            }
        } else {
            Self {
                line_terminator: LineTerminator::Lf,
                encoding: TextEncoding::utf_8(),
                launcher: Launcher::Sh,
            }
        }
    }
}

/// Parse a boolean switch the way clap's `BoolishValueParser` does
fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" | "" => Ok(false),
        other => Err(format!("Invalid boolean flag: {}", other)),
    }
}

lazy_static! {
    /// Host platform defaults, computed once
    pub static ref HOST_DEFAULTS: HostDefaults = HostDefaults::detect();
}

/// Everything a gateway needs to build and decode commands.
///
/// The gateway never consults the host platform itself; all of that is
/// resolved here before construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionConfig {
    pub tool_path: String,
    pub device_selector: Option<String>,
    pub line_terminator: LineTerminator,
    pub encoding: TextEncoding,
    pub launcher: Launcher,
    /// Surface spawn failures and non-zero exits as errors
    pub strict: bool,
}

impl SessionConfig {
    /// Start from host defaults with the given tool path
    pub fn new(tool_path: impl Into<String>) -> Self {
        Self {
            tool_path: tool_path.into(),
            device_selector: None,
            line_terminator: HOST_DEFAULTS.line_terminator,
            encoding: HOST_DEFAULTS.encoding,
            launcher: HOST_DEFAULTS.launcher,
            strict: false,
        }
    }

    /// Build from `ADBUTIL_*` environment variables over host defaults
    pub fn from_env() -> Result<Self> {
        let tool_path = env::var("ADBUTIL_ADB_PATH").unwrap_or_else(|_| "adb".to_string());
        let mut config = Self::new(tool_path);

        if let Ok(serial) = env::var("ADBUTIL_SERIAL") {
            config = config.with_device_selector(serial);
        }
        if let Ok(label) = env::var("ADBUTIL_ENCODING") {
            config = config.with_encoding(TextEncoding::for_label(&label)?);
        }
        if let Ok(value) = env::var("ADBUTIL_LINE_TERMINATOR") {
            config = config.with_line_terminator(value.parse().map_err(Error::Config)?);
        }
        if let Ok(value) = env::var("ADBUTIL_STRICT") {
            config = config.with_strict(parse_flag(&value).map_err(Error::Config)?);
        }

        Ok(config)
    }

    pub fn with_tool_path(mut self, tool_path: impl Into<String>) -> Self {
        self.tool_path = tool_path.into();
        self
    }

    /// An empty serial clears the selector
    pub fn with_device_selector(mut self, serial: impl Into<String>) -> Self {
        let serial = serial.into();
        self.device_selector = if serial.trim().is_empty() {
            None
        } else {
            Some(serial.trim().to_string())
        };
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The `-s <serial>` prefix, or an empty string when no device is selected
    pub fn selector_prefix(&self) -> String {
        match &self.device_selector {
            Some(serial) => format!("-s {}", serial),
            None => String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("adb")
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tool={} device={} encoding={} terminator={:?} strict={}",
            self.tool_path,
            self.device_selector.as_deref().unwrap_or("-"),
            self.encoding,
            self.line_terminator,
            self.strict
        )
    }
}
