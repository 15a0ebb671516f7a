//! Command assembly and execution against the external tool

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// A textual command line, assembled part by part.
///
/// Empty parts are dropped so an unset device selector leaves no gap.
/// Each part is trimmed; the host shell splits the line on whitespace
/// anyway, so leading and trailing blanks never reach the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    parts: Vec<String>,
}

impl CommandLine {
    pub fn new(tool_path: impl Into<String>) -> Self {
        Self::default().arg(tool_path)
    }

    pub fn arg(mut self, part: impl Into<String>) -> Self {
        let part = part.into();
        let part = part.trim();
        if !part.is_empty() {
            self.parts.push(part.to_string());
        }
        self
    }

    pub fn render(&self) -> String {
        self.parts.join(" ")
    }
}

/// Gateway to the device-bridge tool.
///
/// Every operation spawns one process through the configured host launcher and
/// resolves once it exits. There is no timeout. A gateway is meant to be owned
/// by one task and driven one operation at a time; the setters take `&mut self`
/// so the configuration cannot change while a command is in flight.
#[derive(Debug, Clone)]
pub struct AdbGateway {
    config: SessionConfig,
}

impl AdbGateway {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tool_path(&self) -> &str {
        &self.config.tool_path
    }

    /// Replace the tool path
    pub fn set_tool_path(&mut self, tool_path: impl Into<String>) {
        self.config.tool_path = tool_path.into();
    }

    pub fn device_selector(&self) -> Option<&str> {
        self.config.device_selector.as_deref()
    }

    /// Replace the device selector; `None` or an empty serial clears it
    pub fn set_device_selector(&mut self, serial: Option<&str>) {
        let config = self.config.clone();
        self.config = config.with_device_selector(serial.unwrap_or_default());
    }

    pub(crate) fn terminator(&self) -> &'static str {
        self.config.line_terminator.as_str()
    }

    /// `<tool> <raw_args>`
    pub fn command_line(&self, raw_args: &str) -> String {
        CommandLine::new(self.config.tool_path.as_str())
            .arg(raw_args)
            .render()
    }

    /// `<tool> [-s <serial>] <raw_args>`
    pub fn device_command_line(&self, raw_args: &str) -> String {
        CommandLine::new(self.config.tool_path.as_str())
            .arg(self.config.selector_prefix())
            .arg(raw_args)
            .render()
    }

    /// Run `<tool> <raw_args>` and return decoded stdout.
    ///
    /// `raw_args` is shell text: whitespace around it is dropped and quoting
    /// is the caller's job.
    pub async fn run(&self, raw_args: &str) -> Result<String> {
        let line = self.command_line(raw_args);
        let stdout = self.execute(&line).await?;
        Ok(self.config.encoding.decode(&stdout).into_owned())
    }

    /// Like [`run`](Self::run) with the device selector prefixed
    pub async fn run_on_device(&self, raw_args: &str) -> Result<String> {
        let line = self.device_command_line(raw_args);
        let stdout = self.execute(&line).await?;
        Ok(self.config.encoding.decode(&stdout).into_owned())
    }

    /// `run_on_device("shell <raw_args>")`
    pub async fn shell(&self, raw_args: &str) -> Result<String> {
        self.run_on_device(&format!("shell {}", raw_args)).await
    }

    /// Device-routed command returning raw stdout bytes
    pub async fn run_bytes(&self, raw_args: &str) -> Result<Vec<u8>> {
        let line = self.device_command_line(raw_args);
        self.execute(&line).await
    }

    async fn execute(&self, line: &str) -> Result<Vec<u8>> {
        let launcher = self.config.launcher;
        debug!("Running: {}", line);

        let output = Command::new(launcher.program())
            .arg(launcher.flag())
            .arg(line)
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) if self.config.strict => {
                return Err(Error::Spawn {
                    command: line.to_string(),
                    source: e,
                });
            }
            Err(e) => {
                warn!("Failed to spawn `{}`: {}", line, e);
                return Ok(Vec::new());
            }
        };

        debug!(
            "`{}` exited with {} ({} bytes of output)",
            line,
            output.status,
            output.stdout.len()
        );

        if self.config.strict && !output.status.success() {
            let stderr = self.config.encoding.decode(&output.stderr);
            return Err(Error::CommandFailed {
                command: line.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Default for AdbGateway {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::adb::fake_tool::FakeTool;
    use crate::config::Launcher;

    #[test]
    fn test_command_line_skips_empty_parts() {
        let line = CommandLine::new("adb").arg("").arg("  devices ").render();
        assert_eq!(line, "adb devices");
    }

    #[test]
    fn test_command_line_trims_parts() {
        let line = CommandLine::new("adb").arg("shell input text a ").render();
        assert_eq!(line, "adb shell input text a");
    }

    #[test]
    fn test_selector_prefix() {
        let mut gateway = AdbGateway::new(SessionConfig::new("adb"));
        assert_eq!(gateway.device_command_line("get-state"), "adb get-state");

        gateway.set_device_selector(Some("emulator-5554"));
        assert_eq!(
            gateway.device_command_line("get-state"),
            "adb -s emulator-5554 get-state"
        );
        // Server-level commands are never routed
        assert_eq!(gateway.command_line("start-server"), "adb start-server");

        gateway.set_device_selector(None);
        assert_eq!(gateway.device_selector(), None);
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let fake = FakeTool::new(r#"printf 'hello %s\n' "$1""#);
        let out = fake.gateway().run("world").await.unwrap();
        assert_eq!(out, "hello world\n");
        assert_eq!(fake.calls(), vec!["world"]);
    }

    #[tokio::test]
    async fn test_selector_prefixed_on_every_routed_command() {
        let fake = FakeTool::new("");
        let mut gateway = fake.gateway();
        gateway.set_device_selector(Some("abc123"));

        gateway.run_on_device("get-state").await.unwrap();
        gateway.shell("getprop ro.product.model").await.unwrap();
        gateway.run("devices").await.unwrap();

        assert_eq!(
            fake.calls(),
            vec![
                "-s abc123 get-state",
                "-s abc123 shell getprop ro.product.model",
                "devices",
            ]
        );
    }

    #[tokio::test]
    async fn test_lenient_ignores_exit_status() {
        let fake = FakeTool::new("printf 'partial'; echo 'boom' >&2; exit 3");
        let out = fake.gateway().run("get-state").await.unwrap();
        assert_eq!(out, "partial");
    }

    #[tokio::test]
    async fn test_missing_tool_is_empty_output() {
        let gateway = AdbGateway::new(
            SessionConfig::new("/nonexistent/adb-gateway-tool").with_launcher(Launcher::Sh),
        );
        assert_eq!(gateway.run("devices").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_strict_surfaces_exit_status() {
        let fake = FakeTool::new("echo 'error: no devices/emulators found' >&2; exit 1");
        let gateway = AdbGateway::new(fake.config().with_strict(true));

        let err = gateway.run("get-state").await.unwrap_err();
        match err {
            Error::CommandFailed { command, stderr, .. } => {
                assert!(command.ends_with("get-state"));
                assert_eq!(stderr, "error: no devices/emulators found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decodes_with_session_encoding() {
        // "中文" in GBK
        let fake = FakeTool::new(r"printf '\326\320\316\304'");
        let gateway = AdbGateway::new(fake.config().with_encoding(crate::TextEncoding::gbk()));
        assert_eq!(gateway.run("x").await.unwrap(), "中文");
    }
}
