// Stand-in for the device-bridge tool in tests: a shell script that logs its
// arguments and then runs a caller-supplied body.
use super::gateway::AdbGateway;
use crate::config::{Launcher, LineTerminator, SessionConfig, TextEncoding};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct FakeTool {
    _dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl FakeTool {
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-adb.sh");
        let log = dir.path().join("calls.log");
        let contents = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        std::fs::write(&script, contents).unwrap();
        Self {
            _dir: dir,
            script,
            log,
        }
    }

    /// Run through `sh` so the script needs no exec bit
    pub fn config(&self) -> SessionConfig {
        SessionConfig::new(format!("sh {}", self.script.display()))
            .with_launcher(Launcher::Sh)
            .with_line_terminator(LineTerminator::Lf)
            .with_encoding(TextEncoding::utf_8())
    }

    pub fn gateway(&self) -> AdbGateway {
        AdbGateway::new(self.config())
    }

    /// Argument lines the script has received, oldest first
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
