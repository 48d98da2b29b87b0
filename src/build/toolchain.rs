use super::{Artifacts, Toolchain};
use crate::error;
use crate::lang::Error;
use log::info;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

type Result<T> = std::result::Result<T, Error>;

/// Exit status and combined output of one compiler run.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub success: bool,
    pub code: Option<i32>,
    pub diagnostics: String,
}

impl Toolchain {
    pub fn args(&self, artifacts: &Artifacts) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.flags.iter().map(OsString::from).collect();
        args.push(artifacts.program.clone().into_os_string());
        args.push(artifacts.runtime.clone().into_os_string());
        args.push("-o".into());
        args.push(artifacts.binary.clone().into_os_string());
        args
    }

    pub fn command_line(&self, artifacts: &Artifacts) -> String {
        let mut s = self.program.clone();
        for arg in self.args(artifacts) {
            s.push(' ');
            s.push_str(&arg.to_string_lossy());
        }
        s
    }

    /// Runs the compiler once and waits for it. There is no timeout.
    pub fn compile(&self, artifacts: &Artifacts) -> Result<Compilation> {
        info!("{}", self.command_line(artifacts));
        let output = Command::new(&self.program)
            .args(self.args(artifacts))
            .current_dir(artifacts.dir())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => error!(ToolchainNotFound; self.program.as_str()),
                _ => error!(InternalError; e.to_string()),
            })?;
        let mut diagnostics = String::from_utf8_lossy(&output.stdout).into_owned();
        diagnostics.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(Compilation {
            success: output.status.success(),
            code: output.status.code(),
            diagnostics,
        })
    }

    /// True when the compiler can be started at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
