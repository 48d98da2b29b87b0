/*!
## Rust Build Module

This Rust module drives one translate, build and run cycle: it writes the
generated program and the runtime library next to the source, invokes the
native compiler, optionally runs the result, and removes what it wrote.

*/

mod artifacts;
mod config;
mod interrupt;
mod toolchain;

#[cfg(test)]
mod tests;

pub use artifacts::Artifacts;
pub use artifacts::{DEBUG_JAVA_NAME, DEBUG_JS_NAME, PROGRAM_NAME};
pub use config::Options;
pub use config::Toolchain;
pub use config::{CC_ENV, DEFAULT_CC};
pub use interrupt::Interrupt;
pub use toolchain::Compilation;

use crate::error;
use crate::lang::Error;
use crate::mach::{translate, Runtime};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Command;

type Result<T> = std::result::Result<T, Error>;

/// Progress reported while building.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Compiling(String),
    CompileFailed(String),
    Compiled,
    DebugArtifacts,
    SkipRun,
    Running(PathBuf),
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Built but not run.
    Built,
    /// The program ran to completion; `None` when it was killed by a signal.
    Ran(Option<i32>),
    /// Ctrl-C arrived while the program was running.
    Interrupted,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Built | Outcome::Interrupted => 0,
            Outcome::Ran(Some(code)) => *code,
            Outcome::Ran(None) => 1,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Builder {
    options: Options,
    toolchain: Toolchain,
    runtime: Runtime,
}

impl Builder {
    pub fn new(options: Options, toolchain: Toolchain) -> Builder {
        Builder {
            options,
            toolchain,
            runtime: Runtime::default(),
        }
    }

    pub fn build<F: FnMut(Event)>(&self, source: &Path, mut events: F) -> Result<Outcome> {
        let text = std::fs::read_to_string(source).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; source.display().to_string()),
            _ => error!(DiskIoError; format!("{}: {}", source.display(), e)),
        })?;
        let translation = translate(&text);
        info!(
            "{}: {} line(s) generated, {} diagnostic(s)",
            source.display(),
            translation.program.lines().len(),
            translation.diagnostics.len()
        );

        let artifacts = Artifacts::new(source)?;
        artifacts.write_sources(&translation.program.to_string(), &self.runtime)?;

        events(Event::Compiling(self.toolchain.command_line(&artifacts)));
        let compilation = match self.toolchain.compile(&artifacts) {
            Ok(compilation) => compilation,
            Err(error) => {
                self.discard_sources(&artifacts);
                return Err(error);
            }
        };
        if !compilation.success {
            events(Event::CompileFailed(compilation.diagnostics));
            self.discard_sources(&artifacts);
            return Err(match compilation.code {
                Some(code) => error!(CompilationFailed; format!("exit status {}", code)),
                None => error!(CompilationFailed),
            });
        }
        events(Event::Compiled);

        if self.options.emit_debug_artifacts {
            artifacts.write_debug_files();
            events(Event::DebugArtifacts);
        }
        if self.options.skip_run {
            self.discard_sources(&artifacts);
            events(Event::SkipRun);
            return Ok(Outcome::Built);
        }

        let outcome = self.run(&artifacts, &mut events);
        if !self.options.keep_intermediates {
            artifacts.remove_all();
        }
        outcome
    }

    fn run<F: FnMut(Event)>(&self, artifacts: &Artifacts, events: &mut F) -> Result<Outcome> {
        let interrupt = Interrupt::arm();
        events(Event::Running(artifacts.binary.clone()));
        let status = Command::new(&artifacts.binary)
            .status()
            .map_err(|e| error!(InternalError; e.to_string()))?;
        debug!("{} exited with {}", artifacts.binary.display(), status);
        if interrupt.take() {
            events(Event::Interrupted);
            return Ok(Outcome::Interrupted);
        }
        Ok(Outcome::Ran(status.code()))
    }

    fn discard_sources(&self, artifacts: &Artifacts) {
        if !self.options.keep_intermediates {
            artifacts.remove_sources();
        }
    }
}
