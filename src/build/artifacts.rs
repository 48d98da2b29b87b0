use crate::lang::Error;
use crate::mach::{Runtime, HEADER_NAME, SOURCE_NAME};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

pub const PROGRAM_NAME: &str = "prog.c";
pub const DEBUG_JS_NAME: &str = "debug.js";
pub const DEBUG_JAVA_NAME: &str = "DebugTool.java";

const DEBUG_JS: &str = "// Debug JS tool placeholder\nconsole.log(\"Debug tool JS\");\n";
const DEBUG_JAVA: &str = "// Debug Java tool placeholder\n\
public class DebugTool {\n\
    public static void main(String[] args) { System.out.println(\"Debug tool Java\"); }\n\
}\n";

/// ## Files written next to the source
///
/// Names are fixed except for the executable, which is named after the
/// source file. Two builds in the same directory share these paths.

#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub program: PathBuf,
    pub header: PathBuf,
    pub runtime: PathBuf,
    pub binary: PathBuf,
}

impl Artifacts {
    pub fn new(source: &Path) -> Result<Artifacts> {
        let source = fs::canonicalize(source)?;
        let dir = source.parent().unwrap_or_else(|| Path::new("/"));
        let stem = match source.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => "a".to_string(),
        };
        Ok(Artifacts::in_dir(dir, &stem))
    }

    pub fn in_dir(dir: &Path, stem: &str) -> Artifacts {
        Artifacts {
            program: dir.join(PROGRAM_NAME),
            header: dir.join(HEADER_NAME),
            runtime: dir.join(SOURCE_NAME),
            binary: dir.join(format!("{}_binary", stem)),
        }
    }

    pub fn dir(&self) -> &Path {
        self.program.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn sources(&self) -> [&Path; 3] {
        [&self.program, &self.header, &self.runtime]
    }

    pub fn all(&self) -> [&Path; 4] {
        [&self.program, &self.header, &self.runtime, &self.binary]
    }

    pub fn debug_files(&self) -> [PathBuf; 2] {
        [
            self.dir().join(DEBUG_JS_NAME),
            self.dir().join(DEBUG_JAVA_NAME),
        ]
    }

    pub fn write_sources(&self, program: &str, runtime: &Runtime) -> Result<()> {
        write(&self.program, program)?;
        write(&self.header, runtime.header())?;
        write(&self.runtime, runtime.source())
    }

    /// Placeholders have no behavior. A failed write is logged and skipped.
    pub fn write_debug_files(&self) {
        let [js, java] = self.debug_files();
        for (path, content) in [(js, DEBUG_JS), (java, DEBUG_JAVA)] {
            if let Err(error) = write(&path, content) {
                warn!("{}: {}", path.display(), error);
            }
        }
    }

    pub fn remove_sources(&self) {
        remove(&self.sources());
    }

    pub fn remove_all(&self) {
        remove(&self.all());
    }
}

fn write(path: &Path, content: &str) -> Result<()> {
    debug!("writing {}", path.display());
    fs::write(path, content)?;
    Ok(())
}

fn remove(paths: &[&Path]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!("removed {}", path.display()),
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => warn!("{}: {}", path.display(), error),
        }
    }
}
