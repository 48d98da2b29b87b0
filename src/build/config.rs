/// Environment variable naming the C compiler.
pub const CC_ENV: &str = "ETRO_CC";

pub const DEFAULT_CC: &str = "gcc";

/// ## What happens around the native build

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Options {
    /// Leave generated sources and the executable on disk.
    pub keep_intermediates: bool,
    /// Write the inert debug placeholders after a successful build.
    pub emit_debug_artifacts: bool,
    /// Stop after building.
    pub skip_run: bool,
}

/// ## External C compiler and its flags

#[derive(Debug, Clone, PartialEq)]
pub struct Toolchain {
    pub program: String,
    pub flags: Vec<String>,
}

impl Toolchain {
    pub fn new<S: Into<String>>(program: S) -> Toolchain {
        Toolchain {
            program: program.into(),
            flags: vec!["-O2".to_string()],
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        match std::env::var(CC_ENV) {
            Ok(cc) if !cc.trim().is_empty() => Toolchain::new(cc),
            _ => Toolchain::new(DEFAULT_CC),
        }
    }
}
