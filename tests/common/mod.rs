#![allow(dead_code)]

use etro::build::{Builder, Event, Options, Outcome, Toolchain};
use etro::lang::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// The configured C compiler, or `None` with a notice when it is missing.
pub fn toolchain() -> Option<Toolchain> {
    let toolchain = Toolchain::default();
    if toolchain.is_available() {
        Some(toolchain)
    } else {
        eprintln!("(skip) no C compiler '{}', set ETRO_CC", toolchain.program);
        None
    }
}

pub fn source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

pub fn build(
    source: &Path,
    options: Options,
    toolchain: Toolchain,
) -> (Result<Outcome, Error>, Vec<Event>) {
    let mut events = vec![];
    let result = Builder::new(options, toolchain).build(source, |e| events.push(e));
    (result, events)
}

pub fn skip_run() -> Options {
    Options {
        skip_run: true,
        ..Options::default()
    }
}

pub fn run_binary(binary: &Path, input: &str) -> Output {
    let mut child = Command::new(binary)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Build `text` and run it, returning the program's stdout.
pub fn exec(text: &str) -> Option<String> {
    exec_with_input(text, "")
}

pub fn exec_with_input(text: &str, input: &str) -> Option<String> {
    let toolchain = toolchain()?;
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", text);
    let (result, _) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    let output = run_binary(&dir.path().join("main_binary"), input);
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn exists(dir: &TempDir, names: &[&str]) -> Vec<bool> {
    names.iter().map(|n| dir.path().join(n).exists()).collect()
}
