mod common;
use common::*;
use etro::build::{Event, Options, Outcome, Toolchain};
use etro::lang::ErrorCode;

const ARTIFACTS: [&str; 4] = ["prog.c", "langlib.h", "langlib.c", "main_binary"];

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let (result, events) = build(
        &dir.path().join("nope.etro"),
        Options::default(),
        Toolchain::default(),
    );
    assert!(result.unwrap_err().is(ErrorCode::FileNotFound));
    assert!(events.is_empty());
}

#[test]
fn test_missing_toolchain_removes_sources() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\n");
    let (result, events) = build(
        &path,
        Options::default(),
        Toolchain::new("etro-no-such-compiler"),
    );
    assert!(result.unwrap_err().is(ErrorCode::ToolchainNotFound));
    assert!(matches!(events[0], Event::Compiling(_)));
    assert_eq!(exists(&dir, &ARTIFACTS), [false; 4]);
}

#[test]
fn test_missing_toolchain_keeps_sources_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\n");
    let options = Options {
        keep_intermediates: true,
        ..Options::default()
    };
    let (result, _) = build(&path, options, Toolchain::new("etro-no-such-compiler"));
    assert!(result.is_err());
    assert_eq!(exists(&dir, &ARTIFACTS), [true, true, true, false]);
    let prog = std::fs::read_to_string(dir.path().join("prog.c")).unwrap();
    assert!(prog.contains("    print_val(1);"));
}

#[test]
fn test_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\n");
    let (_, events) = build(&path, Options::default(), Toolchain::new("etro-no-such-compiler"));
    match &events[0] {
        Event::Compiling(cmd) => {
            assert!(cmd.starts_with("etro-no-such-compiler -O2 "));
            assert!(cmd.contains("prog.c"));
            assert!(cmd.ends_with("main_binary"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_unbalanced_if_fails_to_compile() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "SET x 1\nIF x > 0\nPRINT x\n");
    let (result, events) = build(&path, Options::default(), toolchain);
    assert!(result.unwrap_err().is(ErrorCode::CompilationFailed));
    assert!(matches!(events.last(), Some(Event::CompileFailed(d)) if !d.is_empty()));
    assert_eq!(exists(&dir, &ARTIFACTS), [false; 4]);
}

#[test]
fn test_compile_failure_keeps_sources_when_asked() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "SET x (1 +\nPRINT x\n");
    let options = Options {
        keep_intermediates: true,
        ..Options::default()
    };
    let (result, _) = build(&path, options, toolchain);
    assert!(result.is_err());
    assert_eq!(exists(&dir, &ARTIFACTS), [true, true, true, false]);
}

#[test]
fn test_skip_run_leaves_only_the_executable() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\n");
    let (result, events) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    assert_eq!(events.last(), Some(&Event::SkipRun));
    assert_eq!(exists(&dir, &ARTIFACTS), [false, false, false, true]);
}

#[test]
fn test_debug_artifacts() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\n");
    let options = Options {
        emit_debug_artifacts: true,
        skip_run: true,
        ..Options::default()
    };
    let (result, events) = build(&path, options, toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    assert!(events.contains(&Event::DebugArtifacts));
    assert_eq!(exists(&dir, &["debug.js", "DebugTool.java"]), [true, true]);
}

#[test]
fn test_run_then_clean_up() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "VAR x\nSET x 5\n");
    let (result, events) = build(&path, Options::default(), toolchain);
    assert_eq!(result, Ok(Outcome::Ran(Some(0))));
    assert!(matches!(events.last(), Some(Event::Running(_))));
    assert_eq!(exists(&dir, &ARTIFACTS), [false; 4]);
}

#[test]
fn test_scenario_d_runtime_error_still_cleans_up() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT undeclared_var\n");
    let (result, _) = build(&path, Options::default(), toolchain);
    assert_eq!(result, Ok(Outcome::Ran(Some(1))));
    assert_eq!(result.unwrap().exit_code(), 1);
    assert_eq!(exists(&dir, &ARTIFACTS), [false; 4]);
}

#[test]
fn test_runtime_error_output() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "PRINT 1\nPRINT undeclared_var\nPRINT 2\n");
    let (result, _) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    let output = run_binary(&dir.path().join("main_binary"), "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Undefined variable: undeclared_var\n"
    );
}

#[test]
fn test_keep_intermediates_after_run() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "SET x 1\n");
    let options = Options {
        keep_intermediates: true,
        ..Options::default()
    };
    let (result, _) = build(&path, options, toolchain);
    assert_eq!(result, Ok(Outcome::Ran(Some(0))));
    assert_eq!(exists(&dir, &ARTIFACTS), [true; 4]);
}

#[test]
fn test_too_many_variables() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let src: String = (0..=100).map(|i| format!("SET v{} {}\n", i, i)).collect();
    let path = source(&dir, "main.etro", &src);
    let (result, _) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    let output = run_binary(&dir.path().join("main_binary"), "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Too many variables.\n");
}

#[test]
fn test_malformed_input() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "INPUT n\nPRINT n\n");
    let (result, _) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    let output = run_binary(&dir.path().join("main_binary"), "abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Failed to read input.\n");
}

#[test]
fn test_negative_literal_reads_empty_name() {
    let toolchain = match toolchain() {
        Some(t) => t,
        None => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "main.etro", "SET y 1\nMATH y = -7\nPRINT y\n");
    let (result, _) = build(&path, skip_run(), toolchain);
    assert_eq!(result, Ok(Outcome::Built));
    let output = run_binary(&dir.path().join("main_binary"), "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Undefined variable: \n");
}
