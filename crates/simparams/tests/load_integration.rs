//! Integration tests for the parameter loader.
//!
//! These tests exercise the public API end-to-end with real files in unique
//! temporary directories, plus the compiled `simparams` binary for exit
//! status and `login.txt` placement.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use simparams::application::load_parameters::{
    MSG_FINISH_READING, MSG_LOG_WRITTEN, MSG_START_READING,
};
use simparams::application::{LoadError, LoadStage, ParameterLoader};
use simparams::infrastructure::console::mock::RecordingConsole;
use simparams::infrastructure::storage::mock::MemoryLogSink;
use simparams::infrastructure::{FileParameterSource, LogFileSink};
use uuid::Uuid;

const EXAMPLE: &str = "model_name M1 force_type point time_step 0.01 total_time 2.0 \
                       area_x 10 area_y 10 n_x 5 n_y 5 alpha 0 beta 0 \
                       waveform ricker moment 1e6 density 2500\n";

const EXPECTED_LOG: &str = "model_name =\tM1\n\
                            force_type =\tpoint\n\
                            waveform =\tricker\n\
                            alpha =\t0\n\
                            beta =\t0\n\
                            time_step =\t0.01\n\
                            total_time =\t2\n\
                            area_x =\t10\n\
                            area_y =\t10\n\
                            n_x =\t5\n\
                            n_y =\t5\n\
                            moment =\t1000000\n\
                            density =\t2500\n";

/// A scratch directory removed when dropped.
struct Scratch(PathBuf);

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("simparams_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn file_loader(log_path: &Path) -> (ParameterLoader, Arc<RecordingConsole>) {
    let console = Arc::new(RecordingConsole::new());
    let loader = ParameterLoader::new(
        Arc::new(FileParameterSource::new()),
        console.clone(),
        Arc::new(LogFileSink::new(log_path)),
    );
    (loader, console)
}

fn memory_loader() -> (ParameterLoader, Arc<MemoryLogSink>) {
    let sink = Arc::new(MemoryLogSink::new());
    let loader = ParameterLoader::new(
        Arc::new(FileParameterSource::new()),
        Arc::new(RecordingConsole::new()),
        sink.clone(),
    );
    (loader, sink)
}

// ── Library pipeline ──────────────────────────────────────────────────────────

#[test]
fn test_example_file_writes_expected_log() {
    // Arrange
    let scratch = Scratch::new();
    let input = scratch.write("parameter.in", EXAMPLE);
    let log = scratch.path().join("login.txt");
    let (mut loader, console) = file_loader(&log);

    // Act
    let params = loader.load(&[input]).expect("example must load");

    // Assert
    assert_eq!(loader.stage(), LoadStage::Complete);
    assert_eq!(params.waveform(), "ricker");
    assert_eq!(std::fs::read_to_string(&log).unwrap(), EXPECTED_LOG);

    let lines = console.lines();
    assert_eq!(lines.first().map(String::as_str), Some(MSG_START_READING));
    assert!(lines.iter().any(|l| l == MSG_FINISH_READING));
    assert_eq!(lines[lines.len() - 2], MSG_LOG_WRITTEN);
}

#[test]
fn test_negative_time_step_leaves_no_log() {
    // Arrange
    let scratch = Scratch::new();
    let input = scratch.write(
        "parameter.in",
        &EXAMPLE.replace("time_step 0.01", "time_step -1"),
    );
    let log = scratch.path().join("login.txt");
    let (mut loader, _console) = file_loader(&log);

    // Act
    let err = loader.load(&[input]).unwrap_err();

    // Assert
    match &err {
        LoadError::InvalidParameter(e) => assert!(e.concerns("time_step")),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
    assert!(!log.exists(), "login.txt must not be created on failure");
}

#[test]
fn test_failed_load_keeps_previous_log_untouched() {
    // Arrange: a log from an earlier successful run already exists.
    let scratch = Scratch::new();
    let log = scratch.write("login.txt", "earlier run\n");
    let input = scratch.write("parameter.in", "model_name M1 n_x 0");
    let (mut loader, _console) = file_loader(&log);

    // Act
    let err = loader.load(&[input]).unwrap_err();

    // Assert
    assert!(matches!(err, LoadError::InvalidParameter(_)));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "earlier run\n");
}

#[test]
fn test_each_non_positive_constrained_field_is_named() {
    let scratch = Scratch::new();
    let cases = [
        ("time_step 0.01", "time_step 0", "time_step"),
        ("total_time 2.0", "total_time -2", "total_time"),
        ("area_x 10", "area_x 0", "area_x"),
        ("area_y 10", "area_y -10", "area_y"),
        ("n_x 5", "n_x 0", "n_x"),
        ("n_y 5", "n_y -5", "n_y"),
        ("density 2500", "density 0", "density"),
    ];

    for (from, to, field) in cases {
        let input = scratch.write("parameter.in", &EXAMPLE.replace(from, to));
        let (mut loader, sink) = memory_loader();

        let err = loader.load(&[input]).unwrap_err();

        match &err {
            LoadError::InvalidParameter(e) => {
                assert!(e.concerns(field), "{to}: expected {field} to be named, got {e}")
            }
            other => panic!("{to}: expected InvalidParameter, got {other:?}"),
        }
        assert_eq!(sink.write_count(), 0);
    }
}

#[test]
fn test_permuted_and_padded_files_produce_identical_logs() {
    // Arrange
    let scratch = Scratch::new();
    let reference = scratch.write("reference.in", EXAMPLE);
    let permuted = scratch.write(
        "permuted.in",
        "density 2500\nmoment 1e6 waveform ricker\n  beta 0 alpha 0\n\
         n_y 5 n_x 5 area_y 10 area_x 10\ntotal_time 2.0 time_step 0.01\n\
         force_type point model_name M1\n",
    );
    let padded = scratch.write("padded.in", &format!("foo bar\n{EXAMPLE}"));

    // Act
    let mut logs = Vec::new();
    for input in [reference, permuted, padded] {
        let (mut loader, sink) = memory_loader();
        loader.load(&[input]).expect("must load");
        logs.push(sink.last_write().expect("log written"));
    }

    // Assert
    assert_eq!(logs[0], EXPECTED_LOG);
    assert_eq!(logs[1], EXPECTED_LOG);
    assert_eq!(logs[2], EXPECTED_LOG);
}

#[test]
fn test_missing_file_is_file_open_error_naming_the_file() {
    let scratch = Scratch::new();
    let missing = scratch.path().join("does-not-exist.in");
    let (mut loader, sink) = memory_loader();

    let err = loader.load(&[missing]).unwrap_err();

    assert!(matches!(err, LoadError::FileOpen { .. }));
    assert!(err.to_string().contains("does-not-exist.in"));
    assert_eq!(sink.write_count(), 0);
}

#[test]
fn test_log_write_failure_is_io_error_after_validation() {
    let scratch = Scratch::new();
    let input = scratch.write("parameter.in", EXAMPLE);
    let mut loader = ParameterLoader::new(
        Arc::new(FileParameterSource::new()),
        Arc::new(RecordingConsole::new()),
        Arc::new(MemoryLogSink::failing()),
    );

    let err = loader.load(&[input]).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(loader.stage(), LoadStage::Failed);
}

// ── Binary ────────────────────────────────────────────────────────────────────

fn simparams() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_simparams"));
    cmd.env_remove("SIMPARAMS_LOG_FILE").env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_binary_writes_login_txt_in_working_directory() {
    // Arrange
    let scratch = Scratch::new();
    scratch.write("parameter.in", EXAMPLE);

    // Act
    let output = simparams()
        .current_dir(scratch.path())
        .arg("parameter.in")
        .output()
        .unwrap();

    // Assert
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let log = std::fs::read_to_string(scratch.path().join("login.txt")).unwrap();
    assert_eq!(log, EXPECTED_LOG);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Start reading variables to memory\n"));
    assert!(stdout.contains("time_step=\t\n0.01\n"));
    assert!(stdout.contains("login file has been written."));
}

#[test]
fn test_binary_stdout_matches_library_console_trace() {
    // Arrange
    let scratch = Scratch::new();
    let input = scratch.write("parameter.in", EXAMPLE);
    let (mut loader, console) = file_loader(&scratch.path().join("library-login.txt"));
    loader.load(&[input]).expect("example must load");

    // Act
    let output = simparams()
        .current_dir(scratch.path())
        .arg("parameter.in")
        .output()
        .unwrap();

    // Assert
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), console.transcript());
}

#[test]
fn test_binary_without_arguments_fails_with_usage() {
    let scratch = Scratch::new();

    let output = simparams().current_dir(scratch.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
    assert!(!scratch.path().join("login.txt").exists());
}

#[test]
fn test_binary_with_two_files_fails_with_usage() {
    let scratch = Scratch::new();
    scratch.write("a.in", EXAMPLE);
    scratch.write("b.in", EXAMPLE);

    let output = simparams()
        .current_dir(scratch.path())
        .args(["a.in", "b.in"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!scratch.path().join("login.txt").exists());
    // The usage check comes first: nothing is decoded.
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_invalid_parameter_exits_nonzero_without_log() {
    let scratch = Scratch::new();
    scratch.write(
        "parameter.in",
        &EXAMPLE.replace("time_step 0.01", "time_step -1"),
    );

    let output = simparams()
        .current_dir(scratch.path())
        .arg("parameter.in")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("time_step"));
    assert!(!scratch.path().join("login.txt").exists());
}

#[test]
fn test_binary_honours_log_file_option() {
    let scratch = Scratch::new();
    scratch.write("parameter.in", EXAMPLE);

    let output = simparams()
        .current_dir(scratch.path())
        .args(["--log-file", "run-audit.txt", "parameter.in"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(scratch.path().join("run-audit.txt").exists());
    assert!(!scratch.path().join("login.txt").exists());
}
