//! End-to-end tests invoking the `logrelay-cli` binary.

use std::process::Command;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_logrelay-cli"))
}

#[test]
fn test_providers_lists_every_backend() {
    let output = cli().arg("providers").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["noop", "memory", "console", "tracing"] {
        assert!(stdout.contains(name), "missing {} in:\n{}", name, stdout);
    }
    assert!(stdout.contains("In Memory"));
}

#[test]
fn test_demo_with_memory_provider_refuses_reconfiguration() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.ini");

    let output = cli()
        .args(["--config", config.to_str().unwrap()])
        .args(["demo", "--provider", "memory", "--level", "warn"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Reconfiguration refused"));
    assert!(stdout.contains("Retained records"));
    assert!(stdout.contains("[logrelay.demo] late reconfiguration rejected"));
    assert!(!stdout.contains("named logger 'logrelay.demo' ready"));
}

#[test]
fn test_demo_rejects_unknown_provider() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.ini");

    let output = cli()
        .args(["--config", config.to_str().unwrap()])
        .args(["demo", "--provider", "syslog"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid argument"));
}

#[test]
fn test_config_init_then_show() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.ini");

    let init = cli()
        .args(["--config", config.to_str().unwrap(), "config", "init"])
        .output()
        .unwrap();
    assert!(init.status.success());
    assert!(config.exists());

    let show = cli()
        .args(["--config", config.to_str().unwrap(), "config", "show"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("logging.provider = console"));
    assert!(stdout.contains("memory.capacity = 1000"));
}
