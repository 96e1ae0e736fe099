use std::path::PathBuf;
use std::process::{Command, Output};

const SXGA: &str = r#"{"DotClock":65000000,"XRes":1280,"YRes":1024,"RightMargin":48,
    "LeftMargin":248,"HSyncLen":112,"LowerMargin":1,"UpperMargin":38,"VSyncLen":3}"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("modeline-exit-{}-{name}", std::process::id()))
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run the binary against an explicit empty config so the user's config
/// directory is never touched.
fn modeline(args: &[&str]) -> Output {
    let config = write_temp("config.toml", "");
    Command::new(env!("CARGO_BIN_EXE_modeline"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_success_prints_report() {
    let path = write_temp("sxga.json", SXGA);
    let output = modeline(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fps: 36 Hz"));
    assert!(stdout.contains("Xorg Modeline: 65000000 1280 1328 1440 1688 1024 1025 1028 1066"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_modeline"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_file_and_modeline_conflict() {
    let output = modeline(&["t.json", "--from-modeline", "1 2 3 4 5 6 7 8 9"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_file_fails() {
    let path = temp_path("absent.json");
    let output = modeline(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("error: failed to read timing file"));
}

#[test]
fn test_malformed_json_fails() {
    let path = write_temp("broken.json", r#"{"XRes": "wide"}"#);
    let output = modeline(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: invalid timing JSON"));
}

#[test]
fn test_degenerate_timing_fails() {
    let path = write_temp("zero.json", r#"{"DotClock":1}"#);
    let output = modeline(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("error: frame time is zero"));
}

#[test]
fn test_missing_config_fails_without_creating_it() {
    let config = temp_path("typo.toml");
    let path = write_temp("config-sxga.json", SXGA);
    let output = Command::new(env!("CARGO_BIN_EXE_modeline"))
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .output()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not exist"));
    assert!(!config.exists());
}

#[test]
fn test_from_modeline_prints_margins() {
    let output = modeline(&[
        "--from-modeline",
        "65000000 1280 1328 1440 1688 1024 1025 1028 1066",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Upper Margin (vbackporch): \t38"));
}
