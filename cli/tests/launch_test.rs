use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

// A stand-in for the bundled application: reports its argument list and
// honors a requested exit code, which is all the launcher contract needs.
const BOOTSTRAP: &str = r#"
const args = globalThis.scriptArgs;
if (args.includes("--fail")) {
  exit(3);
}
print("booted:" + JSON.stringify(args));
"#;

fn application_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib").join("application_bootstrap.js"), BOOTSTRAP).unwrap();
    dir
}

fn launch(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qlaunch"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

#[test]
fn test_boots_with_no_arguments() {
    let dir = application_tree();
    let out = launch(&dir, &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "booted:[]");
}

#[test]
fn test_forwards_arguments_in_order() {
    let dir = application_tree();
    let out = launch(&dir, &["--port=8080", "-e"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        r#"booted:["--port=8080","-e"]"#
    );
}

#[test]
fn test_forwards_empty_string_argument() {
    let dir = application_tree();
    let out = launch(&dir, &["start", ""]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        r#"booted:["start",""]"#
    );
}

#[test]
fn test_propagates_bootstrap_exit_code() {
    let dir = application_tree();
    let out = launch(&dir, &["--fail"]);

    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn test_fails_when_bootstrap_is_missing() {
    let dir = TempDir::new().unwrap();
    let out = launch(&dir, &[]);

    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
    assert!(out.stdout.is_empty(), "no partial output expected");
}

#[test]
fn test_vector_matches_the_launch_contract() {
    let host = vec!["--port=8080".to_string(), "-e".to_string()];
    let args = qlaunch::argv::interpreter_args(&host);

    assert_eq!(args.len(), host.len() + 2);
    assert_eq!(args[0], qlaunch::argv::EVAL_FLAG);
    assert_eq!(args[1], qlaunch::argv::BOOTSTRAP_REQUIRE);
    assert_eq!(&args[2..], host.as_slice());
}
