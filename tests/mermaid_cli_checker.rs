//! Drives the binary with a fake `mmdc` so the process-backed checker is
//! exercised end to end. Kept as a single test so no other thread spawns
//! while the script is being written.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::Command;

use tempfile::TempDir;

// Argument order: --quiet --input <file> --output <file>
const FAKE_MMDC: &str = r#"#!/bin/sh
if grep -q 'not-real-syntax' "$3"; then
  echo "Parse error on line 1: unexpected 'not-real-syntax'" >&2
  exit 1
fi
echo '<svg/>' > "$5"
"#;

#[test]
fn test_fake_mmdc_end_to_end() {
    let dir = TempDir::new().expect("create temp dir");
    let root = dir.path();

    let script = root.join("fake-mmdc");
    fs::write(&script, FAKE_MMDC).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(
        root.join("docs/a.md"),
        "# A\n\n```mermaid\ngraph TD; A--not-real-syntax-->\n```\n",
    )
    .unwrap();
    fs::write(
        root.join("docs/b.md"),
        "# B\n\n```mermaid\nflowchart LR\n  A --> B\n```\n",
    )
    .unwrap();

    let run = || {
        Command::new(env!("CARGO_BIN_EXE_mermaid-check"))
            .current_dir(root)
            .arg("--checker")
            .arg(&script)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run mermaid-check")
    };

    let first = run();
    let stderr = String::from_utf8_lossy(&first.stderr);

    assert_eq!(first.status.code(), Some(1));
    assert!(first.stdout.is_empty(), "success line must not be printed");
    assert_eq!(
        stderr,
        "❌ Error in file: docs/a.md [block #1]\n\
         Parse error on line 1: unexpected 'not-real-syntax'\n"
    );

    let second = run();
    assert_eq!(second.status.code(), first.status.code());
    assert_eq!(second.stderr, first.stderr);

    fs::remove_file(root.join("docs/a.md")).unwrap();
    let fixed = run();
    assert!(fixed.status.success());
    assert_eq!(
        String::from_utf8_lossy(&fixed.stdout),
        "✅ All Mermaid diagrams are valid.\n"
    );
}
