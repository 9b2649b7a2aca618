/*!
 * End-to-end tests of the codeclip binary writing to stdout
 */

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn codeclip() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codeclip"));
    // Keep user-wide settings out of the run
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn test_tree_command_prints_structure() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("demo");
    fs::create_dir_all(project.join("sub")).unwrap();
    fs::write(project.join("a.txt"), "hello").unwrap();
    fs::write(project.join("sub").join("c.txt"), "nested").unwrap();

    let output = codeclip()
        .args(["tree", &project.to_string_lossy(), "--source", "all", "--print"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# demo\n\n## Directory Structure\n\n- demo/\n  - a.txt\n  - sub/\n    - c.txt\n\n"
    );
}

#[test]
fn test_dir_command_writes_output_file() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("a.txt"), "hello").unwrap();
    fs::write(project.join("b.png"), [0x89, b'P', b'N', b'G', 0x00]).unwrap();
    let out = temp_dir.path().join("out.md");

    let status = codeclip()
        .args([
            "dir",
            &project.to_string_lossy(),
            "--source",
            "all",
            "--quiet",
            "--output",
            &out.to_string_lossy(),
        ])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "# demo\n\n## Directory Structure\n\n- demo/\n  - a.txt\n  - b.png\n\n## File Contents\n\n### a.txt\n\n```\nhello\n```\n\n"
    );
}

#[test]
fn test_dir_command_rejects_file() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("a.txt");
    fs::write(&file, "hello").unwrap();

    let output = codeclip()
        .args(["dir", &file.to_string_lossy(), "--print"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a directory"));
}
