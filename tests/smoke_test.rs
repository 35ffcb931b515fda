/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

fn termspin(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute cargo run")
}

#[test]
fn binary_shows_help() {
    let output = termspin(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("termspin"),
        "Help output should mention termspin"
    );
}

#[test]
fn binary_shows_version() {
    let output = termspin(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn list_names_every_preset() {
    let output = termspin(&["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["classic", "dense", "wave", "spiral", "infinite", "bouncing", "smooth", "ripple"] {
        assert!(stdout.contains(name), "--list should mention {}", name);
    }
}

#[test]
fn print_mode_emits_one_plain_frame() {
    let output = termspin(&["--print", "-T", "classic", "-W", "40", "-H", "20", "--at", "1.5"]);

    assert!(
        output.status.success(),
        "Print mode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20, "one line per buffer row");
    assert!(lines.iter().all(|l| l.chars().count() == 40));
    assert!(!stdout.contains('\x1b'), "print mode must not emit escape codes");
    assert!(
        stdout.chars().any(|c| !c.is_whitespace()),
        "frame should not be blank"
    );
}

#[test]
fn zero_grid_is_a_clean_error() {
    let output = termspin(&["--print", "--grid", "0"]);

    assert!(!output.status.success(), "grid 0 should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"), "should not panic: {}", stderr);
}

#[test]
fn invalid_flag_fails_gracefully() {
    let output = termspin(&["--nonexistent-flag"]);

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid flag should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    // Should show helpful error, not a panic backtrace
    assert!(
        !stderr.contains("panicked at"),
        "Invalid flag should not cause panic"
    );
}
