use assert_cmd::Command;

#[test]
fn decode_session() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["decode", "testdata/captures/session.csv", "-q"])
        .assert();

    let output = assert.get_output();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr, "");
    assert_eq!(stdout, "final data: hello{");
}

#[test]
fn malformed_payload_is_skipped() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["decode", "testdata/captures/garbled.csv", "-q"])
        .assert();

    let output = assert.get_output();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr, "");
    assert_eq!(stdout, "final data: b");
}

#[test]
fn malformed_payload_warns() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["decode", "testdata/captures/garbled.csv"])
        .assert();

    let output = assert.get_output();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr, "");
    assert_eq!(
        stdout,
        "warning: skipping payload ‘00000400000000000’: odd number of hex digits\nfinal data: b"
    );
}

#[test]
fn truncated_export_aborts() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["decode", "testdata/captures/truncated.csv", "-q"])
        .assert()
        .failure()
        .code(2);

    let output = assert.get_output();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stdout, "");
    assert_eq!(
        stderr,
        "error: testdata/captures/truncated.csv:3: expected at least 8 fields, found 5\n"
    );
}

#[test]
fn transfer_label_override() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args([
            "decode",
            "testdata/captures/mixed.csv",
            "--transfer",
            "URB_CONTROL in",
            "-q",
        ])
        .assert();

    let output = assert.get_output();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr, "");
    assert_eq!(stdout, "final data: c");
}

#[test]
fn keymap_override() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["decode", "testdata/captures/underscore.csv", "-q"])
        .assert();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "final data: -"
    );

    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args([
            "decode",
            "testdata/captures/underscore.csv",
            "--keymap",
            "testdata/keymaps/readable.toml",
            "-q",
        ])
        .assert();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "final data: _"
    );
}

#[test]
fn keycodes_listing() {
    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd.args(["keycodes"]).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.starts_with("0x04 => \"a\"\n"));
    assert!(stdout.contains("0x28 => \"\\n\"\n"));
    assert!(stdout.contains("0x2f => \"[\"\n"));
    assert!(stdout.contains("0x2d => \"-\"\n"));

    let mut cmd = Command::cargo_bin("hidkb").unwrap();

    let assert = cmd
        .args(["keycodes", "--keymap", "testdata/keymaps/readable.toml"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.contains("0x2d => \"_\"\n"));
}
