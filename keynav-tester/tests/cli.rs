use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "keynav-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_keynav-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    for name in [
        "directional-wrap",
        "tab-boundary",
        "activation-scope",
        "escape-dismiss",
        "unfocused-start",
        "disabled-skipped",
    ] {
        assert!(content.contains(name), "{name}");
    }
}

#[test]
fn cli_logic_mode_passes_every_scenario() {
    let exe = env!("CARGO_BIN_EXE_keynav-tester");
    let output_path = temp_path("logic");
    let output = Command::new(exe)
        .args(["--mode", "logic", "--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = results.as_array().expect("array of results");
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r["passed"] == true && r["target"] == "logic"));
}

#[test]
fn cli_browser_mode_skips_unknown_browsers() {
    let exe = env!("CARGO_BIN_EXE_keynav-tester");
    let output_path = temp_path("browser");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--report",
            "markdown",
            "--scenarios",
            "tab-boundary",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("_No scenarios executed._"));
}
