use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn growthmap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_growthmap"));
    cmd.current_dir(dir.path()).env("NO_COLOR", "1").env_remove("GROWTHMAP_CONFIG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_summary_with_builtin_figures() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(growthmap(&dir).args(["summary", "--plain"]));
    assert!(out.contains("Overall Score: 3.9/10"));
}

#[test]
fn test_kpis_json_applies_listener_override() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(growthmap(&dir).args(["kpis", "--current-listeners", "125", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["section"], "kpis");
    assert_eq!(value["primary"]["current"], 125.0);
    assert_eq!(value["primary"]["progress"], 25.0);
}

#[test]
fn test_listener_override_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    growthmap(&dir)
        .args(["kpis", "--current-listeners", "5000"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_metric_override_fails() {
    let dir = TempDir::new().unwrap();
    let output = growthmap(&dir)
        .args(["scenarios", "--set", "myspace_friends=10"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(output).unwrap().contains("myspace_friends"));
}

#[test]
fn test_init_then_scenarios_uses_written_config() {
    let dir = TempDir::new().unwrap();
    growthmap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".growthmap.toml").exists());
    growthmap(&dir).arg("init").assert().failure();

    let out = stdout_of(growthmap(&dir).args(["scenarios", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tiers: Vec<&str> = value["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["tier"].as_str().unwrap())
        .collect();
    assert_eq!(tiers, vec!["organic", "entry"]);
}

#[test]
fn test_explicit_config_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.toml");
    fs::write(
        &path,
        "[[metrics]]\nname = \"spotify_listeners\"\ncurrent = 310\ntarget = 500\n",
    )
    .unwrap();

    let out = stdout_of(growthmap(&dir).args(["assess", "--plain", "--config"]).arg(&path));
    assert!(out.contains("STRONG PROGRESS"));
}

#[test]
fn test_tasks_report_completion() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(growthmap(&dir).args([
        "tasks",
        "--plain",
        "--status",
        "Instagram bio updated=completed",
        "--status",
        "First 7 Reels scheduled=in_progress",
        "--issue-progress",
        "100,50,0",
    ]));
    assert!(out.contains("Completed 1/6"));
    assert!(out.contains("Critical issue remediation: 21.4%"));
}

#[test]
fn test_tasks_rejects_misspelled_task() {
    let dir = TempDir::new().unwrap();
    let output = growthmap(&dir)
        .args(["tasks", "--status", "Instagram bio updatd=completed"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("Unknown task: Instagram bio updatd"));
}
