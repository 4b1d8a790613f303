use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inktrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inktrack").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

fn init(dir: &TempDir) {
    inktrack(dir).arg("init").assert().success();
}

fn add(dir: &TempDir, client: &str, title: &str) -> String {
    let output = inktrack(dir)
        .args([
            "-j", "add", "--client", client, "--title", title, "--price", "1500",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_str().unwrap().to_string()
}

#[test]
fn init_writes_config_and_empty_store() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    assert!(dir.path().join(".inktrack/config.yaml").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".inktrack/commissions.json")).unwrap(),
        "[]"
    );

    // Re-running leaves existing files untouched.
    inktrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("left untouched"));
}

#[test]
fn add_then_list_shows_the_commission() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "StoryLover99", "Forest opening");

    inktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 queued, 0 active, 0 delivered"))
        .stdout(predicate::str::contains(&id))
        .stdout(predicate::str::contains("StoryLover99"));
}

#[test]
fn lifecycle_commands_move_the_status() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "MomoChan", "Late-night monologue");

    inktrack(&dir)
        .args(["advance", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("not_started -> in_progress"));

    inktrack(&dir)
        .args(["set-status", &id, "completed"])
        .assert()
        .success();

    inktrack(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed (100%)"));

    inktrack(&dir)
        .args(["revert", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed -> revision"));
}

#[test]
fn advance_at_completed_is_a_noop() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "a", "b");
    inktrack(&dir)
        .args(["set-status", &id, "completed"])
        .assert()
        .success();
    inktrack(&dir)
        .args(["advance", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn search_matches_case_insensitively() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, "StoryLover99", "Forest opening");

    inktrack(&dir)
        .args(["search", "lov"])
        .assert()
        .success()
        .stdout(predicate::str::contains("StoryLover99"));

    inktrack(&dir)
        .args(["search", "kubernetes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commissions matching"));
}

#[test]
fn delete_removes_the_commission() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Viper007", "Private piece");

    inktrack(&dir).args(["delete", &id]).assert().success();
    inktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No commissions yet"));

    inktrack(&dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unknown_ids_fail_with_an_error() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    inktrack(&dir)
        .args(["advance", "c-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn hash_prints_the_reference_digest() {
    let dir = TempDir::new().unwrap();
    inktrack(&dir)
        .args(["hash", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
        ));
}

#[test]
fn sync_uploads_local_records() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, "a", "one");
    add(&dir, "b", "two");

    inktrack(&dir)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded 2 commissions"));
    assert!(dir.path().join(".inktrack/commissions.redb").exists());
}

#[test]
fn assist_degrades_to_notice_without_api_key() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "MomoChan", "Late-night monologue");

    // Point the assistant at an env var that is guaranteed unset.
    let config = "assistant:\n  api_key_env: INKTRACK_TEST_UNSET_KEY\n";
    std::fs::write(dir.path().join(".inktrack/config.yaml"), config).unwrap();

    inktrack(&dir)
        .env_remove("INKTRACK_TEST_UNSET_KEY")
        .args(["assist", "update", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("no API key configured"));
}
