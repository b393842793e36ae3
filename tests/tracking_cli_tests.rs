use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gt, init_db, init_db_with_tasks, replay_file, setup_test_db};

#[test]
fn test_locate_from_replay_file() {
    let walk = replay_file("locate_walk", &["# start", "51.5007,-0.1246,0,5"]);

    gt().args(["locate", "--source", &walk])
        .assert()
        .success()
        .stdout(contains("Current position: 51.500700, -0.124600"))
        .stdout(contains("±5 m"));
}

#[test]
fn test_locate_from_stdin() {
    gt().args(["locate", "--source", "-"])
        .write_stdin("48.8584,2.2945,1000\n")
        .assert()
        .success()
        .stdout(contains("48.858400, 2.294500"));
}

#[test]
fn test_locate_without_source_is_unsupported() {
    gt().args(["locate"])
        .assert()
        .failure()
        .stderr(contains("Location services are not available"));
}

#[test]
fn test_locate_reports_timeout() {
    let walk = replay_file("locate_timeout", &[r#"{"error":"timeout"}"#]);

    gt().args(["locate", "--source", &walk])
        .assert()
        .failure()
        .stderr(contains("Timed out after 10000 ms"));
}

#[test]
fn test_add_here_uses_current_position() {
    let db_path = setup_test_db("tracking_add_here");
    init_db(&db_path);
    let walk = replay_file("add_here_walk", &["51.5033,-0.1195,0"]);

    gt().args([
        "--db", &db_path, "add", "Return books", "--here", "--source", &walk,
    ])
    .assert()
    .success()
    .stdout(contains("51.503300, -0.119500"));
}

#[test]
fn test_nearby_here() {
    let db_path = setup_test_db("tracking_nearby_here");
    init_db_with_tasks(&db_path);
    let walk = replay_file("nearby_here_walk", &["51.5194,-0.1270,0"]);

    gt().args(["--db", &db_path, "nearby", "--here", "--source", &walk])
        .assert()
        .success()
        .stdout(contains("Visit museum"))
        .stdout(contains("Buy stamps").not());
}

#[test]
fn test_watch_replay_notifies_nearby_tasks() {
    let db_path = setup_test_db("tracking_watch");
    init_db_with_tasks(&db_path);

    let walk = replay_file(
        "watch_walk",
        &[
            "# Big Ben, then a step, then the museum",
            "51.5007,-0.1246,0",
            "51.50071,-0.1246,500",
            r#"{"error":"unavailable","message":"lost signal"}"#,
            "51.5194,-0.1270,120000",
        ],
    );

    gt().args(["--db", &db_path, "watch", "--source", &walk])
        .assert()
        .success()
        .stdout(contains("Task nearby:"))
        .stdout(contains("Buy stamps"))
        .stdout(contains("Return books"))
        .stdout(contains("Visit museum"))
        .stdout(contains("lost signal"))
        .stdout(contains("2 proximity check(s) run"));

    gt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("watch"))
        .stdout(contains("notify"));
}

#[test]
fn test_watch_skips_completed_tasks() {
    let db_path = setup_test_db("tracking_watch_done");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "done", "1"]).assert().success();

    let walk = replay_file("watch_done_walk", &["51.5007,-0.1246,0"]);

    gt().args(["--db", &db_path, "watch", "--source", &walk])
        .assert()
        .success()
        .stdout(contains("Return books"))
        .stdout(contains("Buy stamps").not());
}

#[test]
fn test_watch_without_source_fails_cleanly() {
    let db_path = setup_test_db("tracking_watch_nosource");
    init_db(&db_path);

    gt().args(["--db", &db_path, "watch"])
        .assert()
        .failure()
        .stderr(contains("Location services are not available"));
}

#[test]
fn test_watch_from_stdin() {
    let db_path = setup_test_db("tracking_watch_stdin");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "watch", "--source", "-"])
        .write_stdin("51.5007,-0.1246,0\n")
        .assert()
        .success()
        .stdout(contains("Buy stamps"))
        .stdout(contains("1 proximity check(s) run"));
}
