use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gt, init_db, init_db_with_tasks, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    gt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_tasks() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Buy stamps"))
        .stdout(contains("Return books"))
        .stdout(contains("Visit museum"));
}

#[test]
fn test_add_applies_suggestions() {
    let db_path = setup_test_db("cli_add_suggest");
    init_db(&db_path);

    gt().args([
        "--db",
        &db_path,
        "add",
        "urgent: call the doctor",
        "--lat",
        "51.5",
        "--lon",
        "-0.12",
    ])
    .assert()
    .success()
    .stdout(contains("Task #1 added"))
    .stdout(contains("health"))
    .stdout(contains("high"));
}

#[test]
fn test_add_explicit_values_win_over_suggestions() {
    let db_path = setup_test_db("cli_add_explicit");
    init_db(&db_path);

    gt().args([
        "--db",
        &db_path,
        "add",
        "urgent: call the doctor",
        "--lat",
        "51.5",
        "--lon",
        "-0.12",
        "--category",
        "work",
        "--priority",
        "l",
    ])
    .assert()
    .success()
    .stdout(contains("work"))
    .stdout(contains("low"));
}

#[test]
fn test_add_no_suggest_uses_defaults() {
    let db_path = setup_test_db("cli_add_nosuggest");
    init_db(&db_path);

    gt().args([
        "--db",
        &db_path,
        "add",
        "Buy milk at the grocery store",
        "--lat",
        "51.5",
        "--lon",
        "-0.12",
        "--no-suggest",
    ])
    .assert()
    .success()
    .stdout(contains("personal"))
    .stdout(contains("medium"))
    .stdout(contains("Place mentioned").not());
}

#[test]
fn test_add_requires_a_location() {
    let db_path = setup_test_db("cli_add_noloc");
    init_db(&db_path);

    gt().args(["--db", &db_path, "add", "Buy milk"])
        .assert()
        .failure()
        .stderr(contains("Missing location"));
}

#[test]
fn test_add_rejects_out_of_range_coordinates() {
    let db_path = setup_test_db("cli_add_range");
    init_db(&db_path);

    gt().args(["--db", &db_path, "add", "Buy milk", "--lat", "95", "--lon", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_add_rejects_unknown_category() {
    let db_path = setup_test_db("cli_add_badcat");
    init_db(&db_path);

    gt().args([
        "--db", &db_path, "add", "Buy milk", "--lat", "51.5", "--lon", "-0.12", "--category",
        "chores",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid category"));
}

#[test]
fn test_done_hides_task_from_default_list() {
    let db_path = setup_test_db("cli_done");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "done", "1"])
        .assert()
        .success()
        .stdout(contains("Task #1 done"));

    gt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Buy stamps").not())
        .stdout(contains("Return books"));

    gt().args(["--db", &db_path, "list", "--completed"])
        .assert()
        .success()
        .stdout(contains("Buy stamps"))
        .stdout(contains("Return books").not());

    gt().args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Buy stamps"))
        .stdout(contains("Return books"));

    gt().args(["--db", &db_path, "done", "1", "--undo"])
        .assert()
        .success()
        .stdout(contains("reopened"));

    gt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Buy stamps"));
}

#[test]
fn test_done_unknown_task_fails() {
    let db_path = setup_test_db("cli_done_missing");
    init_db(&db_path);

    gt().args(["--db", &db_path, "done", "42"])
        .assert()
        .failure()
        .stderr(contains("No task with id 42"));
}

#[test]
fn test_list_near_sorts_by_distance() {
    let db_path = setup_test_db("cli_list_near");
    init_db_with_tasks(&db_path);

    let out = gt()
        .args(["--db", &db_path, "list", "--near", "51.5194,-0.1270"])
        .assert()
        .success()
        .stdout(contains("DISTANCE"))
        .get_output()
        .stdout
        .clone();

    let out = String::from_utf8_lossy(&out);
    let museum = out.find("Visit museum").expect("museum listed");
    let stamps = out.find("Buy stamps").expect("stamps listed");
    assert!(museum < stamps, "closest task must come first:\n{out}");
}

#[test]
fn test_edit_task() {
    let db_path = setup_test_db("cli_edit");
    init_db_with_tasks(&db_path);

    gt().args([
        "--db",
        &db_path,
        "edit",
        "2",
        "--text",
        "Return library books",
        "--priority",
        "high",
    ])
    .assert()
    .success()
    .stdout(contains("Task #2 updated: Return library books"));

    gt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Return library books"));

    gt().args(["--db", &db_path, "edit", "2"])
        .assert()
        .failure()
        .stderr(contains("Nothing to change"));
}

#[test]
fn test_del_with_yes() {
    let db_path = setup_test_db("cli_del");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "del", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Task #3 has been deleted"));

    gt().args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Visit museum").not());
}

#[test]
fn test_del_without_confirmation_keeps_task() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "del", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    gt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Visit museum"));
}

#[test]
fn test_bookmarks() {
    let db_path = setup_test_db("cli_bookmarks");
    init_db(&db_path);

    gt().args([
        "--db", &db_path, "bookmark", "add", "Office", "--lat", "51.5033", "--lon", "-0.1195",
    ])
    .assert()
    .success()
    .stdout(contains("Bookmark 'Office' saved"));

    gt().args([
        "--db", &db_path, "bookmark", "add", "office", "--lat", "51.5", "--lon", "-0.1",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));

    gt().args(["--db", &db_path, "bookmark", "list"])
        .assert()
        .success()
        .stdout(contains("Office"))
        .stdout(contains("51.503300, -0.119500"));

    gt().args(["--db", &db_path, "add", "Hand in the report", "--at", "office"])
        .assert()
        .success()
        .stdout(contains("51.503300, -0.119500"));

    gt().args(["--db", &db_path, "bookmark", "del", "Office"])
        .assert()
        .success();

    gt().args(["--db", &db_path, "add", "Hand in the report", "--at", "Office"])
        .assert()
        .failure()
        .stderr(contains("No bookmark named 'Office'"));
}

#[test]
fn test_nearby_lists_tasks_within_radius() {
    let db_path = setup_test_db("cli_nearby");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "nearby", "--lat", "51.5007", "--lon", "-0.1246"])
        .assert()
        .success()
        .stdout(contains("Buy stamps"))
        .stdout(contains("Return books"))
        .stdout(contains("Visit museum").not());

    gt().args([
        "--db", &db_path, "nearby", "--lat", "51.5007", "--lon", "-0.1246", "--radius", "100",
    ])
    .assert()
    .success()
    .stdout(contains("Buy stamps"))
    .stdout(contains("Return books").not());
}

#[test]
fn test_nearby_notify_prints_notifications() {
    let db_path = setup_test_db("cli_nearby_notify");
    init_db_with_tasks(&db_path);

    gt().args([
        "--db", &db_path, "nearby", "--lat", "51.5007", "--lon", "-0.1246", "--radius", "100",
        "--notify",
    ])
    .assert()
    .success()
    .stdout(contains("Task nearby:"))
    .stdout(contains("Buy stamps"));

    gt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("notify"));
}

#[test]
fn test_nearby_nothing_close() {
    let db_path = setup_test_db("cli_nearby_none");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "nearby", "--lat", "48.8584", "--lon", "2.2945"])
        .assert()
        .success()
        .stdout(contains("No open tasks within 500 m"));
}

#[test]
fn test_suggest_command() {
    gt().args(["suggest", "Buy milk at the grocery store"])
        .assert()
        .success()
        .stdout(contains("shopping"))
        .stdout(contains("the grocery store"))
        .stdout(contains("Next steps"));

    gt().args(["suggest", "urgent: call the doctor", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""category": "health""#))
        .stdout(contains(r#""priority": "high""#));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "done", "2"]).assert().success();

    gt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("done"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "done", "1"]).assert().success();

    gt().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("(2 open, 1 done)"))
        .stdout(contains("Integrity check passed"));
}
