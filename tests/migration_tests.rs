use geotask::db::initialize::init_db;
use geotask::db::pool::DbPool;
use geotask::db::queries::{get_task, insert_task, load_open_tasks};
use geotask::models::category::Category;
use geotask::models::location::Coordinate;
use geotask::models::priority::Priority;
use geotask::models::task::Task;
use rusqlite::Connection;

mod common;
use common::{gt, init_db_with_tasks, setup_test_db};

fn migration_rows(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |r| r.get(0),
    )
    .expect("count migrations")
}

#[test]
fn test_migration_recorded_exactly_once() {
    let db_path = setup_test_db("migration_once");
    init_db_with_tasks(&db_path);

    gt().args(["--db", &db_path, "db", "--migrate"]).assert().success();
    gt().args(["--db", &db_path, "list"]).assert().success();

    let conn = Connection::open(&db_path).expect("open");
    assert_eq!(migration_rows(&conn), 1);
}

#[test]
fn test_legacy_tasks_table_gains_intelligence_columns() {
    let db_path = setup_test_db("migration_legacy");
    let conn = Connection::open(&db_path).expect("open");

    // schema of a database created before categories and priorities existed
    conn.execute_batch(
        "CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
         );
         INSERT INTO tasks (text, latitude, longitude, completed, created_at)
         VALUES ('Old task', 51.5, -0.12, 0, '2025-01-01T10:00:00+00:00');",
    )
    .expect("legacy schema");

    init_db(&conn).expect("migrate");
    init_db(&conn).expect("migrate again");

    let t = get_task(&conn, 1).expect("legacy task");
    assert_eq!(t.category, Category::Personal);
    assert_eq!(t.priority, Priority::Medium);
    assert_eq!(migration_rows(&conn), 1);
}

#[test]
fn test_store_round_trip_through_pool() {
    let db_path = setup_test_db("migration_pool");
    let pool = DbPool::open(&db_path).expect("open pool");

    let task = Task::new("Buy stamps", Coordinate::new(51.5008, -0.1247))
        .with_category(Category::Errand)
        .with_priority(Priority::High);
    let id = insert_task(&pool.conn, &task).expect("insert");

    let open = load_open_tasks(&pool.conn).expect("load");
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, id);
    assert_eq!(open[0].category, Category::Errand);
    assert_eq!(open[0].priority, Priority::High);
    assert_eq!(open[0].coordinate, Coordinate::new(51.5008, -0.1247));
}
