use geotask::models::location::Coordinate;
use geotask::tracking::notifier::Notifier;
use geotask::tracking::platform::PermissionState;
use geotask::tracking::proximity::{NearbyTask, ProximityChecker};
use std::rc::Rc;

mod common;
use common::{MemoryStore, RecordingNotifications, task};

fn nearby(id: i64, text: &str) -> NearbyTask {
    NearbyTask {
        task: task(id, text, 51.5008, -0.1247),
        distance_m: 13.0,
    }
}

#[tokio::test]
async fn test_notify_one_per_task() {
    let platform = Rc::new(RecordingNotifications::new(PermissionState::Granted));
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    let shown = notifier
        .notify(&[nearby(1, "Buy stamps"), nearby(2, "Post the letter")])
        .await;

    assert_eq!(shown, 2);
    assert_eq!(
        platform.shown.borrow().clone(),
        vec![
            ("Task nearby".to_string(), "Buy stamps".to_string()),
            ("Task nearby".to_string(), "Post the letter".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_notify_nothing_when_denied() {
    let platform = Rc::new(RecordingNotifications::new(PermissionState::Denied));
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 0);
    assert!(platform.shown.borrow().is_empty());
}

#[tokio::test]
async fn test_notify_nothing_while_still_prompting() {
    let platform = Rc::new(RecordingNotifications::new(PermissionState::Prompt));
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 0);
}

#[tokio::test]
async fn test_notify_nothing_when_unsupported() {
    let mut rec = RecordingNotifications::new(PermissionState::Granted);
    rec.supported = false;
    let platform = Rc::new(rec);
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 0);
    assert_eq!(notifier.ensure_permission().await, PermissionState::Denied);
}

#[tokio::test]
async fn test_notify_empty_list_is_a_no_op() {
    let platform = Rc::new(RecordingNotifications::new(PermissionState::Granted));
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.notify(&[]).await, 0);
    assert!(platform.shown.borrow().is_empty());
}

#[tokio::test]
async fn test_ensure_permission_asks_when_prompting() {
    let mut rec = RecordingNotifications::new(PermissionState::Prompt);
    rec.answer = PermissionState::Granted;
    let platform = Rc::new(rec);
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.ensure_permission().await, PermissionState::Granted);
    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 1);
}

#[tokio::test]
async fn test_ensure_permission_keeps_a_refusal() {
    let mut rec = RecordingNotifications::new(PermissionState::Prompt);
    rec.answer = PermissionState::Denied;
    let platform = Rc::new(rec);
    let notifier = Notifier::new(platform.clone(), "Task nearby");

    assert_eq!(notifier.ensure_permission().await, PermissionState::Denied);
    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 0);
}

#[tokio::test]
async fn test_show_failure_is_not_fatal() {
    let mut rec = RecordingNotifications::new(PermissionState::Granted);
    rec.fail_show = true;
    let notifier = Notifier::new(Rc::new(rec), "Task nearby");

    assert_eq!(notifier.notify(&[nearby(1, "Buy stamps")]).await, 0);
}

#[tokio::test]
async fn test_check_nearby_uses_open_tasks_only() {
    let mut done = task(2, "Already bought", 51.5008, -0.1247);
    done.completed = true;
    let store = Rc::new(MemoryStore::new(vec![
        task(1, "Buy stamps", 51.5008, -0.1247),
        done,
        task(3, "Visit museum", 51.5194, -0.1270),
    ]));

    let checker = ProximityChecker::new(store.clone(), 500.0);
    let found = checker.check_nearby(&Coordinate::new(51.5007, -0.1246)).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].task.text, "Buy stamps");
    assert!(found[0].distance_m < 20.0);
}

#[tokio::test]
async fn test_check_nearby_swallows_store_failure() {
    let store = Rc::new(MemoryStore::new(vec![task(1, "Buy stamps", 51.5008, -0.1247)]));
    store.fail.set(true);

    let checker = ProximityChecker::new(store.clone(), 500.0);
    let found = checker.check_nearby(&Coordinate::new(51.5007, -0.1246)).await;

    assert!(found.is_empty());
    assert_eq!(store.fetches.get(), 1);
}
