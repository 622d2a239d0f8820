/*!
 * Polling Tests
 * Membership discovery and announcement through the public API
 */

use hobbler::{channel, poll_and_publish, read_members, PidSet, PollError, TASKS_FILE};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn fake_tarpit() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(TASKS_FILE), "").unwrap();
    dir
}

#[tokio::test]
async fn test_membership_matches_the_file_exactly() {
    let dir = fake_tarpit();
    fs::write(dir.path().join(TASKS_FILE), "123\n124\n").unwrap();

    let pids = read_members(dir.path()).await.unwrap();
    assert_eq!(pids, PidSet::from([123, 124]));
}

#[tokio::test]
async fn test_membership_when_empty() {
    let dir = fake_tarpit();
    let pids = read_members(dir.path()).await.unwrap();
    assert_eq!(pids, PidSet::new());
}

#[tokio::test]
async fn test_polling_an_unchanged_file_twice_yields_the_same_set() {
    let dir = fake_tarpit();
    fs::write(dir.path().join(TASKS_FILE), "7\n8\n").unwrap();

    let first = read_members(dir.path()).await.unwrap();
    let second = read_members(dir.path()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_poll_announces_the_set_on_the_channel() {
    let dir = fake_tarpit();
    fs::write(dir.path().join(TASKS_FILE), "1\n2\n").unwrap();
    let (publisher, mut subscriber) = channel();

    poll_and_publish(dir.path(), &publisher).await.unwrap();

    assert_eq!(subscriber.recv().await, Ok(PidSet::from([1, 2])));
}

#[tokio::test]
async fn test_only_the_newest_poll_survives_on_the_channel() {
    let dir = fake_tarpit();
    let (publisher, mut subscriber) = channel();

    fs::write(dir.path().join(TASKS_FILE), "1\n").unwrap();
    poll_and_publish(dir.path(), &publisher).await.unwrap();

    fs::write(dir.path().join(TASKS_FILE), "2\n").unwrap();
    poll_and_publish(dir.path(), &publisher).await.unwrap();

    // The first announcement was overwritten, never queued
    assert_eq!(subscriber.try_latest(), Some(PidSet::from([2])));
    assert_eq!(subscriber.try_latest(), None);
}

#[tokio::test]
async fn test_a_rewritten_file_replaces_the_membership() {
    let dir = fake_tarpit();
    let (publisher, mut subscriber) = channel();

    fs::write(dir.path().join(TASKS_FILE), "10\n").unwrap();
    poll_and_publish(dir.path(), &publisher).await.unwrap();
    assert_eq!(subscriber.try_latest(), Some(PidSet::from([10])));

    fs::write(dir.path().join(TASKS_FILE), "").unwrap();
    poll_and_publish(dir.path(), &publisher).await.unwrap();
    assert_eq!(subscriber.try_latest(), Some(PidSet::new()));
}

#[tokio::test]
async fn test_removed_source_fails_the_poll() {
    let dir = tempfile::tempdir().unwrap();
    let (publisher, _subscriber) = channel();

    let err = poll_and_publish(dir.path(), &publisher).await.unwrap_err();
    assert!(matches!(err, PollError::Read { .. }));
}
