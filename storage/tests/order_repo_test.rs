//! Integration tests for [`storage::OrderRepository`].
//!
//! Covers insert, pending listing, unconditional and conditional status updates, and
//! message-id attachment using a temporary SQLite file per test.

use storage::{NewOrder, OrderRepository, OrderStatus, OrderStore, StorageError};
use tempfile::TempDir;

async fn open_repo() -> (OrderRepository, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("orders.db");
    let repo = OrderRepository::new(path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create repository");
    (repo, dir)
}

fn draft(product: &str, expire_at: i64) -> NewOrder {
    NewOrder {
        product: product.to_string(),
        customer_info: "<@111111111111111111>".to_string(),
        customer_id: Some("111111111111111111".to_string()),
        price: "100".to_string(),
        note: "No note".to_string(),
        expire_at,
        channel_id: "222222222222222222".to_string(),
        created_at: 1_000,
    }
}

/// **Test: Insert assigns increasing ids and stores the draft as pending without a message id.**
#[tokio::test]
async fn test_insert_order_persists_pending_draft() {
    let (repo, _dir) = open_repo().await;

    let first = repo.insert_order(&draft("Ticket #1", 5_000)).await.unwrap();
    let second = repo.insert_order(&draft("Ticket #2", 6_000)).await.unwrap();
    assert!(second > first);

    let order = repo.get_order(first).await.unwrap().expect("order exists");
    assert_eq!(order.id, first);
    assert_eq!(order.product, "Ticket #1");
    assert_eq!(order.customer_info, "<@111111111111111111>");
    assert_eq!(order.customer_id.as_deref(), Some("111111111111111111"));
    assert_eq!(order.note, "No note");
    assert_eq!(order.expire_at, 5_000);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.message_id, None);
    assert_eq!(order.created_at, 1_000);
}

/// **Test: get_order returns None for an unknown id.**
#[tokio::test]
async fn test_get_order_not_found() {
    let (repo, _dir) = open_repo().await;

    assert!(repo.get_order(404).await.unwrap().is_none());
}

/// **Test: get_pending_orders returns only pending rows, earliest deadline first.**
#[tokio::test]
async fn test_get_pending_orders_filters_terminal() {
    let (repo, _dir) = open_repo().await;

    let late = repo.insert_order(&draft("late", 9_000)).await.unwrap();
    let done = repo.insert_order(&draft("done", 1_500)).await.unwrap();
    let early = repo.insert_order(&draft("early", 2_000)).await.unwrap();
    repo.update_status(done, OrderStatus::Accepted).await.unwrap();

    let pending = repo.get_pending_orders().await.unwrap();
    let ids: Vec<i64> = pending.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![early, late]);
}

/// **Test: update_status overwrites unconditionally and is idempotent in effect.**
#[tokio::test]
async fn test_update_status_overwrites() {
    let (repo, _dir) = open_repo().await;
    let id = repo.insert_order(&draft("Ticket", 5_000)).await.unwrap();

    assert!(repo.update_status(id, OrderStatus::Denied).await.unwrap());
    assert!(repo.update_status(id, OrderStatus::Denied).await.unwrap());
    assert_eq!(
        repo.get_order(id).await.unwrap().unwrap().status,
        OrderStatus::Denied
    );

    assert!(!repo.update_status(999, OrderStatus::Denied).await.unwrap());
}

/// **Test: Only the first terminal transition wins; later ones leave the status untouched.**
#[tokio::test]
async fn test_transition_from_pending_wins_once() {
    let (repo, _dir) = open_repo().await;
    let id = repo.insert_order(&draft("Ticket", 5_000)).await.unwrap();

    assert!(repo
        .transition_from_pending(id, OrderStatus::Accepted)
        .await
        .unwrap());
    assert!(!repo
        .transition_from_pending(id, OrderStatus::Expired)
        .await
        .unwrap());
    assert!(!repo
        .transition_from_pending(id, OrderStatus::Denied)
        .await
        .unwrap());

    assert_eq!(
        repo.get_order(id).await.unwrap().unwrap().status,
        OrderStatus::Accepted
    );
}

/// **Test: Transitioning back to pending is refused.**
#[tokio::test]
async fn test_transition_to_pending_is_rejected() {
    let (repo, _dir) = open_repo().await;
    let id = repo.insert_order(&draft("Ticket", 5_000)).await.unwrap();

    let err = repo
        .transition_from_pending(id, OrderStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidStatus(_)));
}

/// **Test: The message id is attached once and stays stable.**
#[tokio::test]
async fn test_attach_message_id_once() {
    let (repo, _dir) = open_repo().await;
    let id = repo.insert_order(&draft("Ticket", 5_000)).await.unwrap();

    assert!(repo.attach_message_id(id, "333").await.unwrap());
    assert!(!repo.attach_message_id(id, "444").await.unwrap());
    assert!(!repo.attach_message_id(999, "555").await.unwrap());

    let order = repo.get_order(id).await.unwrap().unwrap();
    assert_eq!(order.message_id.as_deref(), Some("333"));
}

/// **Test: Status text round-trips through FromStr/Display.**
#[test]
fn test_order_status_parse() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Denied,
        OrderStatus::Expired,
    ] {
        assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
    }
    assert!("cancelled".parse::<OrderStatus>().is_err());
    assert!(!OrderStatus::Pending.is_terminal());
    assert!(OrderStatus::Expired.is_terminal());
}

/// **Test: Remaining time counts down from the stored deadline and goes negative once overdue.**
#[tokio::test]
async fn test_remaining_ms_from_stored_deadline() {
    let (repo, _dir) = open_repo().await;
    let id = repo.insert_order(&draft("Ticket #1", 5_000)).await.unwrap();
    let order = repo.get_order(id).await.unwrap().unwrap();

    assert_eq!(order.remaining_ms(1_000), 4_000);
    assert_eq!(order.remaining_ms(5_000), 0);
    assert_eq!(order.remaining_ms(6_500), -1_500);
}
