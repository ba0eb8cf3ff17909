//! End-to-end pipeline tests for the sync and async combinator sets

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use outcome::{assert_error, assert_success, AsyncOutcome, Outcome};

#[derive(Clone, Debug, PartialEq)]
struct Order {
    id: u64,
    quantity: u32,
}

#[derive(Debug, PartialEq)]
enum OrderError {
    EmptyOrder,
    BadQuantity(String),
    OutOfStock { missing: u32 },
}

fn parse_quantity(raw: &str) -> Outcome<u32, OrderError> {
    Outcome::try_catch(
        || raw.parse::<u32>().unwrap(),
        |caught| OrderError::BadQuantity(caught.message().unwrap_or("unparseable").to_string()),
    )
}

fn check_stock(order: Order, stock: u32) -> Outcome<Order, OrderError> {
    Outcome::from_condition(
        order.quantity <= stock,
        || order.clone(),
        || OrderError::OutOfStock {
            missing: order.quantity - stock,
        },
    )
}

#[test]
fn test_sync_pipeline_happy_path() {
    let outcome = parse_quantity("3")
        .and_then(|quantity| {
            Outcome::from_condition(quantity > 0, move || quantity, || OrderError::EmptyOrder)
        })
        .map_success(|quantity| Order { id: 1, quantity })
        .and_then(|order| check_stock(order, 10));

    assert_success!(outcome, |order: Order| {
        assert_eq!(order.quantity, 3);
    });
}

#[test]
fn test_sync_pipeline_aborts_at_first_error() {
    let later_stages = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&later_stages);

    let outcome = parse_quantity("three")
        .map_success(move |quantity| {
            counter.fetch_add(1, Ordering::SeqCst);
            Order { id: 1, quantity }
        })
        .and_then(|order| check_stock(order, 10));

    assert_error!(outcome, |error: OrderError| {
        assert!(matches!(error, OrderError::BadQuantity(_)));
    });
    assert_eq!(later_stages.load(Ordering::SeqCst), 0);
}

#[test]
fn test_sync_pipeline_reports_domain_error_payload() {
    let order = Order {
        id: 9,
        quantity: 12,
    };

    let outcome = check_stock(order, 10);
    assert_eq!(
        outcome.into_error(),
        Some(OrderError::OutOfStock { missing: 2 })
    );
}

// Concrete scenarios from the combinator contract.

#[test]
fn test_map_success_doubles_payload() {
    let outcome = Outcome::<i32, String>::success(42).map_success(|v| v * 2);
    assert_eq!(outcome, Outcome::success(84));
}

#[test]
fn test_map_success_leaves_error_untouched() {
    let outcome = Outcome::<i32, &str>::error("x").map_success(|v| v * 2);
    assert_eq!(outcome, Outcome::error("x"));
}

#[test]
fn test_from_condition_false_skips_success_thunk() {
    let success_calls = std::cell::Cell::new(0u32);

    let outcome: Outcome<i32, &str> = Outcome::from_condition(
        false,
        || {
            success_calls.set(success_calls.get() + 1);
            1
        },
        || "no",
    );

    assert_eq!(outcome, Outcome::error("no"));
    assert_eq!(success_calls.get(), 0);
}

#[test]
fn test_and_then_into_try_catch_parse() {
    let outcome = Outcome::<_, String>::success("10").and_then(|s: &str| {
        Outcome::try_catch(|| s.parse::<i32>().unwrap(), |_| "bad".to_string())
    });

    assert_eq!(outcome, Outcome::success(10));
}

#[tokio::test]
async fn test_async_map_success_increments_payload() {
    let resolved = AsyncOutcome::<i32, String>::success(10)
        .map_success(|v| v + 1)
        .resolve()
        .await;

    assert_eq!(resolved, Outcome::success(11));
}

#[tokio::test]
async fn test_async_and_then_on_error_never_schedules_transform() {
    let transform_calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&transform_calls);

    let resolved = AsyncOutcome::<i32, String>::error("upstream".to_string())
        .and_then(move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            AsyncOutcome::success(v + 1)
        })
        .resolve()
        .await;

    assert_eq!(resolved, Outcome::error("upstream".to_string()));
    assert_eq!(transform_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_async_pipeline_mirrors_sync_pipeline() {
    async fn fetch_stock(_id: u64) -> Outcome<u32, OrderError> {
        Outcome::success(10)
    }

    let resolved = AsyncOutcome::new(fetch_stock(1))
        .and_then(|stock| {
            AsyncOutcome::from_outcome(
                parse_quantity("3")
                    .map_success(|quantity| Order { id: 1, quantity })
                    .and_then(move |order| check_stock(order, stock)),
            )
        })
        .map_success(|order| order.quantity * 25)
        .resolve()
        .await;

    assert_eq!(resolved, Outcome::success(75));
}

#[tokio::test]
async fn test_async_from_condition_awaits_single_branch() {
    let error_calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&error_calls);

    let resolved = AsyncOutcome::<u32, String>::from_condition(
        true,
        || async { 5 },
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { "unused".to_string() }
        },
    )
    .resolve()
    .await;

    assert_eq!(resolved, Outcome::success(5));
    assert_eq!(error_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_async_try_catch_converts_panicking_future() {
    let resolved: Outcome<u32, String> = AsyncOutcome::try_catch(
        || async {
            let parsed: u32 = "nope".parse().unwrap();
            parsed
        },
        |caught| format!("order lookup failed: {}", caught),
    )
    .resolve()
    .await;

    assert_error!(resolved, |error: String| {
        assert!(error.starts_with("order lookup failed"));
    });
}

#[tokio::test]
async fn test_async_fold_terminates_pipeline() {
    let summary = AsyncOutcome::<i32, String>::error("stock service down".to_string())
        .map_error(|e| format!("order rejected: {}", e))
        .fold(|v| format!("charged {}", v), |e| e)
        .await;

    assert_eq!(summary, "order rejected: stock service down");
}
