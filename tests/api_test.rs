use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Days, Utc};
use library_checkout::adapters::mock::{LoanRepository, ReminderService};
use library_checkout::api::handlers::AppState;
use library_checkout::api::router::create_router;
use library_checkout::api::types::*;
use library_checkout::application::checkout::{ReminderTiming, ServiceDependencies};
use library_checkout::domain::loan::{Loan, MAX_OUTSTANDING_LOANS};
use library_checkout::domain::value_objects::*;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// ヘルパー関数
// ============================================================================

/// インメモリのアダプターでルーターを組み立てる
fn setup_app(repo: Arc<LoanRepository>) -> axum::Router {
    let service_deps = ServiceDependencies {
        loan_repository: repo,
        reminder_service: Arc::new(ReminderService::new()),
        reminder_timing: ReminderTiming::BeforeClaim,
    };

    create_router(Arc::new(AppState { service_deps }))
}

fn checkout_request(member_id: &str, isbn: &str) -> Request<Body> {
    let body = json!({ "member_id": member_id, "isbn": isbn });
    Request::builder()
        .method("POST")
        .uri("/checkouts")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// 正常系
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(Arc::new(LoanRepository::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_checkout_returns_created_loan() {
    let repo = Arc::new(LoanRepository::new());
    repo.add_copy(Isbn::new("isbn-1"), CopyId::new("copy-1"));
    let app = setup_app(repo.clone());

    let response = app
        .oneshot(checkout_request("member-1", "isbn-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let loan: LoanResponse = read_json(response).await;
    assert_eq!(loan.member_id, "member-1");
    assert_eq!(loan.isbn, "isbn-1");
    assert_eq!(loan.copy_id, "copy-1");
    assert!(!loan.was_returned);
    // 日付をまたいだ場合に備えて前後を許容
    let today = Utc::now().date_naive();
    assert!(
        loan.due_date == today + Days::new(14) || loan.due_date == today + Days::new(13),
        "unexpected due date {}",
        loan.due_date
    );

    assert_eq!(repo.loans().len(), 1);
}

// ============================================================================
// 異常系
// ============================================================================

#[tokio::test]
async fn test_checkout_without_copies_is_unprocessable() {
    let app = setup_app(Arc::new(LoanRepository::new()));

    let response = app
        .oneshot(checkout_request("member-1", "isbn-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "NO_COPIES_AVAILABLE");
}

#[tokio::test]
async fn test_checkout_over_limit_is_unprocessable() {
    let repo = Arc::new(LoanRepository::new());
    repo.add_copy(Isbn::new("isbn-1"), CopyId::new("copy-1"));
    let due_date = Utc::now().date_naive() + Days::new(7);
    for i in 0..MAX_OUTSTANDING_LOANS {
        repo.add_loan(Loan::new(
            MemberId::new("member-1"),
            Isbn::new(format!("isbn-held-{i}")),
            CopyId::new("copy-held"),
            due_date,
            false,
        ));
    }
    let app = setup_app(repo.clone());

    let response = app
        .oneshot(checkout_request("member-1", "isbn-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "TOO_MANY_CHECKED_OUT_BOOKS");
    assert_eq!(repo.loans().len(), MAX_OUTSTANDING_LOANS);
}

#[tokio::test]
async fn test_checkout_with_past_due_loan_is_unprocessable() {
    let repo = Arc::new(LoanRepository::new());
    repo.add_copy(Isbn::new("isbn-1"), CopyId::new("copy-1"));
    repo.add_loan(Loan::new(
        MemberId::new("member-1"),
        Isbn::new("isbn-old"),
        CopyId::new("copy-old"),
        Utc::now().date_naive() - Days::new(3),
        false,
    ));
    let app = setup_app(repo);

    let response = app
        .oneshot(checkout_request("member-1", "isbn-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "PAST_DUE_BOOKS");
}

#[tokio::test]
async fn test_checkout_with_blank_member_id_is_bad_request() {
    let app = setup_app(Arc::new(LoanRepository::new()));

    let response = app.oneshot(checkout_request("", "isbn-1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "BAD_REQUEST");
}

#[tokio::test]
async fn test_second_checkout_of_single_copy_is_unprocessable() {
    let repo = Arc::new(LoanRepository::new());
    repo.add_copy(Isbn::new("isbn-1"), CopyId::new("copy-1"));
    let app = setup_app(repo);

    let first = app
        .clone()
        .oneshot(checkout_request("member-1", "isbn-1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(checkout_request("member-2", "isbn-1"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
