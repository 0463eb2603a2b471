//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_failed, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/healthcheck").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_route_is_404_error() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/nope").await.unwrap();
    let message = assert_failed(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!message.is_empty());
}

// ============================================================================
// Signup / Login
// ============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();

    assert!(!account.user_id.is_empty());
    assert!(!account.token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/users/signup", &signup).await.unwrap();
    assert_failed(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_rejects_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut signup = SignupRequest::unique();
    signup.password = "alllowercase".to_string();

    let response = server.post("/api/users/signup", &signup).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();

    let login = LoginRequest {
        email: account.signup.email.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/users/login", &login).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Token failure trichotomy
// ============================================================================

#[tokio::test]
async fn test_missing_invalid_and_expired_tokens_are_distinguishable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();

    // Missing header
    let response = server.get("/api/users/profile").await.unwrap();
    let missing_msg = assert_failed(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Garbage token
    let response = server
        .get_auth("/api/users/profile", "not.a.token")
        .await
        .unwrap();
    let invalid_msg = assert_failed(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Expired token, signed with the real secret
    let secret = std::env::var("JWT_SECRET").unwrap();
    let expired_service = booking_common::JwtService::new(&secret, -1);
    let user_id = account.user_id.parse().unwrap();
    let expired_token = expired_service.generate_token(user_id).unwrap();

    let response = server
        .get_auth("/api/users/profile", &expired_token)
        .await
        .unwrap();
    let expired_msg = assert_failed(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_ne!(missing_msg, invalid_msg);
    assert_ne!(missing_msg, expired_msg);
    assert_ne!(invalid_msg, expired_msg);
}

// ============================================================================
// Role gate
// ============================================================================

#[tokio::test]
async fn test_coach_routes_reject_plain_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();

    let response = server
        .get_auth("/api/admin/coaches/courses", &account.token)
        .await
        .unwrap();
    assert_failed(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_promote_user_then_conflict_on_second_promotion() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();

    let path = format!("/api/admin/coaches/{}", account.user_id);
    let response = server.post(&path, &PromoteRequest::basic()).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post(&path, &PromoteRequest::basic()).await.unwrap();
    assert_failed(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Courses and bookings
// ============================================================================

#[tokio::test]
async fn test_public_course_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_open_course(&server, 5).await.unwrap();

    let response = server.get("/api/courses").await.unwrap();
    let courses: Vec<serde_json::Value> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!courses.is_empty());
    assert!(courses[0]["coach_name"].is_string());
    assert!(courses[0]["skill_name"].is_string());
}

#[tokio::test]
async fn test_booking_without_credits_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_id = create_open_course(&server, 5).await.unwrap();
    let account = create_account(&server).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/courses/{course_id}"), &account.token)
        .await
        .unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_booking_unknown_course_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 1).await.unwrap();

    let missing = uuid::Uuid::new_v4();
    let response = server
        .post_auth_empty(&format!("/api/courses/{missing}"), &account.token)
        .await
        .unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_double_booking_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_id = create_open_course(&server, 5).await.unwrap();
    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 3).await.unwrap();

    let path = format!("/api/courses/{course_id}");
    let response = server.post_auth_empty(&path, &account.token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth_empty(&path, &account.token).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_ended_course_is_never_bookable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Build an ended course by hand: coach, skill, past window
    let coach = create_coach(&server).await.unwrap();
    let response = server
        .post("/api/coaches/skill", &CreateSkillRequest::unique())
        .await
        .unwrap();
    let skill: SkillData = assert_data(response, StatusCode::OK).await.unwrap();

    let request = CreateCourseRequest::ended(&skill.id, 5);
    let response = server
        .post_auth("/api/admin/coaches/courses", &coach.token, &request)
        .await
        .unwrap();
    let course: CourseData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Plenty of seats and credits, but the window has passed
    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 3).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/courses/{}", course.id), &account.token)
        .await
        .unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_credit_exhaustion_and_recovery_after_cancel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_a = create_open_course(&server, 5).await.unwrap();
    let course_b = create_open_course(&server, 5).await.unwrap();
    let course_c = create_open_course(&server, 5).await.unwrap();

    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 2).await.unwrap();

    // Two credits, two bookings succeed
    let response = server
        .post_auth_empty(&format!("/api/courses/{course_a}"), &account.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/courses/{course_b}"), &account.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Third booking exceeds purchased credits
    let response = server
        .post_auth_empty(&format!("/api/courses/{course_c}"), &account.token)
        .await
        .unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Cancelling one booking frees a credit
    let response = server
        .delete_auth(&format!("/api/courses/{course_a}"), &account.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/courses/{course_c}"), &account.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_capacity_frees_up_after_cancellation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_id = create_open_course(&server, 1).await.unwrap();
    let path = format!("/api/courses/{course_id}");

    let user_a = create_account(&server).await.unwrap();
    let user_b = create_account(&server).await.unwrap();
    grant_credits(&server, &user_a, 1).await.unwrap();
    grant_credits(&server, &user_b, 1).await.unwrap();

    // A takes the only seat
    let response = server.post_auth_empty(&path, &user_a.token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // B is turned away
    let response = server.post_auth_empty(&path, &user_b.token).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();

    // A cancels, B gets the seat
    let response = server.delete_auth(&path, &user_a.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_auth_empty(&path, &user_b.token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_cancellation_is_not_repeatable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_id = create_open_course(&server, 5).await.unwrap();
    let path = format!("/api/courses/{course_id}");

    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 1).await.unwrap();

    let response = server.post_auth_empty(&path, &account.token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete_auth(&path, &account.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second cancellation finds no active booking
    let response = server.delete_auth(&path, &account.token).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_bookings_for_last_seat() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let course_id = create_open_course(&server, 1).await.unwrap();
    let path = format!("/api/courses/{course_id}");

    let user_a = create_account(&server).await.unwrap();
    let user_b = create_account(&server).await.unwrap();
    grant_credits(&server, &user_a, 1).await.unwrap();
    grant_credits(&server, &user_b, 1).await.unwrap();

    // Race both requests for the single seat; the row locks inside the
    // booking transaction must let exactly one through.
    let (res_a, res_b) = tokio::join!(
        server.post_auth_empty(&path, &user_a.token),
        server.post_auth_empty(&path, &user_b.token),
    );

    let status_a = res_a.unwrap().status();
    let status_b = res_b.unwrap().status();

    let successes = [status_a, status_b]
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let failures = [status_a, status_b]
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();

    assert_eq!(successes, 1, "exactly one booking must win the last seat");
    assert_eq!(failures, 1, "the loser must receive a client failure");
}

// ============================================================================
// Purchases
// ============================================================================

#[tokio::test]
async fn test_purchase_history() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = create_account(&server).await.unwrap();
    grant_credits(&server, &account, 2).await.unwrap();

    let response = server
        .get_auth("/api/users/credit-package", &account.token)
        .await
        .unwrap();
    let history: Vec<PurchaseHistoryRow> = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].purchased_credits, 2);
}

#[tokio::test]
async fn test_credit_package_validation_is_strict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let zero_credits = CreatePackageRequest {
        name: format!("package-{}", unique_suffix()),
        credit_amount: 0,
        price: 100.0,
    };
    let response = server.post("/api/credit-package", &zero_credits).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();

    let zero_price = CreatePackageRequest {
        name: format!("package-{}", unique_suffix()),
        credit_amount: 5,
        price: 0.0,
    };
    let response = server.post("/api/credit-package", &zero_price).await.unwrap();
    assert_failed(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_skill_and_package_names_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let skill = CreateSkillRequest::unique();
    let response = server.post("/api/coaches/skill", &skill).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.post("/api/coaches/skill", &skill).await.unwrap();
    assert_failed(response, StatusCode::CONFLICT).await.unwrap();

    let package = CreatePackageRequest::with_credits(5);
    let response = server.post("/api/credit-package", &package).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.post("/api/credit-package", &package).await.unwrap();
    assert_failed(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Coach views
// ============================================================================

#[tokio::test]
async fn test_owned_courses_report_participants_and_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let coach = create_coach(&server).await.unwrap();
    let response = server
        .post("/api/coaches/skill", &CreateSkillRequest::unique())
        .await
        .unwrap();
    let skill: SkillData = assert_data(response, StatusCode::OK).await.unwrap();

    let request = CreateCourseRequest::open(&skill.id, 5);
    let response = server
        .post_auth("/api/admin/coaches/courses", &coach.token, &request)
        .await
        .unwrap();
    let course: CourseData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let booker = create_account(&server).await.unwrap();
    grant_credits(&server, &booker, 1).await.unwrap();
    let response = server
        .post_auth_empty(&format!("/api/courses/{}", course.id), &booker.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/admin/coaches/courses", &coach.token)
        .await
        .unwrap();
    let courses: Vec<serde_json::Value> = assert_data(response, StatusCode::OK).await.unwrap();

    let found = courses
        .iter()
        .find(|c| c["id"].as_str() == Some(course.id.as_str()))
        .expect("created course must appear in the owned list");
    assert_eq!(found["participants"].as_i64(), Some(1));
    assert_eq!(found["status"].as_str(), Some("open"));
}
