//! Test fixtures and data generators
//!
//! Provides reusable test data and flow helpers for integration tests.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::helpers::{assert_data, TestServer};
use reqwest::StatusCode;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique within this run and across reruns on the same database
pub fn unique_suffix() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    let base = *BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    base + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Response envelope wrapper
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

// ============================================================================
// Requests
// ============================================================================

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("user{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Promote-to-coach request
#[derive(Debug, Serialize)]
pub struct PromoteRequest {
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
}

impl PromoteRequest {
    pub fn basic() -> Self {
        Self {
            experience_years: 3,
            description: "Certified trainer".to_string(),
            profile_image_url: None,
        }
    }
}

/// Create-skill request
#[derive(Debug, Serialize)]
pub struct CreateSkillRequest {
    pub name: String,
}

impl CreateSkillRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("skill-{}", unique_suffix()),
        }
    }
}

/// Create-credit-package request
#[derive(Debug, Serialize)]
pub struct CreatePackageRequest {
    pub name: String,
    pub credit_amount: i32,
    pub price: f64,
}

impl CreatePackageRequest {
    pub fn with_credits(credit_amount: i32) -> Self {
        Self {
            name: format!("package-{}", unique_suffix()),
            credit_amount,
            price: 100.0 * f64::from(credit_amount),
        }
    }
}

/// Create-course request
#[derive(Debug, Serialize)]
pub struct CreateCourseRequest {
    pub skill_id: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub meeting_url: Option<String>,
}

impl CreateCourseRequest {
    /// A course open for booking right now
    pub fn open(skill_id: &str, max_participants: i32) -> Self {
        let now = Utc::now();
        Self {
            skill_id: skill_id.to_string(),
            name: format!("course-{}", unique_suffix()),
            description: "Test course".to_string(),
            start_at: now - Duration::hours(1),
            end_at: now + Duration::hours(1),
            max_participants,
            meeting_url: None,
        }
    }

    /// A course whose window is entirely in the past
    pub fn ended(skill_id: &str, max_participants: i32) -> Self {
        let now = Utc::now();
        Self {
            skill_id: skill_id.to_string(),
            name: format!("course-{}", unique_suffix()),
            description: "Ended course".to_string(),
            start_at: now - Duration::days(2),
            end_at: now - Duration::days(1),
            max_participants,
            meeting_url: None,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Signup payload
#[derive(Debug, Deserialize)]
pub struct SignupData {
    pub user: SignupUser,
}

#[derive(Debug, Deserialize)]
pub struct SignupUser {
    pub id: String,
    pub name: String,
}

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub name: String,
}

/// Skill payload
#[derive(Debug, Deserialize)]
pub struct SkillData {
    pub id: String,
    pub name: String,
}

/// Credit package payload
#[derive(Debug, Deserialize)]
pub struct PackageData {
    pub id: String,
    pub name: String,
    pub credit_amount: i32,
    pub price: f64,
}

/// Course payload
#[derive(Debug, Deserialize)]
pub struct CourseData {
    pub id: String,
    pub name: String,
    pub max_participants: i32,
}

/// Purchase-history row
#[derive(Debug, Deserialize)]
pub struct PurchaseHistoryRow {
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub name: String,
}

// ============================================================================
// Flow helpers
// ============================================================================

/// A signed-up, logged-in account
pub struct TestAccount {
    pub user_id: String,
    pub token: String,
    pub signup: SignupRequest,
}

/// Sign up and log in a fresh user
pub async fn create_account(server: &TestServer) -> Result<TestAccount> {
    let signup = SignupRequest::unique();

    let response = server.post("/api/users/signup", &signup).await?;
    let data: SignupData = assert_data(response, StatusCode::CREATED).await?;

    let response = server
        .post("/api/users/login", &LoginRequest::from_signup(&signup))
        .await?;
    let login: LoginData = assert_data(response, StatusCode::CREATED).await?;

    Ok(TestAccount {
        user_id: data.user.id,
        token: login.token,
        signup,
    })
}

/// Sign up a user, promote them to coach, and log them in
pub async fn create_coach(server: &TestServer) -> Result<TestAccount> {
    let account = create_account(server).await?;

    let response = server
        .post(
            &format!("/api/admin/coaches/{}", account.user_id),
            &PromoteRequest::basic(),
        )
        .await?;
    let _: serde_json::Value = assert_data(response, StatusCode::CREATED).await?;

    // Re-login is not needed: the token carries only the user id and the
    // role is read from the database on every request.
    Ok(account)
}

/// Create a skill and a course owned by a fresh coach; returns the course id
pub async fn create_open_course(server: &TestServer, max_participants: i32) -> Result<String> {
    let coach = create_coach(server).await?;

    let response = server.post("/api/coaches/skill", &CreateSkillRequest::unique()).await?;
    let skill: SkillData = assert_data(response, StatusCode::OK).await?;

    let request = CreateCourseRequest::open(&skill.id, max_participants);
    let response = server
        .post_auth("/api/admin/coaches/courses", &coach.token, &request)
        .await?;
    let course: CourseData = assert_data(response, StatusCode::CREATED).await?;

    Ok(course.id)
}

/// Give an account purchasable credits: creates a package and buys it
pub async fn grant_credits(server: &TestServer, account: &TestAccount, credits: i32) -> Result<()> {
    let response = server
        .post("/api/credit-package", &CreatePackageRequest::with_credits(credits))
        .await?;
    let package: PackageData = assert_data(response, StatusCode::OK).await?;

    let response = server
        .post_auth_empty(&format!("/api/credit-package/{}", package.id), &account.token)
        .await?;
    let _: serde_json::Value = assert_data(response, StatusCode::OK).await?;

    Ok(())
}
