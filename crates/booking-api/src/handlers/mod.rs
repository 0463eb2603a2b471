//! Route handlers
//!
//! All HTTP request handlers organized by domain. Handlers stay thin:
//! extract, delegate to a service, wrap the result in the envelope.

pub mod admin;
pub mod coaches;
pub mod courses;
pub mod credit_packages;
pub mod health;
pub mod skills;
pub mod users;
