//! Pagination extractor
//!
//! Extracts `per` / `page` query parameters for paged catalogue listings.
//! Both are required and must be strictly positive integers.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Maximum page size
const MAX_PER: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
struct PageQueryParams {
    #[serde(default)]
    per: Option<String>,
    #[serde(default)]
    page: Option<String>,
}

/// Validated `per` / `page` pagination
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    /// Page size (1 to 100)
    pub per: i64,
    /// 1-based page number
    pub page: i64,
}

fn parse_positive(input: Option<String>, name: &str) -> Result<i64, ApiError> {
    input
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::invalid_query(format!("'{name}' must be a positive integer")))
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let per = parse_positive(params.per, "per")?.min(MAX_PER);
        let page = parse_positive(params.page, "page")?;

        Ok(PageQuery { per, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(Some("10".to_string()), "per").unwrap(), 10);
        assert!(parse_positive(Some("0".to_string()), "per").is_err());
        assert!(parse_positive(Some("-3".to_string()), "per").is_err());
        assert!(parse_positive(Some("abc".to_string()), "per").is_err());
        assert!(parse_positive(None, "per").is_err());
    }
}
