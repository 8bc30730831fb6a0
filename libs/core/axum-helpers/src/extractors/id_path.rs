//! Numeric id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a positive `u64` id in the single path parameter.
///
/// Non-numeric, negative, zero, or out-of-range segments are rejected with
/// `400 invalid id param` before the handler runs.
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn show(IdPath(id): IdPath) -> String {
///     format!("task {id}")
/// }
///
/// let app: Router = Router::new().route("/tasks/{id}", get(show));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u64);

impl IdPath {
    /// Parse a raw path segment; `None` unless it is all ASCII digits and
    /// greater than zero. A sign (`+1`) is rejected.
    pub fn parse(raw: &str) -> Option<u64> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<u64>().ok().filter(|id| *id > 0)
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Self::parse(&raw) {
            Some(id) => Ok(IdPath(id)),
            None => Err(AppError::InvalidId(raw).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(IdPath::parse("1"), Some(1));
        assert_eq!(IdPath::parse("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for raw in [
            "0",
            "-1",
            "+1",
            "+0",
            "abc",
            "1.5",
            "",
            " 1",
            "1 ",
            "18446744073709551616",
        ] {
            assert_eq!(IdPath::parse(raw), None, "{raw:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_extractor_rejects_with_bad_request() {
        async fn echo(IdPath(id): IdPath) -> String {
            id.to_string()
        }

        let app: Router = Router::new().route("/items/{id}", get(echo));

        let ok = app
            .clone()
            .oneshot(Request::get("/items/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let bad = app
            .oneshot(Request::get("/items/zero").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }
}
