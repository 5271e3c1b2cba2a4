//! The activities API seam.
//!
//! Front ends inject an [`ActivityApi`] implementation into the board. The
//! response interpretation helpers here are shared by every HTTP client so
//! that all of them agree on what counts as success.

use board_types::{ActivityCatalog, ErrorResponse, MessageResponse};

use crate::endpoints::Mutation;
use crate::error::{BoardError, Result};

/// Shown when a 2xx mutation response carries no `message`.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request completed";

/// Client for the activities API.
///
/// Futures are not required to be `Send`; the board runs on a single
/// threaded event loop.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityCatalog>;

    /// Issue a signup or unregister request and return the server message.
    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> Result<String>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        self.mutate(Mutation::Signup, activity, email).await
    }

    /// `POST /activities/{name}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        self.mutate(Mutation::Unregister, activity, email).await
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the error for a non-2xx response.
fn application_error(status: u16, body: &str) -> Result<BoardError> {
    let error: ErrorResponse = serde_json::from_str(body)?;
    Ok(BoardError::Application {
        status,
        detail: error.detail_text().map(str::to_string),
    })
}

/// Interpret a `GET /activities` response.
pub fn parse_catalog(status: u16, body: &str) -> Result<ActivityCatalog> {
    if !is_success(status) {
        return Err(application_error(status, body)?);
    }
    Ok(serde_json::from_str(body)?)
}

/// Interpret a signup/unregister response, returning the success message.
pub fn interpret_mutation(status: u16, body: &str) -> Result<String> {
    if !is_success(status) {
        return Err(application_error(status, body)?);
    }
    let response: MessageResponse = serde_json::from_str(body)?;
    Ok(response
        .message
        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_catalog_success() {
        let body = r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []}}"#;
        let catalog = parse_catalog(200, body).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_catalog_invalid_json() {
        let err = parse_catalog(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, BoardError::Parse(_)));
    }

    #[test]
    fn test_parse_catalog_error_status() {
        let err = parse_catalog(503, r#"{"detail": "Maintenance"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.user_message("fallback"), "Maintenance");
    }

    #[test]
    fn test_interpret_mutation_success() {
        let message = interpret_mutation(200, r#"{"message": "Signed up"}"#).unwrap();
        assert_eq!(message, "Signed up");
    }

    #[test]
    fn test_interpret_mutation_success_without_message() {
        let message = interpret_mutation(200, "{}").unwrap();
        assert_eq!(message, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_interpret_mutation_application_error() {
        let err = interpret_mutation(400, r#"{"detail": "Already signed up"}"#).unwrap_err();
        match err {
            BoardError::Application { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Already signed up"));
            }
            other => panic!("Wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_interpret_mutation_error_without_detail() {
        let err = interpret_mutation(500, r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Application {
                status: 500,
                detail: None
            }
        ));
    }

    #[test]
    fn test_interpret_mutation_error_with_unparseable_body() {
        let err = interpret_mutation(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkOrParse);
    }
}
