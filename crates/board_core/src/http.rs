//! Native HTTP client for the activities API.

use board_types::ActivityCatalog;
use tracing::debug;

use crate::api::{ActivityApi, interpret_mutation, parse_catalog};
use crate::endpoints::{Endpoints, Mutation};
use crate::error::Result;

/// [`ActivityApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    endpoints: Endpoints,
    client: reqwest::Client,
}

impl HttpActivityApi {
    /// Create a client for the API served at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing a configured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            endpoints: Endpoints::new(base_url)?,
            client,
        })
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String)> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let url = self.endpoints.activities();
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let (status, body) = Self::read(response).await?;
        parse_catalog(status, &body)
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoints.mutation(mutation, activity, email);
        debug!(%url, "POST");

        let response = self.client.post(url).send().await?;
        let (status, body) = Self::read(response).await?;
        interpret_mutation(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoardError, ErrorKind};
    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::{HeaderName, StatusCode, header::CONTENT_TYPE},
        routing::{get, post},
    };
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    #[derive(Deserialize)]
    struct EmailQuery {
        email: String,
    }

    // Written out by hand: `json!` would sort the keys.
    const ACTIVITIES_BODY: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu"]
        },
        "Art Studio": {
            "description": "Painting",
            "schedule": "Wednesdays",
            "max_participants": 15,
            "participants": []
        }
    }"#;

    async fn list_activities() -> ([(HeaderName, &'static str); 1], &'static str) {
        ([(CONTENT_TYPE, "application/json")], ACTIVITIES_BODY)
    }

    async fn signup(
        Path(name): Path<String>,
        Query(query): Query<EmailQuery>,
    ) -> (StatusCode, Json<Value>) {
        match name.as_str() {
            "Chess Club" if query.email == "michael@mergington.edu" => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Student already signed up" })),
            ),
            "Chess Club" => (
                StatusCode::OK,
                Json(json!({ "message": format!("Signed up {} for {}", query.email, name) })),
            ),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Activity not found" })),
            ),
        }
    }

    async fn unregister() -> (StatusCode, &'static str) {
        (StatusCode::BAD_GATEWAY, "upstream unavailable")
    }

    async fn spawn_activities_server() -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new()
            .route("/activities", get(list_activities))
            .route("/activities/:name/signup", post(signup))
            .route("/activities/:name/unregister", post(unregister));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{addr}"))
    }

    fn local_api(base_url: &str) -> HttpActivityApi {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("build client");
        HttpActivityApi::with_client(base_url, client).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_activities_keeps_server_order() {
        let base_url = spawn_activities_server().await.expect("spawn server");
        let api = local_api(&base_url);

        let catalog = api.fetch_activities().await.unwrap();

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Chess Club", "Art Studio"]);
        assert_eq!(
            catalog.get("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu".to_string()]
        );
    }

    #[tokio::test]
    async fn test_signup_encodes_activity_name_and_email() {
        let base_url = spawn_activities_server().await.expect("spawn server");
        let api = local_api(&base_url);

        let message = api.signup("Chess Club", "new+1@mergington.edu").await.unwrap();

        assert_eq!(message, "Signed up new+1@mergington.edu for Chess Club");
    }

    #[tokio::test]
    async fn test_signup_surfaces_detail() {
        let base_url = spawn_activities_server().await.expect("spawn server");
        let api = local_api(&base_url);

        let err = api
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err.user_message("fallback"), "Student already signed up");

        let err = api.signup("Underwater Basket Weaving", "a@b.com").await.unwrap_err();
        assert!(matches!(
            err,
            BoardError::Application {
                status: 404,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_parse_failure() {
        let base_url = spawn_activities_server().await.expect("spawn server");
        let api = local_api(&base_url);

        let err = api.unregister("Chess Club", "a@b.com").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkOrParse);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = local_api(&format!("http://{addr}"));
        let err = api.fetch_activities().await.unwrap_err();

        assert!(matches!(err, BoardError::Network(_)));
    }
}
