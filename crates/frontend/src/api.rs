//! Browser HTTP client for the activities API.

use board_core::{
    ActivityApi, BoardError, Endpoints, Mutation, Result, interpret_mutation, parse_catalog,
};
use board_types::ActivityCatalog;
use gloo_net::http::{Request, Response};
use tracing::debug;

/// [`ActivityApi`] backed by the browser's `fetch` through gloo-net.
#[derive(Debug, Clone)]
pub struct GlooActivityApi {
    endpoints: Endpoints,
}

impl GlooActivityApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            endpoints: Endpoints::new(base_url)?,
        })
    }

    async fn read(response: Response) -> Result<(u16, String)> {
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok((status, body))
    }
}

fn network_error(err: gloo_net::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

impl ActivityApi for GlooActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let url = self.endpoints.activities();
        debug!(%url, "GET");

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(network_error)?;
        let (status, body) = Self::read(response).await?;
        parse_catalog(status, &body)
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoints.mutation(mutation, activity, email);
        debug!(%url, "POST");

        let response = Request::post(url.as_str())
            .send()
            .await
            .map_err(network_error)?;
        let (status, body) = Self::read(response).await?;
        interpret_mutation(status, &body)
    }
}
