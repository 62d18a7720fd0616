use crate::core::ConfigProvider;
use crate::domain::model::{
    ErrorBody, LikeStatus, Movie, ScorePlot, ServiceResponse, SimilarMovies, SimilarityCriteria,
};
use crate::utils::error::{ConsumerError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const EXCLUDED_MOVIE_IDS_HEADER: &str = "Excluded-Movie-IDs";

/// HTTP client for the movie Webservices API.
#[derive(Debug, Clone)]
pub struct WebservicesClient {
    base_url: String,
    client: Client,
}

impl WebservicesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The first `amount` popular movies.
    pub async fn popular(&self, amount: u64) -> Result<Vec<Movie>> {
        let url = self.url("/movies/popular");
        tracing::debug!("Fetching {} popular movies from {}", amount, url);

        let response = self
            .client
            .get(&url)
            .query(&[("amount", amount.to_string())])
            .send()
            .await?;

        let body: ServiceResponse<Vec<Movie>> = Self::decode(response).await?;
        Ok(body.result)
    }

    pub async fn similar(
        &self,
        movie_id: u64,
        amount: u64,
        criteria: SimilarityCriteria,
    ) -> Result<SimilarMovies> {
        let url = self.url(&format!("/movies/{}/similar", movie_id));

        let mut query = vec![("amount", amount.to_string())];
        query.extend(
            criteria
                .query_params()
                .into_iter()
                .map(|param| (param, "true".to_string())),
        );
        tracing::debug!("Fetching similar movies from {} with {:?}", url, query);

        let response = self.client.get(&url).query(&query).send().await?;
        Self::decode(response).await
    }

    /// Ids of all movies with a liked status of true.
    pub async fn likes(&self) -> Result<Vec<u64>> {
        let response = self.client.get(self.url("/likes")).send().await?;
        let body: ServiceResponse<Vec<u64>> = Self::decode(response).await?;
        Ok(body.result)
    }

    pub async fn like_status(&self, movie_id: u64) -> Result<LikeStatus> {
        let response = self
            .client
            .get(self.url(&format!("/likes/{}", movie_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn like(&self, movie_id: u64) -> Result<()> {
        tracing::info!("Liking movie {}", movie_id);
        let response = self
            .client
            .put(self.url(&format!("/likes/{}", movie_id)))
            .send()
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    pub async fn unlike(&self, movie_id: u64) -> Result<()> {
        tracing::info!("Un-liking movie {}", movie_id);
        let response = self
            .client
            .delete(self.url(&format!("/likes/{}", movie_id)))
            .send()
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    /// Bar plot image of the average scores of the given movies.
    pub async fn average_score_plot(&self, movie_ids: &[u64]) -> Result<ScorePlot> {
        let ids = movie_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(self.url("/movies/average-score-plot"))
            .query(&[("movie_ids", ids)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let excluded_ids = response
            .headers()
            .get(EXCLUDED_MOVIE_IDS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(parse_excluded_ids)
            .unwrap_or_default();

        let image = response.bytes().await?.to_vec();
        tracing::debug!(
            "Received {} byte plot, {} excluded ids",
            image.len(),
            excluded_ids.len()
        );

        Ok(ScorePlot {
            image,
            content_type,
            excluded_ids,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(service_error(status, &text))
    }
}

fn service_error(status: StatusCode, body: &str) -> ConsumerError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) => ConsumerError::ServiceError {
            status: status.as_u16(),
            message: body.message,
            error: body.error,
        },
        Err(_) => ConsumerError::ServiceError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
            error: None,
        },
    }
}

fn parse_excluded_ids(header: &str) -> Vec<u64> {
    header
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}
