use crate::domain::model::Recommendation;
use crate::domain::ports::RecommendationProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// RecommendationProvider backed by the remote prediction API.
///
/// The upstream service gives no schema guarantees, so missing fields,
/// non-success statuses, and unparseable bodies all degrade to an empty
/// recommendation — the core turns that into its generic defaults instead
/// of failing the flow. Only transport errors surface to the caller.
pub struct HttpRecommendationProvider {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct RecommendationRequest<'a> {
    species: &'a str,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct RecommendationResponse {
    #[serde(default)]
    portions: String,
    #[serde(default)]
    feeding_notes: String,
}

impl HttpRecommendationProvider {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn recommend(&self, species: &str, quantity: u32) -> Result<Recommendation> {
        tracing::debug!("📡 Requesting recommendation from: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecommendationRequest { species, quantity })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Recommendation API returned {} for '{}', using defaults",
                status,
                species
            );
            return Ok(Recommendation::default());
        }

        match response.json::<RecommendationResponse>().await {
            Ok(body) => Ok(Recommendation {
                portion_expression: body.portions,
                feeding_notes: body.feeding_notes,
            }),
            Err(e) => {
                tracing::warn!(
                    "Unparseable recommendation body for '{}' ({}), using defaults",
                    species,
                    e
                );
                Ok(Recommendation::default())
            }
        }
    }
}
