use crate::domain::model::{FeedingPlan, Recommendation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External recommendation source (AI/text service or database lookup).
/// Returns a natural-language portion expression plus freeform notes.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, species: &str, quantity: u32) -> Result<Recommendation>;
}

/// Persistence collaborator: receives the assembled plan as a plain record.
pub trait PlanStore: Send + Sync {
    fn save_plan(
        &self,
        name: &str,
        plan: &FeedingPlan,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}
