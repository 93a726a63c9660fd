use crate::domain::model::FeedingPlan;
use crate::domain::ports::PlanStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Saves feeding plans as pretty-printed JSON under a base directory.
#[derive(Debug, Clone)]
pub struct LocalPlanStore {
    base_path: String,
}

impl LocalPlanStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl PlanStore for LocalPlanStore {
    async fn save_plan(&self, name: &str, plan: &FeedingPlan) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(format!("{}.json", name));

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(plan)?;
        fs::write(&full_path, json)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}
