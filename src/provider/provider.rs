use crate::model::UpstreamPayload;
use anyhow::Result;

/// Upstream source of conversions. One call per invocation, no retries.
#[rocket::async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> String;

    async fn fetch(&self, from: &str, to: &str, amount: f64) -> Result<UpstreamPayload>;
}
