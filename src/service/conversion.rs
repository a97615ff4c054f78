use crate::{model::ConversionResponse, provider::RateProvider};
use anyhow::Result;
use tracing::debug;

pub struct ConversionService {
    provider: Box<dyn RateProvider>,
}

impl ConversionService {
    pub fn new(provider: Box<dyn RateProvider>) -> ConversionService {
        ConversionService { provider }
    }

    /// Codes are uppercased before reaching the provider. Missing `info.rate`
    /// or `result` in the payload map to `0`.
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<ConversionResponse> {
        let from = from.trim().to_uppercase();
        let to = to.trim().to_uppercase();

        let payload = self.provider.fetch(&from, &to, amount).await?;
        debug!(provider = %self.provider.name(), ?payload, "Mapping upstream payload");

        Ok(ConversionResponse {
            rate: payload.number_at(&["info", "rate"]),
            result: payload.number_at(&["result"]),
            from,
            to,
            amount,
        })
    }
}
