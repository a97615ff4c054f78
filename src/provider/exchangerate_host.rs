use crate::{conf::UpstreamConf, model::UpstreamPayload, provider::RateProvider};
use anyhow::{bail, Context, Result};
use reqwest::Client;
use rocket::serde::json::Value;
use tracing::{debug, warn};

pub struct ExchangeRateHost {
    conf: UpstreamConf,
    client: Client,
}

impl ExchangeRateHost {
    pub fn new(conf: UpstreamConf) -> Result<ExchangeRateHost> {
        let client = Client::builder()
            .timeout(conf.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ExchangeRateHost { conf, client })
    }

    async fn request(&self, from: &str, to: &str, amount: f64) -> Result<UpstreamPayload> {
        let url = format!("{}/convert", self.conf.base_url.trim_end_matches('/'));
        let amount = amount.to_string();
        debug!(provider = %self.name(), %url, from, to, %amount, "Requesting conversion");

        let mut query = vec![("from", from), ("to", to), ("amount", amount.as_str())];
        if let Some(access_key) = &self.conf.access_key {
            query.push(("access_key", access_key.as_str()));
        }

        let res = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("Request to {} failed", url))?;

        let status = res.status();
        debug!(provider = %self.name(), %status, "Got upstream response");

        if !status.is_success() {
            bail!("{} responded with status {}", url, status);
        }

        let body = res
            .json::<Value>()
            .await
            .map_err(|e| e.without_url())
            .context("Upstream response is not valid JSON")?;
        let payload = UpstreamPayload(body);

        if let Some(reason) = payload.failure() {
            bail!("Conversion rejected: {}", reason);
        }

        Ok(payload)
    }
}

#[rocket::async_trait]
impl RateProvider for ExchangeRateHost {
    fn name(&self) -> String {
        "exchangerate.host".into()
    }

    async fn fetch(&self, from: &str, to: &str, amount: f64) -> Result<UpstreamPayload> {
        let res = self.request(from, to, amount).await;

        if let Err(e) = &res {
            warn!(provider = %self.name(), from, to, "Conversion request failed: {:#}", e);
        }

        res
    }
}
