use rocket::serde::json::Value;

/// Loosely typed document returned by the rate provider. Only a few paths are
/// ever read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamPayload(pub Value);

impl UpstreamPayload {
    /// Number at `path`, or `0` when the path is missing or doesn't hold a number.
    /// Numeric strings are accepted.
    pub fn number_at(&self, path: &[&str]) -> f64 {
        let value = path
            .iter()
            .try_fold(&self.0, |node, key| node.get(*key));

        match value {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Reason given by the provider when it flags the call as failed with
    /// `"success": false`.
    pub fn failure(&self) -> Option<String> {
        if self.0.get("success") != Some(&Value::Bool(false)) {
            return None;
        }

        let reason = self
            .0
            .get("error")
            .and_then(|it| it.get("info").or_else(|| it.get("type")))
            .and_then(Value::as_str)
            .unwrap_or("provider reported an unsuccessful conversion");

        Some(reason.to_string())
    }
}
