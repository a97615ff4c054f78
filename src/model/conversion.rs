use super::ValidationError;
use rocket::serde::{Deserialize, Serialize};

/// Query parameters of a conversion, checked at the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Fields are checked in order and the first failure wins.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        amount: Option<&str>,
    ) -> Result<ConversionRequest, ValidationError> {
        let from = currency_code("from", from)?;
        let to = currency_code("to", to)?;

        let amount = amount
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .ok_or_else(|| ValidationError::new("amount", "must be present"))?;
        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|it| it.is_finite())
            .ok_or_else(|| ValidationError::new("amount", "must be a number"))?;

        if amount < 0.0 {
            return Err(ValidationError::new("amount", "must be greater than or equal to 0"));
        }

        Ok(ConversionRequest { from, to, amount })
    }
}

fn currency_code(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(code) if !code.trim().is_empty() => Ok(code.to_string()),
        _ => Err(ValidationError::new(field, "must not be blank")),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ConversionResponse {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub result: f64,
}

#[cfg(test)]
mod test {
    use super::ConversionRequest;

    #[test]
    fn parse() {
        let req = ConversionRequest::parse(Some("usd"), Some(" eur "), Some("100")).unwrap();
        assert_eq!("usd", req.from);
        assert_eq!(" eur ", req.to);
        assert_eq!(100.0, req.amount);
    }

    #[test]
    fn parse_zero_amount() {
        let req = ConversionRequest::parse(Some("USD"), Some("EUR"), Some("0")).unwrap();
        assert_eq!(0.0, req.amount);
    }

    #[test]
    fn parse_blank_codes() {
        let err = ConversionRequest::parse(Some(""), Some("EUR"), Some("10")).unwrap_err();
        assert_eq!("from", err.field);
        let err = ConversionRequest::parse(Some("USD"), Some("   "), Some("10")).unwrap_err();
        assert_eq!("to", err.field);
        let err = ConversionRequest::parse(None, None, None).unwrap_err();
        assert_eq!("from", err.field);
    }

    #[test]
    fn parse_invalid_amount() {
        for amount in [None, Some(""), Some("abc"), Some("NaN"), Some("inf"), Some("-5")] {
            let err = ConversionRequest::parse(Some("USD"), Some("EUR"), amount).unwrap_err();
            assert_eq!("amount", err.field, "amount {:?}", amount);
        }
    }
}
