use crate::{
    model::{ApiResult, ConversionRequest, ConversionResponse},
    service::ConversionService,
};
use rocket::{get, State};

#[get("/convert?<from>&<to>&<amount>")]
pub async fn get(
    from: Option<&str>,
    to: Option<&str>,
    amount: Option<&str>,
    service: &State<ConversionService>,
) -> ApiResult<ConversionResponse> {
    let req = match ConversionRequest::parse(from, to, amount) {
        Ok(req) => req,
        Err(e) => return e.into(),
    };

    ApiResult::upstream(service.convert(&req.from, &req.to, req.amount).await)
}
