mod api_error;
pub use api_error::ApiError;
mod api_result;
pub use api_result::ApiResult;
mod conversion;
pub use conversion::{ConversionRequest, ConversionResponse};
mod upstream_payload;
pub use upstream_payload::UpstreamPayload;
mod validation_error;
pub use validation_error::ValidationError;
