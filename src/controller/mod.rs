pub mod conversion;
pub mod error;
