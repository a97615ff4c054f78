mod provider;
pub use provider::RateProvider;
mod exchangerate_host;
pub use exchangerate_host::ExchangeRateHost;
