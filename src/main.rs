mod conf;
mod controller;
mod log;
mod model;
mod provider;
mod service;

use conf::Conf;
use provider::{ExchangeRateHost, RateProvider};
use rocket::{catchers, routes, Build, Rocket};
use service::ConversionService;
use tracing::info;

pub fn prepare(rocket: Rocket<Build>, provider: Box<dyn RateProvider>) -> Rocket<Build> {
    rocket
        .manage(ConversionService::new(provider))
        .mount("/api", routes![controller::conversion::get])
        .register("/", catchers![controller::error::default])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    log::init_logging();

    let figment = Conf::figment();
    let conf = Conf::from_figment(&figment)?;
    info!(
        base_url = %conf.upstream.base_url,
        timeout_secs = conf.upstream.timeout_secs,
        "Loaded upstream conf"
    );

    let provider = ExchangeRateHost::new(conf.upstream)?;
    prepare(rocket::custom(figment), Box::new(provider))
        .launch()
        .await?;

    Ok(())
}
