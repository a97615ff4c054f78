use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, path::Path, time::Duration};

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub upstream: UpstreamConf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConf {
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub access_key: Option<String>,
}

impl UpstreamConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Conf {
    /// Rocket defaults, then the bundled `cconv.conf`, then `$DATA_DIR/cconv.conf`,
    /// then `CCONV_*` env vars.
    pub fn figment() -> Figment {
        let default_conf = include_str!("../cconv.conf");
        let mut figment = rocket::Config::figment().merge(Toml::string(default_conf));

        if let Ok(data_dir) = env::var("DATA_DIR") {
            figment = figment.merge(Toml::file(Path::new(&data_dir).join("cconv.conf")));
        }

        figment.merge(Env::prefixed("CCONV_").split("__"))
    }

    pub fn from_figment(figment: &Figment) -> Result<Conf> {
        figment
            .extract::<Conf>()
            .context("Failed to load configuration")
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use anyhow::Result;
    use std::time::Duration;

    #[test]
    fn defaults() -> Result<()> {
        let conf = Conf::from_figment(&Conf::figment())?;
        assert!(!conf.upstream.base_url.is_empty());
        assert!(conf.upstream.timeout() > Duration::from_secs(0));
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let figment = Conf::figment()
            .merge(("upstream.base_url", "http://localhost:9999"))
            .merge(("upstream.timeout_secs", 3))
            .merge(("upstream.access_key", "secret"));
        let conf = Conf::from_figment(&figment)?;
        assert_eq!("http://localhost:9999", conf.upstream.base_url);
        assert_eq!(Duration::from_secs(3), conf.upstream.timeout());
        assert_eq!(Some("secret".to_string()), conf.upstream.access_key);
        Ok(())
    }

    #[test]
    fn invalid_timeout() {
        let figment = Conf::figment().merge(("upstream.timeout_secs", "soon"));
        assert!(Conf::from_figment(&figment).is_err());
    }
}
