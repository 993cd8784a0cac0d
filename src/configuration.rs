use std::env;
use std::env::current_dir;
use std::fmt::Display;

use config::Config;
use config::ConfigError;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::waitlist_client::WaitlistClient;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub waitlist: WaitlistSettings,
}

/// Server configuration
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    /// Port 0 lets the OS pick one (used by tests)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Where signups are sent. The service itself is external; we only ever
/// `POST` to it.
#[derive(Deserialize, Clone, Debug)]
pub struct WaitlistSettings {
    /// Absolute url, e.g. `https://api.cutfreak.com/waitlist`
    pub endpoint: String,
}

impl WaitlistSettings {
    pub fn client(&self) -> WaitlistClient { WaitlistClient::new(self.endpoint.clone()) }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`, then
/// apply `APP_*` env var overrides.
///
/// All fields must be present after merging, otherwise initialisation fails
/// and the server will not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Message(format!("could not get current dir: {e}")))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or("local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` for
            // the port
            //
            // `APP_WAITLIST__ENDPOINT=http://...` -> `Settings.waitlist.endpoint`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
