use envconfig::Envconfig;
use log::debug;

#[derive(Envconfig, Clone)]
pub struct InspectConfig {
    #[envconfig(from = "DJ_PAYLOAD_PATH", default = "payload.json")]
    pub payload_path: String,

    #[envconfig(from = "DJ_PAYLOAD_KIND", default = "node")]
    pub payload_kind: String,
}

impl InspectConfig {
    pub fn new() -> Result<Self, envconfig::Error> {
        let config = Self::init_from_env()?;
        debug!(
            "InspectConfig loaded: payload_path={}, payload_kind={}",
            config.payload_path, config.payload_kind
        );
        Ok(config)
    }
}
