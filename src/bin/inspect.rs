use log::{error, info};
use std::fs;
use std::process;

use datajunction_models::{
    config::InspectConfig,
    payload::{inspect, PayloadKind},
    ModelError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = InspectConfig::new().map_err(|e| {
        error!("Failed to initialize config: {}", e);
        e
    })?;

    let kind: PayloadKind = config.payload_kind.parse().map_err(|e| {
        error!("Invalid DJ_PAYLOAD_KIND: {}", e);
        e
    })?;

    let payload = fs::read_to_string(&config.payload_path).map_err(|source| {
        let e = ModelError::Io {
            path: config.payload_path.clone(),
            source,
        };
        error!("{}", e);
        e
    })?;
    info!("Read {} bytes from {}", payload.len(), config.payload_path);

    match inspect(kind, &payload) {
        Ok(canonical) => {
            println!("{}", canonical);
            Ok(())
        }
        Err(e) => {
            error!("Payload does not match the {} model: {}", kind, e);
            process::exit(1);
        }
    }
}
