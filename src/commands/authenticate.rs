use super::Config as StateConfig;
use xbox_identity::XboxAuthProvider;

use clap::Parser;
use std::process::exit;

/// Runs the Xbox Live token chain for an authorization code
#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// The OAuth authorization code from Microsoft login
    #[clap(long, value_parser, env = "XBOX_AUTH_CODE")]
    pub code: String,
}

impl Config {
    pub async fn run(&self, cfg: &StateConfig) {
        let provider = match XboxAuthProvider::from_config(&cfg.config) {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("Failed to create provider: {}", e);
                exit(1);
            }
        };

        let user = match provider.authenticate(&self.code).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Xbox Live authentication failed: {}", e);
                eprintln!("{}", e);
                exit(1);
            }
        };

        match serde_json::to_string_pretty(&user) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Unable to serialize profile: {}", e);
                exit(1);
            }
        }
    }
}
