use super::Config as StateConfig;
use xbox_identity::auth::oauth;

use clap::Parser;
use std::process::exit;

/// Prints the URL to send the user to for Microsoft consent
#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Opaque state value echoed back on the redirect
    #[clap(long, value_parser)]
    pub state: String,
}

impl Config {
    pub async fn run(&self, cfg: &StateConfig) {
        match oauth::authorize_url(
            &cfg.config.oauth,
            &cfg.config.endpoints.authorize_url,
            &self.state,
        ) {
            Ok(url) => println!("{}", url),
            Err(e) => {
                eprintln!("Unable to build authorization URL: {}", e);
                exit(1);
            }
        }
    }
}
