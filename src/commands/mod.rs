use anyhow::anyhow;
use clap::Parser;
use faccess::PathExt;
use std::path::Path;
use std::process::exit;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use xbox_identity::ApplicationConfig;

mod authenticate;
mod authorize_url;

#[derive(clap::Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// Print the Microsoft authorization URL
    AuthorizeUrl(authorize_url::Config),
    /// Exchange an authorization code and print the Xbox Live profile
    Authenticate(authenticate::Config),
}

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    // Path to configuration file
    #[clap(
        global = true,
        short,
        long,
        value_parser,
        required = false,
        default_value = "config.hcl"
    )]
    pub config_file: String,

    #[clap(skip)]
    pub config: ApplicationConfig,

    /// Command to execute
    #[clap(subcommand)]
    pub cmd: SubCommand,
}

pub async fn launch() {
    // Parse arguments with clap => config::Config struct
    let cfg = Config::get_config();

    let _guard = match setup_logging(&cfg.config) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    match &cfg.cmd {
        SubCommand::AuthorizeUrl(command) => command.run(&cfg).await,
        SubCommand::Authenticate(command) => command.run(&cfg).await,
    }
}

impl Config {
    // Parsing command for clap to correctly build the configuration.
    fn get_config() -> Self {
        let mut data = Self::parse();

        match ApplicationConfig::from_file(&data.config_file) {
            Ok(config) => data.config = config,
            Err(error) => {
                eprintln!("{:#}", error);
                exit(1);
            }
        }

        data
    }
}

/// Setup the tracing/logging subsystem
fn setup_logging(config: &ApplicationConfig) -> Result<WorkerGuard, anyhow::Error> {
    let log = &config.log;
    let (non_blocking, guard): (NonBlocking, WorkerGuard) = if log.is_stdout() {
        // Command output owns stdout
        tracing_appender::non_blocking(std::io::stderr())
    } else {
        let path = Path::new(&log.out);
        if !path.exists() || !path.writable() {
            return Err(anyhow!("{} doesn't exist or is not writable", log.out));
        }
        let file_appender = tracing_appender::rolling::daily(&log.out, "xbox-auth.log");
        tracing_appender::non_blocking(file_appender)
    };

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log.tracing_level())
        .with_level(true)
        .with_line_number(log.with_source_location())
        .with_file(log.with_source_location())
        .with_env_filter(log.env_filter())
        .compact()
        .init();

    Ok(guard)
}
