use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::NavigationPayload;

/// Newsletter sign-up form in the terminal.
#[derive(Debug, Parser)]
#[command(name = "stay-updated", version)]
pub struct Cli {
    /// Config file (default: ~/.config/stay-updated/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file, overriding `[logging].file`
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Route to open on start
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    pub open: String,

    /// Address carried to the opened route, as if it had been submitted.
    /// Needs `--open` with a route other than `/`
    #[arg(long, value_name = "ADDRESS")]
    pub email: Option<String>,
}

impl Cli {
    /// Loads the config file named on the command line (or the default one)
    /// and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }

    /// Rejects flag combinations clap cannot express on its own. The home
    /// view takes no payload, so `--email` without `--open` is an error.
    pub fn check(&self) -> Result<(), clap::Error> {
        if self.email.is_some() && self.open == "/" {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--email needs --open with a route that shows it, e.g. --open /success",
            ));
        }
        Ok(())
    }

    pub fn payload(&self) -> Option<NavigationPayload> {
        self.email.clone().map(NavigationPayload::new)
    }
}
