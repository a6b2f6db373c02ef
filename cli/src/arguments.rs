use std::path::PathBuf;

use anyhow::Context;
use avatars_client::{Client, Url};
use clap::Parser;

use crate::command::Command;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Arguments {
    /// Path to a configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Base address of the service, like https://cloud.example.io/v1
    #[clap(long)]
    endpoint: Option<String>,
    /// Project identifier
    #[clap(long)]
    project: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

impl Arguments {
    pub(crate) fn build() -> Self {
        Self::parse()
    }

    pub(crate) fn settings(&self) -> anyhow::Result<Settings> {
        Ok(Settings::build(self.config.as_deref())?
            .with_overrides(self.endpoint.clone(), self.project.clone()))
    }

    pub(crate) fn execute(&self) -> anyhow::Result<Url> {
        let config = self.settings()?.into_config()?;
        let client = Client::new(config).context("building client")?;
        tracing::trace!("executing {:?}", self.command);
        self.command
            .execute(&client.avatars())
            .context("building address")
    }
}
