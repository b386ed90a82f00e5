//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::{PageFetcher, SwapiClient};
use crate::query;
use crate::resource::{registry, Record, ResourceKind};
use serde_json::json;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured API
    pub async fn run(&self) -> Result<()> {
        if matches!(self.cli.command, Commands::Kinds) {
            return self.kinds(&mut std::io::stdout().lock());
        }

        let config = self.load_config()?;
        info!(base_url = %config.base_url, "using API");
        let client = SwapiClient::new(&config)?;
        self.run_with(&client, &mut std::io::stdout().lock()).await
    }

    /// Run the command with an explicit fetcher and output sink
    pub async fn run_with<F, W>(&self, fetcher: &F, out: &mut W) -> Result<()>
    where
        F: PageFetcher + ?Sized,
        W: Write,
    {
        match &self.cli.command {
            Commands::List { kind, max_records } => {
                self.list(fetcher, *kind, *max_records, out).await
            }
            Commands::Get { kind, id } => {
                let record = query::get_record(fetcher, *kind, *id).await?;
                self.emit(&record, out)
            }
            Commands::Count { kind } => {
                let total = query::all(fetcher, *kind).count().await?;
                match self.cli.format {
                    OutputFormat::Json => {
                        writeln!(out, "{}", json!({ "kind": kind, "count": total }))?;
                    }
                    OutputFormat::Pretty => writeln!(out, "{total} {kind}")?,
                }
                Ok(())
            }
            Commands::Kinds => self.kinds(out),
        }
    }

    /// Build client config: file (if any), then CLI overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config.validate()?;
        Ok(config)
    }

    async fn list<F, W>(
        &self,
        fetcher: &F,
        kind: ResourceKind,
        max_records: Option<usize>,
        out: &mut W,
    ) -> Result<()>
    where
        F: PageFetcher + ?Sized,
        W: Write,
    {
        let mut set = query::all(fetcher, kind);
        let limit = max_records.unwrap_or(usize::MAX);
        let mut written = 0;

        while written < limit {
            let Some(record) = set.advance().await? else {
                break;
            };
            self.emit(&record, out)?;
            written += 1;
        }

        info!(%kind, records = written, pages = set.state().last_fetched_page(), "list complete");
        Ok(())
    }

    fn kinds<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in registry::entries() {
            match self.cli.format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({
                        "kind": entry.kind,
                        "singular": entry.singular,
                        "label_field": entry.label_field,
                    })
                )?,
                OutputFormat::Pretty => {
                    writeln!(
                        out,
                        "{} ({}), labelled by '{}'",
                        entry.path, entry.singular, entry.label_field
                    )?;
                }
            }
        }
        Ok(())
    }

    fn emit<W: Write>(&self, record: &Record, out: &mut W) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
            OutputFormat::Pretty => writeln!(out, "{record} (#{})", record.id())?,
        }
        Ok(())
    }
}
