//! `docconf explorer` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docconf_config::ExplorerConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the explorer command.
#[derive(Args)]
pub(crate) struct ExplorerArgs {
    /// Location of the API spec document.
    #[arg(long)]
    spec_url: Option<String>,

    /// Write the bootstrap configuration to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExplorerArgs {
    /// Execute the explorer command.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = match self.spec_url {
            Some(url) => ExplorerConfig::for_spec(url),
            None => ExplorerConfig::default(),
        };
        let json = serde_json::to_string_pretty(&config)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, json)?;
                output.success(&format!(
                    "Wrote explorer bootstrap configuration to {}",
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
