//! `docconf build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docconf_config::{BuildContext, Manifest, build_config};

use crate::decl::site_decl;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Write the configuration to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to manifest file (default: auto-discover docconf.toml).
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded, the navigation
    /// declaration is structurally invalid, or the output cannot be
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let manifest = Manifest::load(self.manifest.as_deref())?;
        let ctx = BuildContext::from_env().with_manifest(&manifest);

        let config = build_config(&site_decl(), &ctx)?;

        let json = if self.compact {
            serde_json::to_string(&config)?
        } else {
            serde_json::to_string_pretty(&config)?
        };

        match self.output {
            Some(path) => {
                std::fs::write(&path, json)?;
                output.success(&format!("Wrote site configuration to {}", path.display()));
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
