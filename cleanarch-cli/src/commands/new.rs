//! `cleanarch new --name <project> --module <import/path>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use cleanarch_core::ProjectConfig;
use cleanarch_gen::{generate, Overwrite};
use cleanarch_renderer::TemplateRegistry;

/// Generate a new project skeleton.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name; also the output root directory name.
    #[arg(long, short = 'n')]
    pub name: String,

    /// Module/import path embedded into generated sources
    /// (e.g. "github.com/org/project").
    #[arg(long, short = 'm')]
    pub module: String,

    /// Parent directory to generate into.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Leave files that already exist untouched instead of overwriting them.
    #[arg(long)]
    pub skip_existing: bool,

    /// Print a machine-readable JSON report instead of the summary.
    #[arg(long)]
    pub json: bool,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        let config = ProjectConfig::new(self.name, self.module);
        let registry = TemplateRegistry::builtin();
        let overwrite = if self.skip_existing {
            Overwrite::SkipExisting
        } else {
            Overwrite::Always
        };

        let report = generate(&config, &self.dir, &registry, overwrite)
            .with_context(|| format!("failed to generate project '{}'", config.name))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{} Generated project '{}' at {}",
            "✓".green(),
            config.name,
            report.root.display()
        );
        println!(
            "  {} file(s) written, {} skipped",
            report.written.len(),
            report.skipped.len()
        );
        Ok(())
    }
}
