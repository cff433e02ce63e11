//! animgen CLI entrypoint
//! Parses command-line arguments, loads the controller description and
//! dispatches to the core generator. Persisting the result is done here.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use animgen_core::{
    controller, generate_with_sink, output_file_name, utils::pascal_case, ControllerManifest,
    ControllerSnapshot, Diagnostic, GenerationConfig, Visibility,
};
use anyhow::Context;
use clap::{Args, Parser};
use serde::Serialize;
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "animgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a wrapper class for a controller
    Generate {
        #[command(flatten)]
        input: InputArgs,
        /// Directory the wrapper is written to (default: current directory)
        #[arg(long, conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,
        /// Print the wrapper instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Fail if an existing wrapper no longer matches its controller
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Previously generated wrapper
        #[arg(long)]
        wrapper: PathBuf,
    },
    /// List the parameters of a controller in order
    Inspect {
        /// Controller description exported from the editor (YAML or JSON)
        #[arg(long)]
        controller: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write a default generation config
    InitConfig {
        #[arg(long, default_value = "animgen.yaml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Controller and generation settings shared by `generate` and `check`
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Controller description exported from the editor (YAML or JSON)
    #[arg(long)]
    controller: PathBuf,
    /// Generation config file (YAML); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Namespace wrapping the generated class
    #[arg(long)]
    namespace: Option<String>,
    /// Class name (default: controller name)
    #[arg(long)]
    class_name: Option<String>,
    /// Access modifier of generated members (public, internal, protected, private)
    #[arg(long)]
    visibility: Option<Visibility>,
    /// Emit a partial class without a base type
    #[arg(long)]
    partial: bool,
    /// Fail when two parameters map to the same identifier
    #[arg(long)]
    strict_names: bool,
}

impl InputArgs {
    async fn resolve_config(&self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_file(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GenerationConfig::default(),
        };

        if self.namespace.is_some() {
            config.namespace = self.namespace.clone();
        }
        if self.class_name.is_some() {
            config.class_name = self.class_name.clone();
        }
        if let Some(visibility) = self.visibility {
            config.visibility = visibility;
        }
        config.partial |= self.partial;
        config.strict_names |= self.strict_names;
        Ok(config)
    }

    async fn render(&self) -> anyhow::Result<Rendered> {
        let config = self.resolve_config().await?;
        let snapshot = load_snapshot(&self.controller).await?;

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let source = generate_with_sink(&snapshot, &config, &mut diagnostics)
            .with_context(|| format!("Failed to generate wrapper for '{}'", snapshot.asset_name))?;
        report(&diagnostics);

        Ok(Rendered {
            file_name: output_file_name(&snapshot, &config)?,
            source,
        })
    }
}

struct Rendered {
    file_name: String,
    source: String,
}

#[derive(Serialize)]
struct ParameterRow<'a> {
    index: usize,
    name: &'a str,
    kind: String,
    hash: i32,
    identifier: String,
}

async fn load_snapshot(path: &Path) -> anyhow::Result<ControllerSnapshot> {
    let manifest = ControllerManifest::from_file(path)
        .await
        .with_context(|| format!("Failed to load controller {}", path.display()))?;
    Ok(controller::snapshot(&manifest)?)
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        tracing::warn!("{diagnostic}");
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Generate {
            input,
            output_dir,
            stdout,
        } => {
            let rendered = input.render().await?;
            if *stdout {
                print!("{}", rendered.source);
                return Ok(());
            }

            let output_path = output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            if !output_path.exists() {
                tracing::info!("Creating output directory: {}", output_path.display());
                fs::create_dir_all(&output_path).await.with_context(|| {
                    format!("Failed to create output directory {}", output_path.display())
                })?;
            }

            let file = output_path.join(&rendered.file_name);
            fs::write(&file, &rendered.source)
                .await
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::info!("Generated wrapper: {}", file.display());
        }
        Commands::Check { input, wrapper } => {
            let rendered = input.render().await?;
            let existing = fs::read_to_string(wrapper)
                .await
                .with_context(|| format!("Failed to read wrapper {}", wrapper.display()))?;

            if existing != rendered.source {
                anyhow::bail!(
                    "{} is out of date with {}; regenerate it",
                    wrapper.display(),
                    input.controller.display()
                );
            }
            tracing::info!("{} is up to date", wrapper.display());
        }
        Commands::Inspect { controller, json } => {
            let snapshot = load_snapshot(controller).await?;
            let rows: Vec<ParameterRow> = snapshot
                .parameters
                .iter()
                .enumerate()
                .map(|(index, p)| ParameterRow {
                    index,
                    name: &p.name,
                    kind: p.kind.to_string(),
                    hash: p.stable_hash,
                    identifier: pascal_case(&p.name),
                })
                .collect();

            if *json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{} ({} parameters)", snapshot.asset_name, rows.len());
                for row in &rows {
                    println!(
                        "{:>3}  {:<24} {:<8} {:>12}  {}",
                        row.index, row.name, row.kind, row.hash, row.identifier
                    );
                }
            }
        }
        Commands::InitConfig { path, force } => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            GenerationConfig::default()
                .save(path)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
    }
    Ok(())
}
