use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use i2b_core::config::{self, BuilderConfig, CONFIG_FILE_NAME};
use i2b_core::host::{Document, Host, MessageKind, UserMessage};
use i2b_core::pipeline;

#[derive(Parser)]
#[command(
    name = "i2b",
    about = "Generate a fluent builder class from a TypeScript interface",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a builder class next to an interface file
    Generate {
        /// Path to the TypeScript file declaring the interface
        #[arg(short, long)]
        input: PathBuf,

        /// Workspace root (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Print the builder instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Show what would be extracted from an interface file
    Inspect {
        /// Path to the TypeScript file declaring the interface
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new i2b configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            workspace,
            stdout,
        } => cmd_generate(input, workspace, stdout),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "i2b", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Host backed by the terminal and the local filesystem.
struct TerminalHost {
    workspace_root: String,
    document: Option<Document>,
    /// When set, generated text goes to stdout instead of disk.
    print_only: bool,
}

impl Host for TerminalHost {
    fn workspace_root(&self) -> String {
        self.workspace_root.clone()
    }

    fn active_document(&self) -> Option<Document> {
        self.document.clone()
    }

    fn show_message(&mut self, message: UserMessage) {
        if let Some(line) = self.render_message(&message) {
            eprintln!("{line}");
        }
    }

    fn write_file(&mut self, path: &str, contents: &str) -> io::Result<()> {
        if self.print_only {
            print!("{contents}");
            return Ok(());
        }
        fs::write(path, contents)
    }
}

impl TerminalHost {
    /// Format a message for stderr. Nothing is saved in print-only mode, so
    /// informational notices (the save confirmation) are dropped there.
    fn render_message(&self, message: &UserMessage) -> Option<String> {
        match message.kind {
            MessageKind::Info if self.print_only => None,
            MessageKind::Info => Some(message.text.clone()),
            MessageKind::Error => Some(format!("error: {}", message.text)),
        }
    }
}

/// Load the project config file from the workspace root.
fn try_load_config(workspace: &Path) -> Result<Option<BuilderConfig>> {
    let config_path = workspace.join(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

/// Read the document to generate from; a missing file means no open editor.
fn read_document(input: &Path) -> Result<Option<Document>> {
    if !input.exists() {
        log::debug!("{} does not exist", input.display());
        return Ok(None);
    }
    let text =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    Ok(Some(Document {
        path: input.display().to_string(),
        text,
    }))
}

fn cmd_generate(input: PathBuf, workspace: Option<PathBuf>, stdout: bool) -> Result<()> {
    let workspace = match workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let cfg = try_load_config(&workspace)?.unwrap_or_default();

    let mut host = TerminalHost {
        workspace_root: workspace.display().to_string(),
        document: read_document(&input)?,
        print_only: stdout,
    };

    // The pipeline has already reported the failure; only the exit status is left.
    if pipeline::execute(&mut host, &cfg).is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let text =
        fs::read_to_string(&input).with_context(|| format!("failed to read {}", input.display()))?;
    let workspace = std::env::current_dir().context("failed to resolve current directory")?;
    let cfg = try_load_config(&workspace)?.unwrap_or_default();

    let inspection = pipeline::inspect(&text, &cfg)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&inspection)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&inspection)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
