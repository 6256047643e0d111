mod cmd;
mod output;
mod plan;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rulegen",
    about = "Render canonical security rules into per-tool rule files for AI coding assistants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from rulegen.yaml or .git/)
    #[arg(long, global = true, env = "RULEGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every rule for every selected format and write the files
    Generate {
        /// Directory of source rule documents (default: rules_dir from rulegen.yaml)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output root (default: output_dir from rulegen.yaml)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Format to emit; repeatable (default: formats from rulegen.yaml, else all)
        #[arg(long = "format", value_name = "NAME")]
        formats: Vec<String>,
    },

    /// Validate every rule against every selected format without writing
    Check {
        /// Directory of source rule documents (default: rules_dir from rulegen.yaml)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Format to check; repeatable (default: formats from rulegen.yaml, else all)
        #[arg(long = "format", value_name = "NAME")]
        formats: Vec<String>,
    },

    /// List the registered formats
    Formats,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Generate {
            rules,
            out,
            formats,
        } => cmd::generate::run(
            &root,
            rules.as_deref(),
            out.as_deref(),
            &formats,
            cli.json,
        ),
        Commands::Check { rules, formats } => {
            cmd::check::run(&root, rules.as_deref(), &formats, cli.json)
        }
        Commands::Formats => cmd::formats::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
