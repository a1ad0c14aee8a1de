use anyhow::{Context, Result};
use clap::Parser;
use kubetypes::{KubetypesConfig, materialize, source, version};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate TypeScript types for the Kubernetes API
#[derive(Parser)]
#[command(name = "kubetypes", version)]
struct Cli {
    /// Kubernetes API version, e.g. 1.30 or v1.30.2
    ///
    /// Must be numbered: the package version is derived from its major and
    /// minor components, so branch names such as `master` are rejected.
    #[arg(short, long)]
    api: String,

    /// Path to a local swagger.json instead of fetching it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Patch version of the generated types
    #[arg(short, long, default_value_t = 0)]
    patch: u32,

    /// Create a beta release with this number
    #[arg(long)]
    beta: Option<u32>,

    /// Output directory (default from config, otherwise `types`)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = std::env::current_dir().context("failed to read current directory")?;
    let config = KubetypesConfig::load(&root)?;

    let api_version = version::normalize_version(&cli.api);
    let release = version::release_version(&api_version, cli.patch, cli.beta)?;

    let document = source::load_document(cli.file.as_deref(), &api_version, &config.source)?;
    let modules = kubetypes_typegen::generate(&document).context("failed to generate types")?;

    let output = cli.output.unwrap_or(config.output.dir);
    let dest = materialize::package_dir(&output, &release);
    for file in materialize::write_package(&dest, &release, &modules)? {
        println!("v{}/{}", release, file);
    }
    Ok(())
}
