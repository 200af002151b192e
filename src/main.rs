use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workspace_run::{match_workspaces, Dispatcher, Invocation, RootManifest, RunConfig};

const USAGE: &str = "Usage: run <script> [<workspaceName>]";

#[derive(Parser)]
#[command(name = "run", version)]
#[command(about = "Run a package.json script across the workspaces of a monorepo")]
struct Cli {
    /// Script to run
    script: Option<String>,

    /// Only run in the workspace whose package name matches exactly
    workspace: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

/// Initialize tracing on stderr so child output on stdout stays clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "workspace_run=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(invocation: Invocation) -> anyhow::Result<()> {
    let config = RunConfig::from_env()?;

    let root = RootManifest::load(config.root())?;
    let dirs = match_workspaces(&config, &root.workspaces)?;

    let report = Dispatcher::new(&config).run(&dirs, &invocation).await?;
    tracing::debug!("Ran {} in {} package(s)", invocation.script, report.ran.len());

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Checked before any config or manifest is read. An empty name is missing.
    let Some(script) = cli.script.filter(|s| !s.is_empty()) else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    init_tracing();

    match run(Invocation::new(script, cli.workspace)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
