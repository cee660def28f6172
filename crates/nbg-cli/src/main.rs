//! node-bin-gen - package a prebuilt node or iojs release for npm

mod report;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nbg_core::descriptor::DEFAULT_OWNER;
use nbg_core::remote::{IOJS_DIST, NODE_DIST};
use nbg_core::{Fetcher, Mirrors, Request, http_client};

use crate::report::LogReporter;

#[derive(Debug, Parser)]
#[command(name = "node-bin-gen")]
#[command(author, version, about = "Download a node or iojs release and write its package.json")]
struct Cli {
    /// Build to fetch: {node,iojs}-{platform}-{arch}
    target: Option<String>,

    /// Release version, without the leading 'v'
    #[arg(value_name = "VERSION")]
    release: Option<String>,

    /// Directory the package directory is created in
    #[arg(long, env = "NODE_BIN_GEN_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// GitHub account named in the manifest's repository URL
    #[arg(long, env = "NODE_BIN_GEN_OWNER", default_value = DEFAULT_OWNER)]
    owner: String,

    /// Distribution server for node releases
    #[arg(long, env = "NODE_BIN_GEN_NODE_MIRROR", default_value = NODE_DIST)]
    node_mirror: String,

    /// Distribution server for iojs releases
    #[arg(long, env = "NODE_BIN_GEN_IOJS_MIRROR", default_value = IOJS_DIST)]
    iojs_mirror: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            usage()
        }
    };

    let request = match Request::parse(cli.target.as_deref(), cli.release.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "invalid arguments");
            usage()
        }
    };

    let mirrors = Mirrors {
        node: cli.node_mirror,
        iojs: cli.iojs_mirror,
    };
    let fetcher = Fetcher::new(http_client()?, mirrors, cli.out_dir, LogReporter)
        .with_owner(cli.owner);

    let outcome = fetcher
        .fetch(&request)
        .await
        .with_context(|| format!("failed to fetch {request}"))?;

    info!(dir = %outcome.dir.display(), files = outcome.files.len(), "package ready");
    Ok(())
}

fn usage() -> ! {
    eprintln!(
        "Use: {} {{node,iojs}}-{{platform}}-{{arch}} version",
        env!("CARGO_BIN_NAME")
    );
    process::exit(1)
}
