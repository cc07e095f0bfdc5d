use std::fs::File;

use clap::Parser;
use log::{debug, error};
use thiserror::Error;

mod config;
mod docker;
mod exec;
mod tags;

/// Build a Docker image from a Dockerfile and push it to the registry,
/// tagged according to the current CI ref. A tag ref refs/tags/X.Y.Z
/// pushes latest, X, X.Y and X.Y.Z; everything else pushes latest only.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The Dockerfile to build.
    #[arg(short, long)]
    dockerfile: String,

    /// Docker image to push.
    #[arg(short, long)]
    image: String,

    /// Platforms to build using docker buildx (if omitted, the builder's
    /// default will be used).
    #[arg(short, long)]
    platform: Option<String>,

    /// Current ref in refs/heads/... or refs/tags/... form.
    /// Defaults to $GITHUB_REF.
    #[arg(short = 'r', long = "ref")]
    git_ref: Option<String>,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] config::Error),

    #[error("docker: {0}")]
    Docker(#[from] docker::Error),

    #[error("read Dockerfile {0}: {1}")]
    Dockerfile(String, std::io::Error),
}

fn main() {
    match run() {
        Ok(_) => std::process::exit(0),
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1)
        }
    }
}

fn run() -> Result<(), Error> {
    env_logger::init();

    let args = Cli::parse();

    // Credentials are checked up front, before anything is spawned.
    let cfg = config::Config::from_env()?;

    let git_ref = args
        .git_ref
        .or_else(|| cfg.default_ref.clone())
        .unwrap_or_default();
    debug!("deriving tags for ref {git_ref:?}");

    let tags = tags::calculate(&git_ref);
    println!("will push tags: {}", tags.join(", "));

    let mut runner = exec::ProcessRunner;

    println!("logging into Docker Hub");
    docker::login(&mut runner, &cfg.username, &cfg.password)?;

    println!("building and pushing image");
    let dockerfile = File::open(&args.dockerfile)
        .map_err(|err| Error::Dockerfile(args.dockerfile.clone(), err))?;
    docker::build_and_push(
        &mut runner,
        Box::new(dockerfile),
        args.platform.as_deref(),
        &args.image,
        &tags,
    )?;

    println!("success!");
    Ok(())
}
