use std::io::Read;
use std::process::ExitStatus;

use log::debug;
use thiserror::Error;

use crate::exec::{CommandRunner, Input};

#[derive(Error, Debug)]
pub enum Error {
    #[error("docker login failed with exit code {0}")]
    Login(ExitStatus),

    #[error("docker buildx build failed with exit code {0}")]
    Build(ExitStatus),

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Authenticate against the registry. The password travels on the
/// child's stdin and never appears on the command line.
pub fn login(
    runner: &mut dyn CommandRunner,
    username: &str,
    password: &str,
) -> Result<(), Error> {
    debug!("logging in to the registry as {username}");
    let argv = vec![
        "docker".to_string(),
        "login".to_string(),
        format!("-u={username}"),
        "--password-stdin".to_string(),
    ];
    let status = runner.run(&argv, Input::Secret(password))?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Login(status))
    }
}

/// Build and push in a single buildx invocation, applying every tag to
/// the same output. The Dockerfile is streamed on stdin, so no build
/// context is carried into the builder. When no platform list is given,
/// the builder's default platform applies.
pub fn build_and_push(
    runner: &mut dyn CommandRunner,
    dockerfile: Box<dyn Read>,
    platform: Option<&str>,
    image: &str,
    tags: &[String],
) -> Result<(), Error> {
    debug!("building and pushing {image}");
    let mut argv: Vec<String> = ["docker", "buildx", "build", "--push"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for tag in tags {
        argv.push("-t".to_string());
        argv.push(format!("{image}:{tag}"));
    }

    if let Some(platform) = platform {
        argv.push("--platform".to_string());
        argv.push(platform.to_string());
    }

    argv.push("-".to_string());

    let status = runner.run(&argv, Input::Stream(dockerfile))?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Build(status))
    }
}
