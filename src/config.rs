use thiserror::Error;

pub const DOCKER_USERNAME: &str = "DOCKER_USERNAME";
pub const DOCKER_PASSWORD: &str = "DOCKER_PASSWORD";
pub const GITHUB_REF: &str = "GITHUB_REF";

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
}

/// Registry credentials and CI defaults, read from the environment once
/// at startup and passed around explicitly from there.
#[derive(Debug)]
pub struct Config {
    pub username: String,
    pub password: String,
    /// Value of GITHUB_REF, used when --ref is not given.
    pub default_ref: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Environment access is injected so tests don't have to mutate
    // process-global state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        Ok(Self {
            username: lookup(DOCKER_USERNAME).ok_or(Error::MissingEnv(DOCKER_USERNAME))?,
            password: lookup(DOCKER_PASSWORD).ok_or(Error::MissingEnv(DOCKER_PASSWORD))?,
            default_ref: lookup(GITHUB_REF),
        })
    }
}
