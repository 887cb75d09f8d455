//! The resolved generation request.
//!
//! A `GenerateRequest` is built once per invocation from the parsed command
//! line and the environment, and is read-only afterwards. It is the input of
//! the client generation stage.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::target::Target;

/// Environment variable consulted when `--root-url` is not given.
pub const ROOT_URL_ENV: &str = "TASKCLUSTER_ROOT_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    python_dir: Option<PathBuf>,
    node_dir: Option<PathBuf>,
    go_dir: Option<PathBuf>,
    javascript_dir: Option<PathBuf>,
    java_dir: Option<PathBuf>,
    root_url: String,
}

impl GenerateRequest {
    /// Resolves a request from parsed arguments.
    ///
    /// The root URL comes from `--root-url` when given and non-empty,
    /// otherwise from `TASKCLUSTER_ROOT_URL` as returned by `env`. When no
    /// target directory was given at all, every target gets its default
    /// directory under `generated-clients/`.
    pub fn from_cli<F>(cli: Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_url = match cli.root_url.clone().filter(|url| !url.is_empty()) {
            Some(url) => {
                debug!("Using root URL from command line");
                url
            }
            None => match env(ROOT_URL_ENV).filter(|url| !url.is_empty()) {
                Some(url) => {
                    debug!("Using root URL from environment variable {}", ROOT_URL_ENV);
                    url
                }
                None => return Err(CliError::MissingRootUrl),
            },
        };

        let no_targets_specified = Target::ALL.iter().all(|t| cli.dir(*t).is_none());

        let request = if no_targets_specified {
            debug!("No target directories specified, generating all clients");
            Self {
                python_dir: Some(Target::Python.default_dir()),
                node_dir: Some(Target::Node.default_dir()),
                go_dir: Some(Target::Go.default_dir()),
                javascript_dir: Some(Target::Javascript.default_dir()),
                java_dir: Some(Target::Java.default_dir()),
                root_url,
            }
        } else {
            Self {
                python_dir: cli.python_dir,
                node_dir: cli.node_dir,
                go_dir: cli.go_dir,
                javascript_dir: cli.javascript_dir,
                java_dir: cli.java_dir,
                root_url,
            }
        };

        Ok(request)
    }

    /// Output directory for `target`, or `None` when it was not requested.
    pub fn dir(&self, target: Target) -> Option<&Path> {
        let dir = match target {
            Target::Python => &self.python_dir,
            Target::Node => &self.node_dir,
            Target::Go => &self.go_dir,
            Target::Javascript => &self.javascript_dir,
            Target::Java => &self.java_dir,
        };
        dir.as_deref()
    }

    /// Targets that have an output directory, in reporting order.
    pub fn requested_targets(&self) -> impl Iterator<Item = Target> + '_ {
        Target::ALL
            .into_iter()
            .filter(move |target| self.dir(*target).is_some())
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }
}

/// Human readable summary written after a successful parse.
impl fmt::Display for GenerateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Building the following clients:")?;
        for target in Target::ALL {
            match self.dir(target) {
                Some(dir) => writeln!(f, "  {:<10}  {}", target, dir.display())?,
                None => writeln!(f, "  {:<10}  (not requested)", target)?,
            }
        }
        write!(f, "Using taskcluster root URL {}", self.root_url)
    }
}
