use thiserror::Error;

use crate::exit_code::ExitCode;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error(
        "No taskcluster root URL specified. Please provide option `--root-url` \
         or set environment variable TASKCLUSTER_ROOT_URL."
    )]
    MissingRootUrl,

    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::InvalidArguments(_) => ExitCode::InvalidArguments,
            CliError::MissingRootUrl => ExitCode::MissingRootUrl,
            CliError::Output(_) => ExitCode::WriteError,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.render().to_string();
        let message = rendered
            .trim()
            .strip_prefix("error: ")
            .unwrap_or(rendered.trim())
            .to_string();
        CliError::InvalidArguments(message)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
