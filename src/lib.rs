//! Command line front-end for generating taskcluster API clients.
//!
//! This crate turns the command line into a [`GenerateRequest`]: which
//! language clients to generate, where to put them, and which taskcluster
//! deployment to read API references from. Generating the clients themselves
//! is done by a separate stage that consumes the request.

pub mod cli;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod processor;
pub mod request;
pub mod target;
pub mod version;

pub use error::{CliError, Result};
pub use exit_code::ExitCode;
pub use processor::{Invocation, process, process_with_env, resolve};
pub use request::GenerateRequest;
pub use target::Target;
