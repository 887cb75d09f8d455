//! Supported client targets.
//!
//! Each target is one programming ecosystem a client library can be
//! generated for. The set and its order are fixed: they drive the option
//! names, the default output directories and the summary output.

use std::fmt;
use std::path::PathBuf;

use crate::exit_code::ExitCode;

/// Parent directory for all clients when no target directory is given.
pub const DEFAULT_OUTPUT_ROOT: &str = "generated-clients";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Python,
    Node,
    Go,
    Javascript,
    Java,
}

impl Target {
    /// All targets in the order they are reported.
    pub const ALL: [Target; 5] = [
        Target::Python,
        Target::Node,
        Target::Go,
        Target::Javascript,
        Target::Java,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Python => "python",
            Target::Node => "node",
            Target::Go => "go",
            Target::Javascript => "javascript",
            Target::Java => "java",
        }
    }

    /// Command line option selecting the output directory for this target.
    pub fn option(self) -> &'static str {
        match self {
            Target::Python => "--python-dir",
            Target::Node => "--node-dir",
            Target::Go => "--go-dir",
            Target::Javascript => "--javascript-dir",
            Target::Java => "--java-dir",
        }
    }

    /// Directory used when no target directory was given at all,
    /// e.g. `generated-clients/python`.
    pub fn default_dir(self) -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_ROOT).join(self.name())
    }

    /// Exit code reported by the generator when this target's source
    /// directory cannot be created.
    pub fn directory_exit_code(self) -> ExitCode {
        match self {
            Target::Python => ExitCode::PythonDirectory,
            Target::Node => ExitCode::NodeDirectory,
            Target::Go => ExitCode::GoDirectory,
            Target::Javascript => ExitCode::JavascriptDirectory,
            Target::Java => ExitCode::JavaDirectory,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dirs_live_under_generated_clients() {
        for target in Target::ALL {
            let expected = format!("generated-clients/{}", target.name());
            assert_eq!(target.default_dir(), PathBuf::from(expected));
        }
    }

    #[test]
    fn option_names_follow_target_names() {
        for target in Target::ALL {
            assert_eq!(target.option(), format!("--{}-dir", target));
        }
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(format!("[{:<6}]", Target::Go), "[go    ]");
        assert_eq!(Target::Javascript.to_string(), "javascript");
    }

    #[test]
    fn directory_exit_codes_are_distinct_and_in_reserved_range() {
        let mut codes: Vec<i32> = Target::ALL
            .iter()
            .map(|t| t.directory_exit_code().code())
            .collect();
        codes.sort();
        codes.dedup();

        assert_eq!(codes, vec![67, 68, 69, 70, 71]);
    }
}
