//! Process exit codes.
//!
//! The numeric values are a fixed contract with scripts that call the
//! generator. Codes 65 to 73 are reported by the generation stage that runs
//! after argument processing; they are listed here so the whole table lives
//! in one place and the usage text can be rendered from it.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    InvalidArguments,
    MissingRootUrl,
    InvalidRootUrl,
    FetchError,
    PythonDirectory,
    NodeDirectory,
    GoDirectory,
    JavascriptDirectory,
    JavaDirectory,
    WriteError,
    InternalError,
}

impl ExitCode {
    pub const ALL: [ExitCode; 12] = [
        ExitCode::Success,
        ExitCode::InvalidArguments,
        ExitCode::MissingRootUrl,
        ExitCode::InvalidRootUrl,
        ExitCode::FetchError,
        ExitCode::PythonDirectory,
        ExitCode::NodeDirectory,
        ExitCode::GoDirectory,
        ExitCode::JavascriptDirectory,
        ExitCode::JavaDirectory,
        ExitCode::WriteError,
        ExitCode::InternalError,
    ];

    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::InvalidArguments => 1,
            ExitCode::MissingRootUrl => 64,
            ExitCode::InvalidRootUrl => 65,
            ExitCode::FetchError => 66,
            ExitCode::PythonDirectory => 67,
            ExitCode::NodeDirectory => 68,
            ExitCode::GoDirectory => 69,
            ExitCode::JavascriptDirectory => 70,
            ExitCode::JavaDirectory => 71,
            ExitCode::WriteError => 72,
            ExitCode::InternalError => 73,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Completed successfully.",
            ExitCode::InvalidArguments => "Invalid arguments passed.",
            ExitCode::MissingRootUrl => "No taskcluster root URL specified.",
            ExitCode::InvalidRootUrl => "Invalid taskcluster root url specified.",
            ExitCode::FetchError => "Error fetching references/manifests from taskcluster.",
            ExitCode::PythonDirectory => "Error creating python source directory.",
            ExitCode::NodeDirectory => "Error creating node source directory.",
            ExitCode::GoDirectory => "Error creating go source directory.",
            ExitCode::JavascriptDirectory => "Error creating javascript source directory.",
            ExitCode::JavaDirectory => "Error creating java source directory.",
            ExitCode::WriteError => "Error writing output.",
            ExitCode::InternalError => "Internal error (crash).",
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Success
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

/// Renders the exit code table shown at the end of the usage text.
pub fn exit_code_table() -> String {
    let mut table = String::from("Exit Codes:\n\n");
    for code in ExitCode::ALL {
        // Writing into a String cannot fail
        let _ = writeln!(table, "  {:>3}     {}", code.code(), code.description());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_published_contract() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::InvalidArguments.code(), 1);
        assert_eq!(ExitCode::MissingRootUrl.code(), 64);
        assert_eq!(ExitCode::InternalError.code(), 73);
    }

    #[test]
    fn reserved_codes_are_contiguous() {
        let reserved: Vec<i32> = ExitCode::ALL
            .iter()
            .map(|c| c.code())
            .filter(|c| *c >= 65)
            .collect();

        assert_eq!(reserved, (65..=73).collect::<Vec<_>>());
    }

    #[test]
    fn only_success_is_success() {
        let successes = ExitCode::ALL.iter().filter(|c| c.is_success()).count();
        assert_eq!(successes, 1);
        assert_eq!(i32::from(ExitCode::Success), 0);
    }

    #[test]
    fn table_lists_every_code() {
        let table = exit_code_table();

        assert!(table.starts_with("Exit Codes:"));
        assert!(table.contains("   0     Completed successfully."));
        assert!(table.contains("  64     No taskcluster root URL specified."));
        assert!(table.contains("  69     Error creating go source directory."));
        assert_eq!(table.lines().filter(|l| !l.is_empty()).count(), 13);
    }
}
