use std::path::PathBuf;

use clap::{ColorChoice, CommandFactory, Parser};

use crate::exit_code::exit_code_table;
use crate::target::Target;
use crate::version::version_name;

/// Option selecting the root URL.
pub const ROOT_URL_OPTION: &str = "--root-url";

/// Earlier name of `--root-url`, still accepted.
pub const LEGACY_ROOT_URL_OPTION: &str = "--taskcluster-root-url";

const USAGE: &str = "\
tc-client-generator [--python-dir PYTHON_DIR]
                           [--node-dir NODE_DIR]
                           [--go-dir GO_DIR]
                           [--javascript-dir JAVASCRIPT_DIR]
                           [--java-dir JAVA_DIR]
                           [--root-url ROOT_URL]
       tc-client-generator -h|--help
       tc-client-generator --version";

const BEHAVIOUR: &str = "\
If called without any arguments, tc-client-generator will generate _all_
clients in subdirectories of generated-clients/ in the current directory.
Otherwise, only language clients that have a directory specified as a command
option will be generated.

If --root-url is not specified, the environment variable TASKCLUSTER_ROOT_URL
will be used if set, otherwise no changes will be made and exit code 64 will be
returned.

Examples:

1) Generate all language clients in subdirectories of generated-clients/:

  $ tc-client-generator --root-url https://tc.example.com

2) Generate go client in ~/go/src/github.com/foo/bar/vendor and python client
in current directory:

  $ tc-client-generator --go-dir ~/go/src/github.com/foo/bar/vendor --python-dir .
";

/// tc-client-generator generates taskcluster clients in a variety of
/// programming languages.
// Help and version are only honored as the sole argument, which is checked
// before parsing, so the built-in flags are disabled.
#[derive(Parser, Debug, Default)]
#[command(name = "tc-client-generator")]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(color = ColorChoice::Never)]
pub struct Cli {
    /// Directory to generate the python client in
    #[arg(long = "python-dir", value_name = "PYTHON_DIR", allow_hyphen_values = true)]
    pub python_dir: Option<PathBuf>,

    /// Directory to generate the node client in
    #[arg(long = "node-dir", value_name = "NODE_DIR", allow_hyphen_values = true)]
    pub node_dir: Option<PathBuf>,

    /// Directory to generate the go client in
    #[arg(long = "go-dir", value_name = "GO_DIR", allow_hyphen_values = true)]
    pub go_dir: Option<PathBuf>,

    /// Directory to generate the javascript client in
    #[arg(
        long = "javascript-dir",
        value_name = "JAVASCRIPT_DIR",
        allow_hyphen_values = true
    )]
    pub javascript_dir: Option<PathBuf>,

    /// Directory to generate the java client in
    #[arg(long = "java-dir", value_name = "JAVA_DIR", allow_hyphen_values = true)]
    pub java_dir: Option<PathBuf>,

    /// Root URL of the taskcluster deployment to generate clients for
    #[arg(
        long = "root-url",
        alias = "taskcluster-root-url",
        value_name = "ROOT_URL",
        allow_hyphen_values = true,
        overrides_with = "root_url"
    )]
    pub root_url: Option<String>,
}

impl Cli {
    /// Whether `token` is exactly one of the accepted option names.
    pub fn is_option(token: &str) -> bool {
        token == ROOT_URL_OPTION
            || token == LEGACY_ROOT_URL_OPTION
            || Target::ALL.iter().any(|target| target.option() == token)
    }

    /// Directory given on the command line for `target`, if any.
    pub fn dir(&self, target: Target) -> Option<&PathBuf> {
        match target {
            Target::Python => self.python_dir.as_ref(),
            Target::Node => self.node_dir.as_ref(),
            Target::Go => self.go_dir.as_ref(),
            Target::Javascript => self.javascript_dir.as_ref(),
            Target::Java => self.java_dir.as_ref(),
        }
    }

    /// Full usage text, headed by the version name and closed by the exit
    /// code table.
    pub fn usage() -> String {
        let after_help = format!("{}\n{}", BEHAVIOUR, exit_code_table());
        Cli::command()
            .before_long_help(version_name())
            .after_long_help(after_help)
            .render_long_help()
            .to_string()
    }
}
