/// Crate version from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git revision injected by the build script, if the build ran in a checkout.
pub const REVISION: Option<&str> = option_env!("TC_CLIENT_GENERATOR_REVISION");

const COMMITS_URL: &str = "https://github.com/taskcluster/tc-client-generator/commits/";

/// Returns the name printed for `--version` and at the top of the usage text.
pub fn version_name() -> String {
    format_version_name(VERSION, REVISION)
}

fn format_version_name(version: &str, revision: Option<&str>) -> String {
    let mut name = format!("tc-client-generator {}", version);
    if let Some(revision) = revision.filter(|r| !r.is_empty()) {
        name.push_str(&format!(" [ revision: {}{} ]", COMMITS_URL, revision));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_name_without_revision() {
        assert_eq!(
            format_version_name("1.2.3", None),
            "tc-client-generator 1.2.3"
        );
    }

    #[test]
    fn version_name_ignores_empty_revision() {
        assert_eq!(
            format_version_name("1.2.3", Some("")),
            "tc-client-generator 1.2.3"
        );
    }

    #[test]
    fn version_name_links_revision() {
        let revision = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(
            format_version_name("0.0.1", Some(revision)),
            "tc-client-generator 0.0.1 [ revision: \
             https://github.com/taskcluster/tc-client-generator/commits/\
             0123456789abcdef0123456789abcdef01234567 ]"
        );
    }

    #[test]
    fn injected_revision_is_a_git_sha() {
        // Builds outside a git checkout carry no revision
        let Some(revision) = REVISION else {
            return;
        };
        let sha = regex::Regex::new("^[0-9a-f]{40}$").unwrap();
        assert!(
            sha.is_match(revision),
            "git revision '{}' does not look like a full commit SHA; \
             set TC_CLIENT_GENERATOR_REVISION to the output of `git rev-parse HEAD`",
            revision
        );
    }

    #[test]
    fn version_name_uses_manifest_version() {
        assert!(version_name().starts_with(&format!("tc-client-generator {}", VERSION)));
    }
}
