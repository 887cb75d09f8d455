use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: LevelFilter = LevelFilter::Warn;

/// Initializes the global logger. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    builder(Env::default()).init();
}

fn builder(env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or(DEFAULT_FILTER.as_str()));
    builder.format_timestamp(None);
    builder
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Metadata};

    use super::*;

    // Note: Logger can only be initialized once per process, so these tests
    // build a logger without installing it.

    fn unset_env() -> Env<'static> {
        Env::new().filter("TC_CLIENT_GENERATOR_TEST_UNSET_LOG")
    }

    fn enabled(logger: &impl Log, level: Level) -> bool {
        logger.enabled(&Metadata::builder().level(level).target("tc_client_generator").build())
    }

    #[test]
    fn builds_with_warn_filter_when_variable_unset() {
        let logger = builder(unset_env()).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn debug_output_is_hidden_by_default() {
        let logger = builder(unset_env()).build();

        assert!(enabled(&logger, Level::Warn));
        assert!(enabled(&logger, Level::Error));
        assert!(!enabled(&logger, Level::Info));
        assert!(!enabled(&logger, Level::Debug));
    }
}
