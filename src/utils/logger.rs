use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. The HTTP stack stays at `warn` even
/// in verbose mode.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "news_pulse=debug,reqwest=warn,hyper=warn,hyper_util=warn,info"
    } else {
        "news_pulse=info,warn"
    }
}

/// Logs go to stderr so the report on stdout stays clean.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn test_verbose_keeps_http_stack_quiet() {
        let filter = default_filter(true);
        assert!(filter.contains("news_pulse=debug"));
        assert!(filter.contains("reqwest=warn"));
        assert!(filter.contains("hyper=warn"));
    }
}
