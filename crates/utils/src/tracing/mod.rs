use statetree_core::constants::{DEFAULT_LOG_FILTER, FALLBACK_LOG_VAR, STATETREE_LOG_VAR};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// The filter comes from `STATETREE_LOG`, then `RUST_LOG`, then the built-in
/// default. Output is a compact stderr formatter, colored only on a TTY.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = env_filter()?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let filter = env_filter().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Build the filter from the environment
pub fn env_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directive = select_directive(
        std::env::var(STATETREE_LOG_VAR).ok(),
        std::env::var(FALLBACK_LOG_VAR).ok(),
    );
    EnvFilter::try_new(directive)
}

fn select_directive(primary: Option<String>, fallback: Option<String>) -> String {
    let usable = |directive: &String| !directive.trim().is_empty();
    primary
        .filter(usable)
        .or_else(|| fallback.filter(usable))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create the span a transition plan is computed in
pub fn transition_span(from: &str, to: &str) -> Span {
    span!(Level::DEBUG, "transition", from = %from, to = %to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_variable_wins() {
        let directive = select_directive(Some("debug".into()), Some("info".into()));
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_fallback_variable() {
        assert_eq!(select_directive(None, Some("info".into())), "info");
        let blank = select_directive(Some("  ".into()), Some("info".into()));
        assert_eq!(blank, "info");
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(select_directive(None, None), DEFAULT_LOG_FILTER);
        let empty = select_directive(Some(String::new()), None);
        assert_eq!(empty, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_init_for_tests_is_idempotent() {
        init_for_tests();
        init_for_tests();
        let span = transition_span("home", "home.detail");
        let _guard = span.enter();
        debug!("inside transition span");
    }
}
