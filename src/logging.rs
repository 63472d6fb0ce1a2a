use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber. Safe to call more than once; a host application
/// that already installed a subscriber keeps its own.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wedding_album=info,reqwest=warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

pub fn log_error(context: &str, error: &dyn std::error::Error) {
    error!("{}: {}", context, error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        log_error("after init", &AppError::Fetch("offline".to_string()));
    }
}
