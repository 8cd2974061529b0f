use std::str::FromStr;
use tracing::Level;

pub(crate) fn parse_level(name: Option<&str>) -> Level {
    name.and_then(|n| Level::from_str(n.trim()).ok()).unwrap_or(Level::INFO)
}

// One JSON object per line without ANSI colors or timestamps, CloudWatch stamps
// ingestion time itself. LMS_LOG_LEVEL overrides the INFO default.
pub fn setup_tracing() {
    let level = parse_level(std::env::var("LMS_LOG_LEVEL").ok().as_deref());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logs::parse_level;

    #[tokio::test]
    async fn test_should_parse_log_level() {
        assert_eq!(Level::DEBUG, parse_level(Some("debug")));
        assert_eq!(Level::WARN, parse_level(Some(" WARN ")));
        assert_eq!(Level::INFO, parse_level(Some("chatty")));
        assert_eq!(Level::INFO, parse_level(None));
    }
}
