use tracing::Level;

/// Install the global fmt subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
    if result.is_ok() {
        tracing::debug!(%level, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Level::WARN);
        init(Level::DEBUG);
    }
}
