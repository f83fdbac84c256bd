//! Tests for log subscriber setup

#[cfg(test)]
mod tests {
    use towergrid::TowerError;
    use towergrid::io::logging::{build_filter, default_directive, init_logging};

    // Tests quiet runs only show warnings
    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "warn");
    }

    // Tests a filter can always be built
    #[test]
    fn test_build_filter() {
        assert!(!build_filter(true).to_string().is_empty());
    }

    // Tests a second global subscriber is rejected with a Logging error
    // Verified by ignoring the try_init result
    #[test]
    fn test_init_twice_fails() {
        let _first = init_logging(true);
        assert!(matches!(
            init_logging(true),
            Err(TowerError::Logging { .. })
        ));
    }
}
