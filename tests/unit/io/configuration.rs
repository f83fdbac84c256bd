//! Tests that configuration defaults are mutually consistent

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use towergrid::SimulationConfig;
    use towergrid::io::configuration::{
        DEFAULT_CHURN, DEFAULT_FLOORS_FILLED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
        DEFAULT_TICK_MS, LOG_ENV_VAR, MAX_GRID_DIMENSION, NOISE_FALLOFF, NOISE_RADIUS,
    };
    use towergrid::spatial::noise::attenuation;

    // Tests default grid fits within the dimension limit
    #[test]
    fn test_default_grid_within_limit() {
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_WIDTH));
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_HEIGHT));
        assert!(SimulationConfig::default().validate().is_ok());
    }

    // Tests probabilities lie in the unit interval
    #[test]
    fn test_unit_interval_defaults() {
        assert!((0.0..=1.0).contains(&DEFAULT_CHURN));
        assert!((0.0..=1.0).contains(&DEFAULT_FLOORS_FILLED));
        assert!((0.0..1.0).contains(&NOISE_FALLOFF));
    }

    // Tests noise still reaches the edge of the diffusion radius
    #[test]
    fn test_noise_reaches_radius() {
        assert!(attenuation(NOISE_RADIUS) > 0.0);
        assert!(attenuation(NOISE_RADIUS) < attenuation(1));
    }

    // Tests the default tick is shorter than both pass intervals
    #[test]
    fn test_tick_shorter_than_intervals() {
        let config = SimulationConfig::default();
        let tick = Duration::from_millis(DEFAULT_TICK_MS);
        assert!(!tick.is_zero());
        assert!(tick <= config.transport_frequency);
        assert!(tick <= config.noise_frequency);
        assert!(LOG_ENV_VAR.starts_with("TOWERGRID"));
    }
}
