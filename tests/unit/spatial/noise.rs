//! Tests for the noise attenuation kernel

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use towergrid::spatial::noise::{attenuation, diffused_noise};

    fn single_source(value: f32) -> Array2<f32> {
        let mut levels = Array2::zeros((7, 7));
        if let Some(cell) = levels.get_mut([3, 3]) {
            *cell = value;
        }
        levels
    }

    // Tests attenuation halves per cell of distance
    #[test]
    fn test_attenuation() {
        assert!((attenuation(0) - 1.0).abs() < f32::EPSILON);
        assert!((attenuation(1) - 0.5).abs() < f32::EPSILON);
        assert!((attenuation(2) - 0.25).abs() < f32::EPSILON);
    }

    // Tests diffusion uses Chebyshev distance within the radius
    // Verified by using Manhattan distance
    #[test]
    fn test_diffusion_falloff() {
        let levels = single_source(1.0);
        assert!((diffused_noise(&levels, 3, 3) - 1.0).abs() < f32::EPSILON);
        assert!((diffused_noise(&levels, 4, 4) - 0.5).abs() < f32::EPSILON);
        assert!((diffused_noise(&levels, 5, 1) - 0.25).abs() < f32::EPSILON);
        assert!(diffused_noise(&levels, 6, 3).abs() < f32::EPSILON);
    }

    // Tests a loud cell keeps its own level over quieter neighbours
    #[test]
    fn test_own_level_wins() {
        let mut levels = single_source(1.0);
        if let Some(cell) = levels.get_mut([4, 3]) {
            *cell = 0.8;
        }
        assert!((diffused_noise(&levels, 4, 3) - 0.8).abs() < f32::EPSILON);
    }

    // Tests coordinates at and beyond the array edge
    #[test]
    fn test_edges() {
        let levels = single_source(1.0);
        assert!(diffused_noise(&levels, 0, 0).abs() < f32::EPSILON);
        assert!(diffused_noise(&levels, 20, 20).abs() < f32::EPSILON);
    }
}
