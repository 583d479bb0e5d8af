//! Snowfall parameters.
//!
//! The animation itself is CSS; this module only decides what each flake
//! looks like. Randomness is injected as uniforms in `[0, 1)` so the
//! sampling is testable and the crate stays free of an RNG dependency;
//! the browser side passes `Math.random()`.

/// Flakes kept falling at any one time.
pub const SNOWFLAKE_COUNT: usize = 100;

/// CSS inputs for one snowflake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowflakeSpec {
    /// Diameter, 2–6 px.
    pub size_px: f64,
    /// Horizontal start position, 0–100 %.
    pub left_pct: f64,
    /// Fall duration, 5–15 s.
    pub duration_s: f64,
    /// Animation delay, 0–5 s.
    pub delay_s: f64,
    /// Horizontal drift over the fall, −50 to +50 px.
    pub drift_px: f64,
}

impl SnowflakeSpec {
    /// Map five uniform samples onto the flake parameter ranges.
    pub fn from_uniform(u: [f64; 5]) -> Self {
        SnowflakeSpec {
            size_px: u[0] * 4.0 + 2.0,
            left_pct: u[1] * 100.0,
            duration_s: u[2] * 10.0 + 5.0,
            delay_s: u[3] * 5.0,
            drift_px: (u[4] - 0.5) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_range_bounds() {
        let low = SnowflakeSpec::from_uniform([0.0; 5]);
        assert_eq!(low.size_px, 2.0);
        assert_eq!(low.left_pct, 0.0);
        assert_eq!(low.duration_s, 5.0);
        assert_eq!(low.delay_s, 0.0);
        assert_eq!(low.drift_px, -50.0);

        let high = SnowflakeSpec::from_uniform([1.0; 5]);
        assert_eq!(high.size_px, 6.0);
        assert_eq!(high.duration_s, 15.0);
        assert_eq!(high.drift_px, 50.0);
    }

    #[test]
    fn midpoint_has_no_drift() {
        let mid = SnowflakeSpec::from_uniform([0.5; 5]);
        assert_eq!(mid.drift_px, 0.0);
        assert_eq!(mid.size_px, 4.0);
    }
}
