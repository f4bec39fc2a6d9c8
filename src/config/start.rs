use nalgebra::{Vector2, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where and how fast a vehicle starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartPosConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        Self::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    /// Resolve to a concrete (position, speed, heading) triple.
    pub fn generate(&self) -> (Vector3<f64>, f64, f64) {
        match self {
            StartConfig::Fixed(fixed) => (fixed.position, fixed.speed, fixed.heading),
            StartConfig::Random(random) => random.generate(),
        }
    }
}

/// An exact start state in NED coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixedStartConfig {
    /// Start position, NED (m). Negative z is above the origin.
    pub position: Vector3<f64>,
    /// Initial airspeed along the body x-axis (m/s).
    pub speed: f64,
    /// Initial heading (deg).
    pub heading: f64,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -1000.0),
            speed: 30.0,
            heading: 0.0,
        }
    }
}

/// A start position drawn from a Gaussian ring around an origin, at a
/// uniformly random altitude within a band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomStartPosConfig {
    /// Horizontal origin of the spawn region, NED north/east (m).
    pub origin: Vector2<f64>,
    /// Standard deviation of the horizontal offset (m).
    pub variance: f64,
    /// Lowest spawn altitude (m, positive up).
    pub min_altitude: f64,
    /// Highest spawn altitude (m, positive up).
    pub max_altitude: f64,
    /// Initial airspeed (m/s).
    pub speed: f64,
}

impl Default for RandomStartPosConfig {
    fn default() -> Self {
        Self {
            origin: Vector2::zeros(),
            variance: 500.0,
            min_altitude: 300.0,
            max_altitude: 1500.0,
            speed: 30.0,
        }
    }
}

impl RandomStartPosConfig {
    pub fn generate(&self) -> (Vector3<f64>, f64, f64) {
        let mut rng = rand::thread_rng();

        let (min_altitude, max_altitude) = if self.min_altitude < self.max_altitude {
            (self.min_altitude, self.max_altitude)
        } else {
            log::warn!(
                "Invalid altitude range: min_altitude ({}) >= max_altitude ({}). Swapping values.",
                self.min_altitude,
                self.max_altitude
            );
            (self.max_altitude, self.min_altitude)
        };

        // Box-Muller radius with a uniform bearing
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let radius = self.variance * (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        let north = self.origin.x + radius * theta.cos();
        let east = self.origin.y + radius * theta.sin();
        let altitude = rng.gen_range(min_altitude..max_altitude);
        let heading = rng.gen_range(0.0..360.0);

        (Vector3::new(north, east, -altitude), self.speed, heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_start_respects_altitude_band() {
        let config = RandomStartPosConfig {
            min_altitude: 200.0,
            max_altitude: 400.0,
            ..Default::default()
        };
        for _ in 0..50 {
            let (position, speed, heading) = config.generate();
            let altitude = -position.z;
            assert!((200.0..400.0).contains(&altitude));
            assert_eq!(speed, 30.0);
            assert!((0.0..360.0).contains(&heading));
        }
    }

    #[test]
    fn test_swapped_altitude_band_is_reordered() {
        let config = RandomStartPosConfig {
            min_altitude: 400.0,
            max_altitude: 200.0,
            ..Default::default()
        };
        let (position, _, _) = config.generate();
        assert!((200.0..400.0).contains(&-position.z));
    }
}
