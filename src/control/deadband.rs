use log::warn;
use num_traits::Float;

/// Zeroes input in a band around the origin so the chassis does not creep
/// on stick noise, and rescales the remainder so the response is continuous
/// at the band edge and still reaches ±1 at ±1.
pub struct Deadband {
    threshold: f32,
}

impl Deadband {
    /// The rescale divides by `1 - threshold`, so the threshold must stay
    /// inside `[0, 1)`; values outside are clamped.
    pub fn new(threshold: f32) -> Self {
        let threshold = if (0. ..1.).contains(&threshold) {
            threshold
        } else {
            warn!("deadband threshold {} outside [0, 1), clamping", threshold);
            threshold.clamp(0., 0.99)
        };

        Self { threshold }
    }

    pub fn apply(&self, u: f32) -> f32 {
        if u.abs() <= self.threshold {
            0.
        } else {
            u.signum() * (u.abs() - self.threshold) / (1. - self.threshold)
        }
    }
}
