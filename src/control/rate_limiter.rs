use num_traits::Float;

/// Rate limiter with independent bounds for rising and falling magnitude.
///
/// A small acceleration limit paired with a large deceleration limit ramps
/// the signal up gently while still letting it collapse to zero almost
/// immediately.
pub struct AsymmetricRateLimiter {
    accel_limit: f32,
    decel_limit: f32,
    y: f32,
}

impl AsymmetricRateLimiter {
    /// Both limits are positive, in signal units per second. The output
    /// starts at zero.
    pub fn new(accel_limit: f32, decel_limit: f32) -> Self {
        Self {
            accel_limit,
            decel_limit,
            y: 0.,
        }
    }

    /// Move the output toward `u` by at most the applicable limit times `t_s`.
    pub fn calculate(&mut self, t_s: f32, u: f32) -> f32 {
        let delta = u - self.y;

        // Growing magnitude is bounded by the acceleration limit, shrinking
        // magnitude by the deceleration limit. The comparison is on
        // magnitudes, not on the sign of delta.
        let limit = if u.abs() > self.y.abs() {
            self.accel_limit
        } else {
            self.decel_limit
        };

        let bound = limit * t_s;
        self.y += delta.clamp(-bound, bound);
        self.y
    }
}
