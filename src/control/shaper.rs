use crate::control::{AsymmetricRateLimiter, Deadband};
use core::f32::consts::PI;
use num_complex::Complex32;
use num_traits::Zero;

pub struct Builder {
    deadband: f32,
    accel_limit: f32,
    decel_limit: f32,
    max_translational_speed: f32,
    max_angular_velocity: f32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            deadband: 0.1,
            accel_limit: 3.,
            decel_limit: 100.,
            max_translational_speed: 4.,
            max_angular_velocity: PI,
        }
    }
}

impl Builder {
    /// Stick deflection below this magnitude reads as zero. Must be in `[0, 1)`.
    pub fn deadband(mut self, threshold: f32) -> Self {
        self.deadband = threshold;
        self
    }

    pub fn accel_limit(mut self, limit: f32) -> Self {
        self.accel_limit = limit;
        self
    }

    pub fn decel_limit(mut self, limit: f32) -> Self {
        self.decel_limit = limit;
        self
    }

    /// Chassis speed at full stick deflection, m/s.
    pub fn max_translational_speed(mut self, speed: f32) -> Self {
        self.max_translational_speed = speed;
        self
    }

    /// Chassis turn rate at full stick deflection, rad/s.
    pub fn max_angular_velocity(mut self, velocity: f32) -> Self {
        self.max_angular_velocity = velocity;
        self
    }

    pub fn build(self) -> VelocityShaper {
        VelocityShaper {
            deadband: Deadband::new(self.deadband),
            translation_limiter: AsymmetricRateLimiter::new(self.accel_limit, self.decel_limit),
            strafe_limiter: AsymmetricRateLimiter::new(self.accel_limit, self.decel_limit),
            rotation_limiter: AsymmetricRateLimiter::new(self.accel_limit, self.decel_limit),
            max_translational_speed: self.max_translational_speed,
            max_angular_velocity: self.max_angular_velocity,
        }
    }
}

/// Shapes three raw stick axes into a chassis velocity setpoint.
///
/// Each axis passes through the deadband and its own rate limiter; the two
/// translational axes are then remapped in polar form so the top speed
/// scales with the limited deflection magnitude while the direction of the
/// stick vector is preserved.
pub struct VelocityShaper {
    deadband: Deadband,
    translation_limiter: AsymmetricRateLimiter,
    strafe_limiter: AsymmetricRateLimiter,
    rotation_limiter: AsymmetricRateLimiter,
    max_translational_speed: f32,
    max_angular_velocity: f32,
}

impl Default for VelocityShaper {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl VelocityShaper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Run one cycle: returns the linear velocity vector (m/s) and the
    /// angular velocity (rad/s).
    pub fn shape(&mut self, t_s: f32, x: f32, y: f32, rotation: f32) -> (Complex32, f32) {
        // Deadband then rate limit each axis independently
        let x_val = self.translation_limiter.calculate(t_s, self.deadband.apply(x));
        let y_val = self.strafe_limiter.calculate(t_s, self.deadband.apply(y));
        let rotation_val = self.rotation_limiter.calculate(t_s, self.deadband.apply(rotation));

        // Stick forward reads negative on the device; flip it onto the
        // chassis forward axis
        let stick = Complex32::new(-x_val, y_val);

        // Scale the top speed by the limited deflection magnitude, then
        // recover the vector from its polar form. An exactly centered stick
        // short-circuits to zero rather than taking the angle of a zero
        // vector.
        let velocity = if stick.is_zero() {
            Complex32::zero()
        } else {
            Complex32::from_polar(self.max_translational_speed * stick.norm(), stick.arg())
        };

        (velocity, rotation_val * self.max_angular_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Float;

    /// Deadband off, limits wide open: one call passes the input through.
    fn pass_through() -> VelocityShaper {
        VelocityShaper::builder()
            .deadband(0.)
            .accel_limit(1e4)
            .decel_limit(1e4)
            .build()
    }

    #[test]
    fn magnitude_scales_with_deflection() {
        let mut shaper = pass_through();

        // Post-inversion deflection (0.6, 0.8) has unit norm, so the vector
        // comes out at the full 4 m/s.
        let (velocity, _) = shaper.shape(1., -0.6, 0.8, 0.);
        assert!((velocity.re - 2.4).abs() < 1e-5);
        assert!((velocity.im - 3.2).abs() < 1e-5);
    }

    #[test]
    fn direction_is_preserved() {
        for (x, y) in [(0.3, 0.4), (-0.5, 0.1), (0.9, -0.9), (0., 0.7)] {
            let mut shaper = pass_through();

            let (velocity, _) = shaper.shape(1., x, y, 0.);
            let expected = Float::atan2(y, -x);
            assert!((velocity.arg() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn centered_stick_commands_zero() {
        let mut shaper = pass_through();

        let (velocity, omega) = shaper.shape(1., 0., 0., 0.);
        assert_eq!(velocity, Complex32::zero());
        assert_eq!(omega, 0.);
    }

    #[test]
    fn rotation_scales_to_max_angular_velocity() {
        let mut shaper = VelocityShaper::builder()
            .deadband(0.)
            .accel_limit(1e4)
            .decel_limit(1e4)
            .max_angular_velocity(2.)
            .build();

        let (_, omega) = shaper.shape(1., 0., 0., 0.5);
        assert!((omega - 1.).abs() < 1e-5);
    }

    #[test]
    fn deflection_inside_deadband_never_moves() {
        let mut shaper = VelocityShaper::default();

        for _ in 0..100 {
            let (velocity, omega) = shaper.shape(0.02, 0.05, -0.08, 0.03);
            assert_eq!(velocity, Complex32::zero());
            assert_eq!(omega, 0.);
        }
    }

    #[test]
    fn rate_limiting_caps_the_overall_speed() {
        let mut shaper = VelocityShaper::builder().deadband(0.).build();

        // First 20 ms tick of a full diagonal deflection: each axis has only
        // ramped to 3 * 0.02, so the commanded speed reflects that, not the
        // full deflection.
        let (velocity, _) = shaper.shape(0.02, -1., 1., 0.);
        let expected = 4. * Float::hypot(0.06, 0.06);
        assert!((velocity.norm() - expected).abs() < 1e-5);
    }

    #[test]
    fn well_formed_input_stays_finite() {
        let mut shaper = VelocityShaper::default();

        for i in 0..500 {
            let u = (i as f32 / 250.) - 1.;
            let (velocity, omega) = shaper.shape(0.02, u, -u, u);
            assert!(velocity.re.is_finite());
            assert!(velocity.im.is_finite());
            assert!(omega.is_finite());
        }
    }
}
