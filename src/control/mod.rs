mod deadband;
pub use deadband::Deadband;

mod rate_limiter;
pub use rate_limiter::AsymmetricRateLimiter;

mod shaper;
pub use shaper::{Builder, VelocityShaper};
