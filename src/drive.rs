use num_complex::Complex32;

/// One cycle's chassis velocity setpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChassisCommand {
    /// Linear velocity along the forward axis, m/s.
    pub vx: f32,

    /// Linear velocity along the strafe axis, m/s.
    pub vy: f32,

    /// Angular velocity, rad/s.
    pub omega: f32,

    /// Interpret the linear velocity in the field frame rather than the
    /// robot frame.
    pub field_relative: bool,

    /// Drive the wheels with velocity feedback instead of open loop.
    pub closed_loop: bool,
}

impl ChassisCommand {
    pub fn new(velocity: Complex32, omega: f32, field_relative: bool, closed_loop: bool) -> Self {
        Self {
            vx: velocity.re,
            vy: velocity.im,
            omega,
            field_relative,
            closed_loop,
        }
    }

    /// Full stop: zero velocities, field relative, open loop.
    pub fn stopped() -> Self {
        Self {
            vx: 0.,
            vy: 0.,
            omega: 0.,
            field_relative: true,
            closed_loop: false,
        }
    }
}

/// The downstream drivetrain interface. Implementations own the inverse
/// kinematics and hardware; they are expected not to block and to accept a
/// zero command at any time.
pub trait Drive {
    fn drive(&mut self, command: ChassisCommand);
}
