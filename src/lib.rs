#![no_std]

use log::debug;

pub mod control;
pub use control::VelocityShaper;

pub mod drive;
pub use drive::{ChassisCommand, Drive};

pub mod input;
pub use input::Input;

/// Fixed control cycle period in seconds, for callers without a measured dt.
pub const NOMINAL_PERIOD: f32 = 0.02;

/// One teleop control cycle for a holonomic drivetrain.
///
/// The scheduler calls [`tick`](Teleop::tick) once per period while the
/// operator is driving and [`stop`](Teleop::stop) when the cycle ends.
/// Stopping is terminal: it commands a full stop exactly once and every
/// later tick is ignored.
pub struct Teleop<I, D> {
    pub input: I,
    pub shaper: VelocityShaper,
    pub drive: D,
    stopped: bool,
}

impl<I, D> Teleop<I, D> {
    pub fn new(input: I, shaper: VelocityShaper, drive: D) -> Self {
        Self {
            input,
            shaper,
            drive,
            stopped: false,
        }
    }

    /// Run one control cycle: read the sticks, shape, command the drivetrain.
    pub fn tick(&mut self, t_s: f32)
    where
        I: Input,
        D: Drive,
    {
        if self.stopped {
            return;
        }

        let x = self.input.x();
        let y = self.input.y();
        let rotation = self.input.rotation();
        let field_relative = self.input.field_relative();

        let (velocity, omega) = self.shaper.shape(t_s, x, y, rotation);

        // Teleop always drives the wheels open loop
        self.drive
            .drive(ChassisCommand::new(velocity, omega, field_relative, false));
    }

    /// End the cycle, whether it completed or was interrupted. The first
    /// call commands a full stop; later calls and ticks do nothing.
    pub fn stop(&mut self)
    where
        D: Drive,
    {
        if self.stopped {
            return;
        }
        self.stopped = true;

        debug!("teleop cycle ended, commanding stop");
        self.drive.drive(ChassisCommand::stopped());
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
