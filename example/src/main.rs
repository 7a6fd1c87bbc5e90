use std::cell::Cell;

use teleop::input::FnInput;
use teleop::{ChassisCommand, Drive, Teleop, VelocityShaper, NOMINAL_PERIOD};

struct ConsoleDrive;

impl Drive for ConsoleDrive {
    fn drive(&mut self, command: ChassisCommand) {
        println!(
            "vx {:+.3}  vy {:+.3}  omega {:+.3}  field_relative {}",
            command.vx, command.vy, command.omega, command.field_relative
        );
    }
}

fn main() {
    let cycle = Cell::new(0u32);

    // Full forward deflection for the first two seconds, then released
    let input = FnInput {
        x: || if cycle.get() < 100 { -1. } else { 0. },
        y: || 0.,
        rotation: || if cycle.get() < 100 { 0.25 } else { 0. },
        field_relative: || true,
    };

    let mut teleop = Teleop::new(input, VelocityShaper::default(), ConsoleDrive);

    for i in 0..150 {
        cycle.set(i);
        teleop.tick(NOMINAL_PERIOD);
    }

    teleop.stop();
}
