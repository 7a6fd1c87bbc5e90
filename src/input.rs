/// Live operator input for one drivetrain.
///
/// Axis values are nominally in `[-1, 1]`. Out-of-range or non-finite
/// readings pass through the pipeline unvalidated.
pub trait Input {
    /// Forward/backward stick axis.
    fn x(&mut self) -> f32;

    /// Strafe stick axis.
    fn y(&mut self) -> f32;

    /// Rotation stick axis.
    fn rotation(&mut self) -> f32;

    /// Whether commanded velocity is interpreted in the field frame rather
    /// than the robot frame.
    fn field_relative(&mut self) -> bool;
}

/// Adapts four closures into an [`Input`], for canned signals in tests and
/// demos or for wiring up an existing polling layer.
pub struct FnInput<X, Y, R, M> {
    pub x: X,
    pub y: Y,
    pub rotation: R,
    pub field_relative: M,
}

impl<X, Y, R, M> Input for FnInput<X, Y, R, M>
where
    X: FnMut() -> f32,
    Y: FnMut() -> f32,
    R: FnMut() -> f32,
    M: FnMut() -> bool,
{
    fn x(&mut self) -> f32 {
        (self.x)()
    }

    fn y(&mut self) -> f32 {
        (self.y)()
    }

    fn rotation(&mut self) -> f32 {
        (self.rotation)()
    }

    fn field_relative(&mut self) -> bool {
        (self.field_relative)()
    }
}
