use hearth_util::math::Vector3;

/// A point in a named world, with facing.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub world: String,
    pub position: Vector3<f64>,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    pub fn new(world: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            world: world.into(),
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// The location of the corner of a block.
    pub fn of_block(world: impl Into<String>, block: Vector3<i32>) -> Self {
        Self::new(world, block.into())
    }

    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    pub fn block_position(&self) -> Vector3<i32> {
        self.position.to_block()
    }
}
