#[derive(Clone, Copy, Debug, PartialEq, Hash, Eq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl Vector3<f64> {
    /// The coordinates of the block this point lies in.
    pub fn to_block(&self) -> Vector3<i32> {
        Vector3 {
            x: super::block_coord(self.x),
            y: super::block_coord(self.y),
            z: super::block_coord(self.z),
        }
    }
}

impl From<Vector3<i32>> for Vector3<f64> {
    fn from(vector: Vector3<i32>) -> Self {
        Vector3 {
            x: vector.x.into(),
            y: vector.y.into(),
            z: vector.z.into(),
        }
    }
}
