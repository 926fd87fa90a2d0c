pub mod vector3;

pub use vector3::Vector3;

/// Converts a world coordinate to the coordinate of the block containing it.
pub fn block_coord(coord: f64) -> i32 {
    coord.floor() as i32
}
