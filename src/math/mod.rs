mod mat4;
mod scalar;
mod vec3;

pub use mat4::{Mat4, Mat4d, Mat4f};
pub use scalar::Scalar;
pub use vec3::{Vec3, Vec3d, Vec3f};
