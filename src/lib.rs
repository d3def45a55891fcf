mod app;
mod config;
pub mod error;
pub mod math;

// Re-export the main public interface
pub use app::{render_demo, run};
pub use config::DemoConfig;
pub use error::MathError;
pub use math::{Mat4, Mat4d, Mat4f, Scalar, Vec3, Vec3d, Vec3f};
