pub mod hit;
pub mod paint;
pub mod recording;
pub mod schedule;
pub mod surface;

pub use hit::hit_test;
pub use paint::paint_scene;
pub use schedule::RenderScheduler;
pub use surface::{Surface, SurfaceError, TextRun};
