pub mod config;
pub mod geometry;
pub mod model;
pub mod size;

pub use config::{ConfigError, EditorConfig};
pub use geometry::{Measurement, RawTextMetrics, TextMeasure, bounding_box, item_bounds, measure};
pub use model::*;
pub use size::SizePolicy;
