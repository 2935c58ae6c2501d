pub mod series;
pub mod types;

pub use series::{Series, SeriesOptions};
pub use types::Viewport;
