use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid legend options: {0}")]
    InvalidLegendOptions(String),

    #[error("{0} legend rendered before init")]
    LegendNotInitialized(&'static str),
}
