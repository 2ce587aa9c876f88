use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Too many countries selected for comparison: {selected} (maximum is {max})")]
    TooManySelected { selected: usize, max: usize },

    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),
}
