use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Selection is full: at most {max} countries can be compared at once")]
    SelectionFull { max: usize },

    #[error("Country '{0}' is already selected")]
    AlreadySelected(String),
}
