use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Invalid slot time: {0}")]
    InvalidTime(String),
}

pub type SlotResult<T> = Result<T, SlotError>;
