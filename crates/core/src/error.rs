use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input was closed before a valid number was entered.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}
