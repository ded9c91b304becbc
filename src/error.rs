use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("failed to write greeting")]
    Output(#[from] std::io::Error),
}
