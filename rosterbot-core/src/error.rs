use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
