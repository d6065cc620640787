use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassgasError {
    /// Invalid configuration file or parameter value.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated CSV parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
