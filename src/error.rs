#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid MAC address {0:?}: {1}")]
    InvalidMac(String, #[source] crate::mac::ParseMacError),

    #[error("invalid log filter directive: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
