use thiserror::Error;

use crate::graphs::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input in line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    // Named `origin` because thiserror reserves fields called `source`.
    #[error("vertex {target} is not reachable from vertex {origin}")]
    UnreachableTarget { origin: Vertex, target: Vertex },

    #[error("vertex {0} does not exist")]
    UnknownVertex(Vertex),

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
