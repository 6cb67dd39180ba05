use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected `label: neighbor ...`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("node {0:?} does not appear in the input")]
    UnknownNode(String),

    #[error("no excluded edges to split the graph at")]
    NoExcludedEdges,

    #[error("unknown profile {0:?}, expected `example` or `real`")]
    UnknownProfile(String),
}
