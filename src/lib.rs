pub mod algorithm;
pub mod dot;
pub mod error;
pub mod graph;
pub mod input;
pub mod profile;
pub mod state;

pub use algorithm::{count_reachable, solve};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use input::Adjacency;
pub use profile::Profile;
