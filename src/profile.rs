use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::graph::Edge;

/// Which input to run on. Each input comes with the three edges that
/// were found, by looking at its rendered graph, to cut it in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Example,
    Real,
}

impl Profile {
    pub fn variants() -> [&'static str; 2] {
        ["example", "real"]
    }

    pub fn input_path(self) -> PathBuf {
        let file = match self {
            Profile::Example => "example.txt",
            Profile::Real => "input.txt",
        };
        [env!("CARGO_MANIFEST_DIR"), "inputs", file].iter().collect()
    }

    pub fn bridges(self) -> BTreeSet<Edge> {
        let pairs: [(&str, &str); 3] = match self {
            Profile::Example => [("hfx", "pzl"), ("bvb", "cmg"), ("nvd", "jqt")],
            Profile::Real => [("bdj", "vfh"), ("ztc", "ttv"), ("bnv", "rpd")],
        };
        pairs.iter().map(|&pair| Edge::from(pair)).collect()
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Profile, Error> {
        match s {
            "example" => Ok(Profile::Example),
            "real" => Ok(Profile::Real),
            other => Err(Error::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Example => write!(f, "example"),
            Profile::Real => write!(f, "real"),
        }
    }
}
