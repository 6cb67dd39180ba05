use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use bstr::ByteSlice;
use fxhash::FxHashSet;

use crate::error::{Error, Result};

/// The wiring diagram as written in the input: each source label
/// with the neighbor labels listed after it, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Adjacency {
    pub entries: Vec<(String, Vec<String>)>,
}

impl Adjacency {
    /// Reads and parses the whole file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Adjacency> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Adjacency::from_reader(&mut reader)
    }

    /// Consumes the reader to the end and parses its contents. Each
    /// non-blank line must look like `label: neighbor neighbor ...`.
    pub fn from_reader<T: BufRead>(reader: &mut T) -> Result<Adjacency> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Adjacency::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Adjacency> {
        let mut entries = Vec::new();

        for (ix, line) in ByteSlice::lines(bytes).enumerate() {
            let mut fields = line.fields();

            let first = match fields.next() {
                Some(first) => first,
                None => continue,
            };

            let label = match first.strip_suffix(b":") {
                Some(label) if !label.is_empty() => label,
                _ => {
                    return Err(Error::MalformedLine {
                        line: ix + 1,
                        content: line.to_str_lossy().into_owned(),
                    })
                }
            };

            let neighbors = fields
                .map(|field| field.to_str_lossy().into_owned())
                .collect();

            entries.push((label.to_str_lossy().into_owned(), neighbors));
        }

        log::debug!("parsed {} adjacency lines", entries.len());

        Ok(Adjacency { entries })
    }

    /// Iterates over every declared (source, neighbor) pair.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(from, tos)| {
            tos.iter().map(move |to| (from.as_str(), to.as_str()))
        })
    }

    /// Every label mentioned in the input, sources and neighbors,
    /// in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut labels = Vec::new();

        for (from, tos) in self.entries.iter() {
            let line = std::iter::once(from).chain(tos.iter());
            for label in line {
                if seen.insert(label.as_str()) {
                    labels.push(label.as_str());
                }
            }
        }

        labels
    }
}

impl std::str::FromStr for Adjacency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Adjacency> {
        Adjacency::from_bytes(s.as_bytes())
    }
}
