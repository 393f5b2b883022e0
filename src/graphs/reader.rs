//! Reader for the plain text query format.
//!
//! ```text
//! 4 5        number of vertices and number of edges
//! 1 2 4      one line per edge: vertex, vertex, cost
//! 1 3 1
//! 3 2 1
//! 2 4 1
//! 3 4 5
//! 1 4        source and target
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The number of
//! vertices is advisory only.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use indicatif::ProgressIterator;
use itertools::Itertools;
use log::{info, warn};

use super::edge::WeightedEdge;
use crate::{
    error::{Error, Result},
    search::path::ShortestPathRequest,
    utility::get_progressbar,
};

/// A parsed query: the edge list and the requested endpoints.
#[derive(Clone, Debug)]
pub struct Query {
    pub number_of_vertices: u32,
    pub edges: Vec<WeightedEdge>,
    pub request: ShortestPathRequest,
}

pub fn read_query_from_file(path: &Path) -> Result<Query> {
    let file = File::open(path)?;
    read_query(BufReader::new(file))
}

pub fn read_query<R: BufRead>(reader: R) -> Result<Query> {
    let mut lines = ContentLines::new(reader);

    let (line, content) = lines.require("header")?;
    let [number_of_vertices, number_of_edges] =
        parse_fields(line, &content, ["number of vertices", "number of edges"])?;

    let edges = (0..number_of_edges)
        .progress_with(get_progressbar("reading edges", u64::from(number_of_edges)))
        .map(|_| {
            let (line, content) = lines.require("edge")?;
            let [tail, head, cost] = parse_fields(line, &content, ["tail", "head", "cost"])?;
            WeightedEdge::new(tail, head, cost)
                .ok_or_else(|| Error::malformed(line, "vertex id 0 is reserved"))
        })
        .collect::<Result<Vec<_>>>()?;

    let (line, content) = lines.require("source and target")?;
    let [source, target] = parse_fields(line, &content, ["source", "target"])?;
    let request = ShortestPathRequest::new(source, target)
        .ok_or_else(|| Error::malformed(line, "vertex id 0 is reserved"))?;

    if let Some((line, _)) = lines.next_content()? {
        warn!("ignoring input from line {} on", line);
    }

    let distinct_vertices = edges
        .iter()
        .flat_map(|edge| [edge.tail(), edge.head()])
        .unique()
        .count();
    if distinct_vertices != number_of_vertices as usize {
        warn!(
            "header announces {} vertices but the edges use {}",
            number_of_vertices, distinct_vertices
        );
    }
    info!(
        "read {} edges, query from {} to {}",
        edges.len(),
        request.source(),
        request.target()
    );

    Ok(Query {
        number_of_vertices,
        edges,
        request,
    })
}

/// Non-empty, non-comment lines together with their 1-based line number.
struct ContentLines<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        ContentLines {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        for content in self.lines.by_ref() {
            let content = content.map_err(|error| match error.kind() {
                ErrorKind::InvalidData => Error::malformed(self.line + 1, "invalid UTF-8"),
                _ => Error::Io(error),
            })?;
            self.line += 1;
            let trimmed = content.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some((self.line, content)));
        }
        Ok(None)
    }

    fn require(&mut self, what: &str) -> Result<(usize, String)> {
        self.next_content()?.ok_or_else(|| {
            Error::malformed(self.line + 1, format!("expected {}, found end of input", what))
        })
    }
}

fn parse_fields<const N: usize>(
    line: usize,
    content: &str,
    names: [&str; N],
) -> Result<[u32; N]> {
    let mut values = content.split_whitespace();
    let mut fields = [0; N];

    for (field, name) in fields.iter_mut().zip(names) {
        let value = values
            .next()
            .ok_or_else(|| Error::malformed(line, format!("no {} found", name)))?;
        *field = value
            .parse()
            .map_err(|_| Error::malformed(line, format!("unable to parse {} '{}'", name, value)))?;
    }

    if let Some(value) = values.next() {
        return Err(Error::malformed(line, format!("unexpected field '{}'", value)));
    }

    Ok(fields)
}
