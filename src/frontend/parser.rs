//! Parsers for the two line-oriented input formats.
//!
//! The d-separation format:
//!
//! ```text
//! N M Q          header: node, edge, and query counts
//! A B            M lines, one directed edge A --> B each
//! A B | C D E    Q lines, one query each; evidence after the pipe may be empty
//! ```
//!
//! The I-equivalence format is two consecutive sections of
//!
//! ```text
//! N M            header: node and edge counts
//! A B            M edge lines
//! ```
//!
//! Parsing fails fast: a malformed line, a line count that contradicts a
//! header, or trailing garbage rejects the whole run before any graph is
//! built. Blank lines are skipped wherever they appear.

use crate::engine::errors::QueryError;

/// One d-separation query: are `x` and `y` d-separated given `observed`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsepQuery {
    pub x: String,
    pub y: String,
    /// Evidence labels; may be empty.
    pub observed: Vec<String>,
}

/// An edge list together with the node count its header declared.
///
/// The declared node count is carried through for interface fidelity but
/// never enforced: labels are opaque, and a label that appears in no edge
/// simply behaves as an isolated node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSpec {
    pub declared_nodes: usize,
    pub edges: Vec<(String, String)>,
}

/// Parsed d-separation batch: one graph plus its queries, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsepInput {
    pub graph: GraphSpec,
    pub queries: Vec<DsepQuery>,
}

/// Parsed I-equivalence comparison: the two structures to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IequivInput {
    pub first: GraphSpec,
    pub second: GraphSpec,
}

/// Cursor over non-blank input lines, tracking line numbers for errors.
struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
        }
    }

    /// Next non-blank line, or a validation error naming what was expected.
    fn next_line(&mut self, expected: &str) -> Result<&'a str, QueryError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
        Err(QueryError::Validation(format!(
            "unexpected end of input after line {}: expected {}",
            self.line_no, expected
        )))
    }

    /// Rejects any non-blank line remaining after the declared input.
    fn expect_end(&mut self) -> Result<(), QueryError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            if !line.trim().is_empty() {
                return Err(QueryError::Validation(format!(
                    "line {}: trailing input after the declared line counts",
                    self.line_no
                )));
            }
        }
        Ok(())
    }

    /// Parses a header line of exactly `counts.len()` non-negative integers.
    fn header(&mut self, counts: &mut [usize], what: &str) -> Result<(), QueryError> {
        let line = self.next_line(what)?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != counts.len() {
            return Err(QueryError::Parse(format!(
                "line {}: {} must be {} integers, got {:?}",
                self.line_no,
                what,
                counts.len(),
                line.trim()
            )));
        }
        for (slot, field) in counts.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| {
                QueryError::Parse(format!(
                    "line {}: invalid integer {:?} in {}",
                    self.line_no, field, what
                ))
            })?;
        }
        Ok(())
    }

    /// Parses one `A B` edge line.
    fn edge(&mut self) -> Result<(String, String), QueryError> {
        let line = self.next_line("an edge line")?;
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(src), Some(dst), None) => Ok((src.to_string(), dst.to_string())),
            _ => Err(QueryError::Parse(format!(
                "line {}: edge line must be two labels, got {:?}",
                self.line_no,
                line.trim()
            ))),
        }
    }

    /// Parses one `A B | C D E ...` query line.
    fn query(&mut self) -> Result<DsepQuery, QueryError> {
        let line = self.next_line("a query line")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 || fields[2] != "|" {
            return Err(QueryError::Parse(format!(
                "line {}: query line must look like \"A B | C D ...\", got {:?}",
                self.line_no,
                line.trim()
            )));
        }
        Ok(DsepQuery {
            x: fields[0].to_string(),
            y: fields[1].to_string(),
            observed: fields[3..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Parses `edge_count` edge lines into a [`GraphSpec`].
    fn graph_section(
        &mut self,
        declared_nodes: usize,
        edge_count: usize,
    ) -> Result<GraphSpec, QueryError> {
        let mut edges = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            edges.push(self.edge()?);
        }
        Ok(GraphSpec {
            declared_nodes,
            edges,
        })
    }
}

/// Parses the d-separation batch format.
pub fn parse_dsep_input(source: &str) -> Result<DsepInput, QueryError> {
    let mut cursor = Cursor::new(source);

    let mut counts = [0usize; 3];
    cursor.header(&mut counts, "the N M Q header")?;
    let [declared_nodes, edge_count, query_count] = counts;

    let graph = cursor.graph_section(declared_nodes, edge_count)?;

    let mut queries = Vec::with_capacity(query_count);
    for _ in 0..query_count {
        queries.push(cursor.query()?);
    }
    cursor.expect_end()?;

    Ok(DsepInput { graph, queries })
}

/// Parses the I-equivalence comparison format.
pub fn parse_iequiv_input(source: &str) -> Result<IequivInput, QueryError> {
    let mut cursor = Cursor::new(source);

    let mut counts = [0usize; 2];
    cursor.header(&mut counts, "the first N M header")?;
    let first = cursor.graph_section(counts[0], counts[1])?;

    cursor.header(&mut counts, "the second N M header")?;
    let second = cursor.graph_section(counts[0], counts[1])?;
    cursor.expect_end()?;

    Ok(IequivInput { first, second })
}
