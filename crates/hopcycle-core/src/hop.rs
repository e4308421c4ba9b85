/// Hop records: the composite graph key, the directed edge, and the line parser.
///
/// A hop line has exactly four pipe-delimited fields in fixed order:
///
/// ```text
/// source_system|destination_system|claim_id|status_code
/// ```
///
/// There is no quoting or escaping. Each field is trimmed of surrounding
/// whitespace before use; empty fields are accepted as empty strings.
use std::fmt;

use serde::Serialize;

/// Number of pipe-delimited fields in a well-formed hop line.
pub const HOP_FIELD_COUNT: usize = 4;

/// Field separator used in hop lines.
pub const FIELD_SEPARATOR: char = '|';

// ---------------------------------------------------------------------------
// GraphKey
// ---------------------------------------------------------------------------

/// Composite identifier selecting which independent graph a hop belongs to.
///
/// Two hops with equal keys belong to the same graph. Ordering is
/// lexicographic on `claim_id`, then `status_code`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GraphKey {
    /// Claim identifier (third field of a hop line).
    pub claim_id: String,
    /// Status code (fourth field of a hop line).
    pub status_code: String,
}

impl GraphKey {
    /// Builds a key from its two components.
    pub fn new(claim_id: impl Into<String>, status_code: impl Into<String>) -> Self {
        Self {
            claim_id: claim_id.into(),
            status_code: status_code.into(),
        }
    }
}

impl fmt::Display for GraphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.claim_id, self.status_code)
    }
}

// ---------------------------------------------------------------------------
// Edge / Hop
// ---------------------------------------------------------------------------

/// A directed edge between two systems, as observed in one hop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The system the hop left from.
    pub source: String,
    /// The system the hop arrived at.
    pub destination: String,
}

impl Edge {
    /// Builds an edge from `source` to `destination`.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Returns `true` if the edge starts and ends at the same system.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// One parsed hop: the graph it belongs to and the edge it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// The graph this hop belongs to.
    pub key: GraphKey,
    /// The directed edge observed.
    pub edge: Edge,
}

impl Hop {
    /// Convenience constructor used heavily by tests and the bench generator.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        claim_id: impl Into<String>,
        status_code: impl Into<String>,
    ) -> Self {
        Self {
            key: GraphKey::new(claim_id, status_code),
            edge: Edge::new(source, destination),
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.edge.source, self.edge.destination, self.key.claim_id, self.key.status_code
        )
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Errors produced when a line cannot be parsed into a [`Hop`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line did not split into exactly [`HOP_FIELD_COUNT`] fields.
    #[error("expected 4 pipe-delimited fields, found {found} in {line:?}")]
    FieldCount {
        /// Number of fields the line actually split into.
        found: usize,
        /// The offending line, trimmed.
        line: String,
    },
}

/// Parses one hop line.
///
/// Surrounding whitespace (including a trailing newline) is ignored, and
/// every field is trimmed.
///
/// # Errors
///
/// Returns [`RecordError::FieldCount`] if the line does not contain exactly
/// four pipe-delimited fields.
pub fn parse_hop(line: &str) -> Result<Hop, RecordError> {
    let trimmed = line.trim();
    let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();

    let &[source, destination, claim_id, status_code] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
            line: trimmed.to_owned(),
        });
    };

    Ok(Hop::new(source, destination, claim_id, status_code))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let hop = parse_hop("Epic|Availity|123|197\n").expect("valid line");
        assert_eq!(hop.key, GraphKey::new("123", "197"));
        assert_eq!(hop.edge, Edge::new("Epic", "Availity"));
    }

    #[test]
    fn trims_every_field() {
        let hop = parse_hop("  Epic | Availity|123 |  197  \r\n").expect("valid line");
        assert_eq!(hop.edge.source, "Epic");
        assert_eq!(hop.edge.destination, "Availity");
        assert_eq!(hop.key.claim_id, "123");
        assert_eq!(hop.key.status_code, "197");
    }

    #[test]
    fn three_fields_is_malformed() {
        let err = parse_hop("Epic|Availity|123\n").expect_err("too few fields");
        match err {
            RecordError::FieldCount { found, line } => {
                assert_eq!(found, 3);
                assert_eq!(line, "Epic|Availity|123");
            }
        }
    }

    #[test]
    fn five_fields_is_malformed() {
        let err = parse_hop("a|b|c|d|e").expect_err("too many fields");
        assert_eq!(
            err,
            RecordError::FieldCount {
                found: 5,
                line: "a|b|c|d|e".to_owned()
            }
        );
    }

    #[test]
    fn empty_fields_are_accepted() {
        let hop = parse_hop("A||c|").expect("four fields, some empty");
        assert_eq!(hop.edge.destination, "");
        assert_eq!(hop.key.status_code, "");
    }

    #[test]
    fn error_message_names_expected_count() {
        let err = parse_hop("only-one").expect_err("malformed");
        let msg = err.to_string();
        assert!(msg.contains("expected 4"), "message: {msg}");
        assert!(msg.contains("found 1"), "message: {msg}");
    }

    #[test]
    fn keys_compare_structurally() {
        let a = GraphKey::new("123", "197");
        let b = GraphKey::new(String::from("123"), String::from("197"));
        assert_eq!(a, b);

        let set: HashSet<GraphKey> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn key_display_is_comma_joined() {
        assert_eq!(GraphKey::new("CLAIM01", "STATUS01").to_string(), "CLAIM01,STATUS01");
    }

    #[test]
    fn hop_display_round_trips_through_parser() {
        let hop = Hop::new("SM", "SH", "CLAIM01", "STATUS01");
        let reparsed = parse_hop(&hop.to_string()).expect("display output parses");
        assert_eq!(reparsed, hop);
    }

    #[test]
    fn self_loop_detection() {
        assert!(Edge::new("A", "A").is_self_loop());
        assert!(!Edge::new("A", "B").is_self_loop());
    }
}
