use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Dense node identifier assigned by the graph builder.
pub type NodeIndex = usize;

/// Classification of a location inside the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Classroom,
    Corridor,
    Stairwell,
    Exit,
    Other,
}

impl NodeType {
    /// Every variant in display order.
    pub const ALL: [NodeType; 5] = [
        NodeType::Classroom,
        NodeType::Corridor,
        NodeType::Stairwell,
        NodeType::Exit,
        NodeType::Other,
    ];

    /// Infer the type from the naming convention of the label.
    ///
    /// Matching is a case-insensitive substring test checked in a fixed
    /// order, so `"Pasillo_Salida"` is a corridor, not an exit.
    pub fn classify(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains("aula") {
            NodeType::Classroom
        } else if lowered.contains("pasillo") {
            NodeType::Corridor
        } else if lowered.contains("escala") || lowered.contains("escalera") {
            NodeType::Stairwell
        } else if lowered.contains("salida") {
            NodeType::Exit
        } else {
            NodeType::Other
        }
    }

    pub fn is_exit(self) -> bool {
        self == NodeType::Exit
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Classroom => "classroom",
            NodeType::Corridor => "corridor",
            NodeType::Stairwell => "stairwell",
            NodeType::Exit => "exit",
            NodeType::Other => "other",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown node type '{}'; expected one of: {}",
                    value,
                    NodeType::ALL.map(NodeType::as_str).join(", ")
                )
            })
    }
}

/// Compare labels so that embedded numbers order numerically.
///
/// `"Aula_9"` sorts before `"Aula_10"`. Non-digit runs compare as plain
/// strings.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x, y) {
                    (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
                    (Chunk::Digits(x), Chunk::Text(y))
                    | (Chunk::Text(x), Chunk::Digits(y))
                    | (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn compare_digits(x: &str, y: &str) -> Ordering {
    let x_trimmed = x.trim_start_matches('0');
    let y_trimmed = y.trim_start_matches('0');
    x_trimmed
        .len()
        .cmp(&y_trimmed.len())
        .then_with(|| x_trimmed.cmp(y_trimmed))
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(value: &'a str) -> Self {
        Self { rest: value }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}
