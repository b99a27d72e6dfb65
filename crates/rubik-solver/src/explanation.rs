//! Human-readable record of how a solution was built.

use std::fmt::{self, Display};

use rubik_core::{Move, format_moves};

/// The content of one explanation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationNode {
    /// The moves applied for this step. May be empty when the step found the
    /// cube already in the desired state.
    Moves(Vec<Move>),
    /// A group of sub-steps.
    Steps(Explanation),
}

/// A described step of an explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationEntry {
    description: String,
    node: ExplanationNode,
}

impl ExplanationEntry {
    /// Returns the description of the step.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the moves or sub-steps of the step.
    #[must_use]
    pub fn node(&self) -> &ExplanationNode {
        &self.node
    }
}

/// An ordered tree of described steps.
///
/// Entries keep the order in which they were recorded, and a description may
/// appear more than once. The leaves hold exactly the moves that were applied,
/// so [`move_count`](Self::move_count) always equals the length of the flat
/// solution.
///
/// # Examples
///
/// ```
/// use rubik_core::Move;
/// use rubik_solver::Explanation;
///
/// let mut inner = Explanation::new();
/// inner.push_moves("Place edge", Move::sequence(["U'", "R", "U"]).to_vec());
///
/// let mut explanation = Explanation::new();
/// explanation.push_moves("Orient", vec![Move::from_token("X2")]);
/// explanation.push_steps("Solve edge", inner);
///
/// assert_eq!(explanation.move_count(), 4);
/// assert_eq!(rubik_core::format_moves(&explanation.moves()), "X2 U' R U");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    entries: Vec<ExplanationEntry>,
}

impl Explanation {
    /// Creates an empty explanation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step that applied `moves`.
    pub fn push_moves(&mut self, description: impl Into<String>, moves: Vec<Move>) {
        self.entries.push(ExplanationEntry {
            description: description.into(),
            node: ExplanationNode::Moves(moves),
        });
    }

    /// Appends a group of sub-steps.
    pub fn push_steps(&mut self, description: impl Into<String>, steps: Explanation) {
        self.entries.push(ExplanationEntry {
            description: description.into(),
            node: ExplanationNode::Steps(steps),
        });
    }

    /// Returns the top-level entries.
    #[must_use]
    pub fn entries(&self) -> &[ExplanationEntry] {
        &self.entries
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts the moves in all leaves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match &entry.node {
                ExplanationNode::Moves(moves) => moves.len(),
                ExplanationNode::Steps(steps) => steps.move_count(),
            })
            .sum()
    }

    /// Returns the moves of all leaves in recording order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.move_count());
        self.collect_moves(&mut out);
        out
    }

    fn collect_moves(&self, out: &mut Vec<Move>) {
        for entry in &self.entries {
            match &entry.node {
                ExplanationNode::Moves(moves) => out.extend_from_slice(moves),
                ExplanationNode::Steps(steps) => steps.collect_moves(out),
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for entry in &self.entries {
            let indent = depth * 2;
            match &entry.node {
                ExplanationNode::Moves(moves) if moves.is_empty() => {
                    writeln!(f, "{:indent$}{}", "", entry.description)?;
                }
                ExplanationNode::Moves(moves) => {
                    writeln!(
                        f,
                        "{:indent$}{}: {}",
                        "",
                        entry.description,
                        format_moves(moves)
                    )?;
                }
                ExplanationNode::Steps(steps) => {
                    writeln!(f, "{:indent$}{}:", "", entry.description)?;
                    steps.fmt_indented(f, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
