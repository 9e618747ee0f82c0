use serde::{Deserialize, Serialize};

/// One hop of a path: the label of the edge taken and the state it arrives at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<S> {
    pub label: String,
    pub state: S,
}

/// Edges from the one leaving the source to the one arriving at the target.
/// The source itself is not part of the path; an empty path means source and target coincide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path<S> {
    steps: Vec<Step<S>>,
}

impl<S> Path<S> {
    pub fn empty() -> Self { Self { steps: Vec::new() } }

    pub fn from_steps(steps: Vec<Step<S>>) -> Self { Self { steps } }

    /// Degrees of separation: the number of edges on the path.
    pub fn degrees(&self) -> usize { self.steps.len() }

    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    pub fn steps(&self) -> &[Step<S>] { &self.steps }

    pub fn into_steps(self) -> Vec<Step<S>> { self.steps }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> { self.steps.iter() }

    pub fn states(&self) -> impl Iterator<Item = &S> + '_ { self.steps.iter().map(|s| &s.state) }

    pub fn last_state(&self) -> Option<&S> { self.steps.last().map(|s| &s.state) }
}

impl<'a, S> IntoIterator for &'a Path<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;
    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}

/// Outcome of one search plus the work it took.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport<S> {
    pub path: Option<Path<S>>,
    /// Nodes removed from the frontier and handed to the provider.
    pub expanded: u64,
    /// Nodes created for newly seen states, the root included.
    pub discovered: u64,
}

impl<S> SearchReport<S> {
    pub fn found(&self) -> bool { self.path.is_some() }

    pub fn degrees(&self) -> Option<usize> { self.path.as_ref().map(Path::degrees) }
}
