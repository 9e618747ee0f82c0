use serde::{Deserialize, Serialize};

/// An outbound edge: the state it leads to and a display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<S> {
    pub state: S,
    pub label: String,
}

impl<S> Edge<S> {
    pub fn new(state: S, label: impl Into<String>) -> Self { Self { state, label: label.into() } }
}

/// Lazily yields the outbound edges of a state.
///
/// Within one search the answer for a state must not change; the engine asks at most once per
/// state and does not retry. Edge order decides which of several equally short paths is found.
pub trait NeighborProvider<S> {
    type Error;

    fn neighbors(&self, state: &S) -> Result<Vec<Edge<S>>, Self::Error>;

    /// Display label for a state reached without an edge (the search root).
    fn label(&self, _state: &S) -> Option<String> { None }
}

impl<S, E, F> NeighborProvider<S> for F
where
    F: Fn(&S) -> Result<Vec<Edge<S>>, E>,
{
    type Error = E;

    fn neighbors(&self, state: &S) -> Result<Vec<Edge<S>>, E> { self(state) }
}
