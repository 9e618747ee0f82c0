//! Turning user-facing names into states.
//!
//! Resolution never prompts: several matches come back as `Resolution::Ambiguous` and the caller
//! decides how to pick one.
//!
//! Every backend follows the same rule: an exact identifier wins outright; otherwise the query is
//! compared with display names under `name_key` (trimmed, Unicode-lowercased).

use std::convert::Infallible;

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::ResolveError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate<S> {
    pub state: S,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<S> {
    Resolved(S),
    Ambiguous(Vec<Candidate<S>>),
    NotFound,
}

impl<S> Resolution<S> {
    pub fn is_resolved(&self) -> bool { matches!(self, Resolution::Resolved(_)) }

    pub fn into_result(self, query: &str) -> Result<S, ResolveError> {
        match self {
            Resolution::Resolved(s) => Ok(s),
            Resolution::Ambiguous(cands) => Err(ResolveError::Ambiguous {
                query: query.to_string(),
                candidates: cands.into_iter().map(|c| c.description).collect(),
            }),
            Resolution::NotFound => Err(ResolveError::NotFound { query: query.to_string() }),
        }
    }
}

impl<S> From<Vec<Candidate<S>>> for Resolution<S> {
    fn from(mut cands: Vec<Candidate<S>>) -> Self {
        match cands.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Resolved(cands.remove(0).state),
            _ => Resolution::Ambiguous(cands),
        }
    }
}

pub trait Resolver<S> {
    type Error;

    fn resolve(&self, query: &str) -> Result<Resolution<S>, Self::Error>;
}

/// Name → states index owned by whoever builds it: exact ids plus case-insensitive names.
#[derive(Clone, Debug)]
pub struct NameIndex<S> {
    ids: IndexMap<String, S>,
    names: IndexMap<String, Vec<Candidate<S>>>,
}

/// Comparison key for display names.
pub fn name_key(name: &str) -> String { name.trim().to_lowercase() }

impl<S: Clone + PartialEq> NameIndex<S> {
    pub fn new() -> Self { Self { ids: IndexMap::new(), names: IndexMap::new() } }

    /// Registers an identifier. Ids match exactly and take precedence over names.
    pub fn insert_id(&mut self, id: &str, state: S) { self.ids.insert(id.to_string(), state); }

    /// Registers `state` under `name`. Registering the same state twice under one name is a no-op.
    pub fn insert(&mut self, name: &str, state: S, description: impl Into<String>) {
        let entry = self.names.entry(name_key(name)).or_default();
        if entry.iter().any(|c| c.state == state) {
            return;
        }
        entry.push(Candidate { state, description: description.into() });
    }

    pub fn candidates(&self, name: &str) -> &[Candidate<S>] {
        self.names.get(&name_key(name)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn id(&self, id: &str) -> Option<&S> { self.ids.get(id.trim()) }

    /// Distinct ids and names registered.
    pub fn len(&self) -> usize { self.ids.len() + self.names.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() && self.names.is_empty() }
}

impl<S: Clone + PartialEq> Default for NameIndex<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Clone + PartialEq> Resolver<S> for NameIndex<S> {
    type Error = Infallible;

    fn resolve(&self, query: &str) -> Result<Resolution<S>, Infallible> {
        if let Some(state) = self.id(query) {
            return Ok(Resolution::Resolved(state.clone()));
        }
        Ok(Resolution::from(self.candidates(query).to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NameIndex<u32> {
        let mut idx = NameIndex::new();
        idx.insert("Kevin Bacon", 102, "Kevin Bacon (1958)");
        idx.insert("Emma Watson", 914612, "Emma Watson (1990)");
        idx.insert("Emma Watson", 914613, "Emma Watson (1977)");
        idx.insert("emma watson", 914613, "duplicate");
        idx
    }

    #[test]
    fn single_match_resolves() {
        assert_eq!(index().resolve("  kevin BACON ").unwrap(), Resolution::Resolved(102));
    }

    #[test]
    fn several_matches_are_ambiguous_not_prompted() {
        let res = index().resolve("Emma Watson").unwrap();
        let Resolution::Ambiguous(cands) = res.clone() else { panic!("expected ambiguity, got {res:?}") };
        let ids: Vec<u32> = cands.iter().map(|c| c.state).collect();
        assert_eq!(ids, vec![914612, 914613]);
        let err = res.into_result("Emma Watson").unwrap_err();
        assert_eq!(err, ResolveError::Ambiguous {
            query: "Emma Watson".into(),
            candidates: vec!["Emma Watson (1990)".into(), "Emma Watson (1977)".into()],
        });
    }

    #[test]
    fn unknown_name_is_not_found() {
        let res = index().resolve("Nobody").unwrap();
        assert_eq!(res.clone().into_result("Nobody"), Err(ResolveError::NotFound { query: "Nobody".into() }));
        assert!(!res.is_resolved());
    }

    #[test]
    fn separate_indexes_do_not_share_state() {
        let mut a: NameIndex<u32> = NameIndex::new();
        let b: NameIndex<u32> = NameIndex::default();
        a.insert("X", 1, "x");
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn exact_id_beats_a_matching_name() {
        let mut idx: NameIndex<&str> = NameIndex::new();
        idx.insert_id("1", "one");
        idx.insert("Uno", "one", "Uno (1)");
        idx.insert_id("2", "two");
        idx.insert("1", "two", "1 (2)");
        assert_eq!(idx.resolve(" 1 ").unwrap(), Resolution::Resolved("one"));
        assert_eq!(idx.resolve("uno").unwrap(), Resolution::Resolved("one"));
        assert_eq!(idx.len(), 4);
    }

    #[test]
    fn name_key_folds_unicode_case() {
        assert_eq!(name_key("  ÄRGER im Élysée "), "ärger im élysée");
    }
}
