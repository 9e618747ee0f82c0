//! JSON graph documents: declared nodes with titles and directed links between them.
//!
//! ```json
//! { "nodes": [{ "id": "S", "title": "Start" }],
//!   "links": [{ "from": "S", "to": "T", "label": "optional" }] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::NameIndex;
use super::adjacency::AdjacencyGraph;

#[derive(Error, Debug)]
pub enum GraphFileError {
    #[error("reading {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("parsing graph document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphFile {
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

impl GraphFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GraphFileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GraphFileError::Io { path: path.display().to_string(), source })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, GraphFileError> { Ok(serde_json::from_str(text)?) }

    pub fn to_graph(&self) -> AdjacencyGraph<String> {
        let mut g = AdjacencyGraph::new();
        for n in &self.nodes {
            g.add_node(n.id.clone(), n.title.clone());
        }
        for l in &self.links {
            g.add_edge(l.from.clone(), l.to.clone(), l.label.clone());
        }
        g
    }

    /// Every node is reachable by its exact id or, case-insensitively, by its title.
    pub fn name_index(&self) -> NameIndex<String> {
        let mut index = NameIndex::new();
        for n in &self.nodes {
            index.insert_id(&n.id, n.id.clone());
            index.insert(&n.title, n.id.clone(), format!("{} ({})", n.title, n.id));
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, NeighborProvider};
    use crate::resolve::{Resolution, Resolver};

    const DOC: &str = r#"{
        "nodes": [
            {"id": "102", "title": "Kevin Bacon"},
            {"id": "129", "title": "Tom Cruise"},
            {"id": "158", "title": "Tom Hanks"}
        ],
        "links": [
            {"from": "102", "to": "158", "label": "Apollo 13"},
            {"from": "158", "to": "129"}
        ]
    }"#;

    #[test]
    fn builds_graph_with_labels() {
        let file = GraphFile::parse(DOC).unwrap();
        let g = file.to_graph();
        assert_eq!(g.neighbors(&"102".to_string()).unwrap(), vec![Edge::new("158".to_string(), "Apollo 13")]);
        assert_eq!(g.neighbors(&"158".to_string()).unwrap(), vec![Edge::new("129".to_string(), "Tom Cruise")]);
    }

    #[test]
    fn name_index_accepts_titles_and_ids() {
        let index = GraphFile::parse(DOC).unwrap().name_index();
        assert_eq!(index.resolve("tom hanks").unwrap(), Resolution::Resolved("158".to_string()));
        assert_eq!(index.resolve("129").unwrap(), Resolution::Resolved("129".to_string()));
        assert_eq!(index.resolve("Meryl Streep").unwrap(), Resolution::NotFound);
    }

    #[test]
    fn an_id_beats_another_node_titled_the_same() {
        let file = GraphFile::parse(r#"{ "nodes": [
            {"id": "7", "title": "Seven"},
            {"id": "8", "title": "7"},
            {"id": "9", "title": "ÉCOLE"}
        ] }"#).unwrap();
        let index = file.name_index();
        assert_eq!(index.resolve("7").unwrap(), Resolution::Resolved("7".to_string()));
        assert_eq!(index.resolve("école").unwrap(), Resolution::Resolved("9".to_string()));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let file = GraphFile::parse("{}").unwrap();
        assert!(file.nodes.is_empty() && file.links.is_empty());
        assert!(matches!(GraphFile::parse("[1,2]"), Err(GraphFileError::Parse(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GraphFile::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GraphFileError::Io { .. }));
    }
}
