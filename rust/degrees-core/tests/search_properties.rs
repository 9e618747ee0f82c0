use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::convert::Infallible;

use degrees_core::{AdjacencyGraph, Edge, NeighborProvider, Path, SearchEngine, SearchError, Step};

// S -> A, B; A -> C; B -> C, D; C -> T, S; D -> E; E -> T; T -> A; U isolated.
fn fixture() -> AdjacencyGraph<&'static str> {
    let mut g = AdjacencyGraph::new();
    for s in ["S", "A", "B", "C", "D", "E", "T", "U"] {
        g.add_node(s, s.to_lowercase());
    }
    g.link("S", "A").link("S", "B");
    g.link("A", "C");
    g.link("B", "C").link("B", "D");
    g.link("C", "T").link("C", "S");
    g.link("D", "E");
    g.link("E", "T");
    g.link("T", "A");
    g
}

fn reference_distances(g: &AdjacencyGraph<&'static str>, source: &'static str) -> HashMap<&'static str, usize> {
    let mut dist = HashMap::from([(source, 0)]);
    let mut queue = VecDeque::from([source]);
    while let Some(s) = queue.pop_front() {
        let d = dist[s];
        for e in g.edges_from(&s) {
            if !dist.contains_key(e.state) {
                dist.insert(e.state, d + 1);
                queue.push_back(e.state);
            }
        }
    }
    dist
}

fn is_walk(g: &AdjacencyGraph<&'static str>, source: &'static str, path: &Path<&'static str>) -> bool {
    let mut at = source;
    for step in path {
        if !g.edges_from(&at).iter().any(|e| e.state == step.state) {
            return false;
        }
        at = step.state;
    }
    true
}

#[test]
fn paths_are_shortest_for_every_pair() {
    let g = fixture();
    let engine = SearchEngine::new(&g);
    let nodes: Vec<&'static str> = g.nodes().map(|(s, _)| *s).collect();
    for &source in &nodes {
        let dist = reference_distances(&g, source);
        for &target in &nodes {
            let found = engine.shortest_path(&source, &target).unwrap();
            match dist.get(target) {
                Some(&d) => {
                    let path = found.unwrap_or_else(|| panic!("{source} -> {target} should be connected"));
                    assert_eq!(path.degrees(), d, "{source} -> {target}");
                    assert!(is_walk(&g, source, &path));
                    if d > 0 {
                        assert_eq!(path.last_state(), Some(&target));
                    }
                }
                None => assert_eq!(found, None, "{source} -> {target} should not be connected"),
            }
        }
    }
}

#[test]
fn each_state_is_expanded_at_most_once() {
    let g = fixture();
    let asked = RefCell::new(Vec::new());
    let provider = |s: &&'static str| -> Result<Vec<Edge<&'static str>>, Infallible> {
        asked.borrow_mut().push(*s);
        g.neighbors(s)
    };
    let report = SearchEngine::new(&provider).search(&"S", &"U").unwrap();
    assert!(report.path.is_none());

    let asked = asked.into_inner();
    let unique: HashSet<_> = asked.iter().collect();
    assert_eq!(unique.len(), asked.len(), "revisited a state: {asked:?}");
    // Everything reachable from S is expanded exactly once before giving up.
    assert_eq!(asked.len(), reference_distances(&g, "S").len());
    assert_eq!(report.expanded as usize, asked.len());
}

#[test]
fn repeated_searches_agree() {
    let g = fixture();
    let engine = SearchEngine::new(&g);
    let first = engine.search(&"S", &"T").unwrap();
    let second = engine.search(&"S", &"T").unwrap();
    assert_eq!(first, second);
}

#[test]
fn ties_go_to_the_first_listed_neighbor() {
    let mut g = AdjacencyGraph::new();
    g.add_edge("S", "A", Some("to A".into()));
    g.add_edge("S", "B", Some("to B".into()));
    g.add_edge("A", "T", Some("A to T".into()));
    g.add_edge("B", "T", Some("B to T".into()));
    let path = SearchEngine::new(&g).shortest_path(&"S", &"T").unwrap().unwrap();
    assert_eq!(path.into_steps(), vec![
        Step { label: "to A".into(), state: "A" },
        Step { label: "A to T".into(), state: "T" },
    ]);
}

#[test]
fn unreachable_target_in_a_cycle_is_none() {
    let mut g = AdjacencyGraph::new();
    g.link("S", "A").link("A", "S");
    assert_eq!(SearchEngine::new(&g).shortest_path(&"S", &"T").unwrap(), None);
}

#[test]
fn same_state_is_an_empty_path_not_none() {
    let g: AdjacencyGraph<&str> = AdjacencyGraph::new();
    let path = SearchEngine::new(&g).shortest_path(&"X", &"X").unwrap();
    assert_eq!(path, Some(Path::empty()));
}

#[test]
fn self_loops_are_harmless() {
    let mut g = AdjacencyGraph::new();
    g.link("S", "S").link("S", "A").link("A", "A").link("A", "T");
    let path = SearchEngine::new(&g).shortest_path(&"S", &"T").unwrap().unwrap();
    let states: Vec<&str> = path.states().copied().collect();
    assert_eq!(states, vec!["A", "T"]);
}

#[derive(Debug, PartialEq)]
struct Offline(&'static str);

#[test]
fn provider_failure_aborts_the_search() {
    let provider = |s: &&'static str| -> Result<Vec<Edge<&'static str>>, Offline> {
        match *s {
            "S" => Ok(vec![Edge::new("A", "a"), Edge::new("B", "b")]),
            other => Err(Offline(other)),
        }
    };
    let err = SearchEngine::new(&provider).shortest_path(&"S", &"T").unwrap_err();
    assert!(err.is_lookup());
    assert_eq!(err.into_lookup(), Some(Offline("A")));
}

#[test]
fn root_label_comes_from_the_provider_but_is_not_part_of_the_path() {
    let g = fixture();
    let path = SearchEngine::new(&g).shortest_path(&"S", &"A").unwrap().unwrap();
    assert_eq!(path.steps(), &[Step { label: "a".to_string(), state: "A" }]);
    assert!(matches!(
        SearchEngine::with_options(&g, degrees_core::SearchOptions::default().with_max_expansions(0)).search(&"S", &"A"),
        Err(SearchError::ExpansionLimit { expanded: 0 })
    ));
}
