use std::rc::Rc;

/// A state reached during a search, the node it was reached from and the label of the edge used.
///
/// Nodes are shared through `Rc`: the frontier holds them until expansion, afterwards they live
/// only as long as some descendant points at them.
#[derive(Debug)]
pub struct Node<S> {
    state: S,
    parent: Option<Rc<Node<S>>>,
    action: String,
    depth: usize,
}

impl<S> Node<S> {
    pub fn root(state: S, action: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { state, parent: None, action: action.into(), depth: 0 })
    }

    pub fn child(parent: &Rc<Self>, state: S, action: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { state, parent: Some(Rc::clone(parent)), action: action.into(), depth: parent.depth + 1 })
    }

    pub fn state(&self) -> &S { &self.state }
    pub fn action(&self) -> &str { &self.action }
    pub fn parent(&self) -> Option<&Rc<Self>> { self.parent.as_ref() }
    pub fn is_root(&self) -> bool { self.parent.is_none() }

    /// Edge count from the root.
    pub fn depth(&self) -> usize { self.depth }

    /// This node followed by each parent up to and including the root.
    pub fn ancestors(&self) -> Ancestors<'_, S> { Ancestors { next: Some(self) } }
}

// Unlink the parent chain iteratively so that dropping a deep depth-first chain cannot overflow the stack.
impl<S> Drop for Node<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Ancestors<'a, S> {
    next: Option<&'a Node<S>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Node<S>;
    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next?;
        self.next = cur.parent.as_deref();
        Some(cur)
    }
}
