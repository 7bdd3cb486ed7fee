//! Category nodes: one level of the case hierarchy.

use tracing::{debug, instrument};

use crate::domain::convert::impl_convertible;
use crate::domain::node_set::{Named, NodeSet};
use crate::domain::value::AttributeValue;

/// Named leaf attribute owned by a [`CategoryNode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    value: AttributeValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut AttributeValue {
        &mut self.value
    }

    pub fn into_value(self) -> AttributeValue {
        self.value
    }
}

impl Named for Attribute {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A case or sub-case: owns nested cases and typed attributes.
///
/// Cases and attributes are separate namespaces, so a sub-case and an
/// attribute of the same node may share a name. Nesting depth is not
/// limited by the call stack: dropping a node and the `depth`/`leaf_paths`
/// queries walk the subtree iteratively.
#[derive(Debug)]
pub struct CategoryNode {
    name: String,
    subcases: NodeSet<CategoryNode>,
    attributes: NodeSet<Attribute>,
}

impl_convertible!(CategoryNode);

impl Drop for CategoryNode {
    fn drop(&mut self) {
        // Flatten the subtree so each node is dropped with no sub-cases left
        let mut pending: Vec<CategoryNode> = self.subcases.drain().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.subcases.drain());
        }
    }
}

impl Named for CategoryNode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CategoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcases: NodeSet::new(),
            attributes: NodeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an empty sub-case unless one with that name exists; either way
    /// the sub-case now stored under `name` is returned.
    pub fn add_case(&mut self, name: impl Into<String>) -> &mut CategoryNode {
        self.subcases.add_node(CategoryNode::new(name))
    }

    /// Re-attaches a detached node, e.g. one obtained from `remove_case`.
    /// An existing sub-case with the same name wins and `node` is dropped.
    pub fn attach_case(&mut self, node: CategoryNode) -> &mut CategoryNode {
        self.subcases.add_node(node)
    }

    pub fn get_case(&self, name: &str) -> Option<&CategoryNode> {
        self.subcases.find_node(name)
    }

    pub fn get_case_mut(&mut self, name: &str) -> Option<&mut CategoryNode> {
        self.subcases.find_node_mut(name)
    }

    pub fn remove_case(&mut self, name: &str) -> Option<CategoryNode> {
        self.subcases.remove_node(name)
    }

    pub fn num_cases(&self) -> usize {
        self.subcases.len()
    }

    pub fn cases(&self) -> &NodeSet<CategoryNode> {
        &self.subcases
    }

    pub fn cases_mut(&mut self) -> &mut NodeSet<CategoryNode> {
        &mut self.subcases
    }

    /// Walks nested sub-cases by name, starting below this node.
    pub fn find_case(&self, path: &[&str]) -> Option<&CategoryNode> {
        find_in(&self.subcases, path)
    }

    pub fn find_case_mut(&mut self, path: &[&str]) -> Option<&mut CategoryNode> {
        find_in_mut(&mut self.subcases, path)
    }

    /// Attaches `value` under `name` unless the name is taken, and returns
    /// the value now stored there. Existing values are never overwritten.
    #[instrument(level = "trace", skip(self, name, value), fields(node = %self.name))]
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> &mut AttributeValue {
        self.attributes.add_node(Attribute::new(name, value)).value_mut()
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.find_node(name).map(Attribute::value)
    }

    pub fn get_attribute_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.attributes.find_node_mut(name).map(Attribute::value_mut)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove_node(name).map(Attribute::into_value)
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attributes(&self) -> &NodeSet<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut NodeSet<Attribute> {
        &mut self.attributes
    }

    /// Number of levels in this subtree, counting this node.
    pub fn depth(&self) -> usize {
        1 + depth_of(&self.subcases)
    }

    /// `/`-joined paths from this node down to every node without sub-cases.
    pub fn leaf_paths(&self) -> Vec<String> {
        if self.subcases.is_empty() {
            return vec![self.name.clone()];
        }
        leaf_paths_below(&self.name, &self.subcases)
    }
}

pub(crate) fn find_in<'a>(cases: &'a NodeSet<CategoryNode>, path: &[&str]) -> Option<&'a CategoryNode> {
    let (first, rest) = path.split_first()?;
    let mut node = cases.find_node(first)?;
    for name in rest {
        node = node.get_case(name)?;
    }
    Some(node)
}

pub(crate) fn find_in_mut<'a>(
    cases: &'a mut NodeSet<CategoryNode>,
    path: &[&str],
) -> Option<&'a mut CategoryNode> {
    let (first, rest) = path.split_first()?;
    let mut node = cases.find_node_mut(first)?;
    for name in rest {
        node = node.get_case_mut(name)?;
    }
    Some(node)
}

#[instrument(level = "trace", skip(cases))]
pub(crate) fn depth_of(cases: &NodeSet<CategoryNode>) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&CategoryNode, usize)> = cases.iter().map(|c| (c, 1)).collect();
    while let Some((node, level)) = pending.pop() {
        deepest = deepest.max(level);
        pending.extend(node.subcases.iter().map(|c| (c, level + 1)));
    }
    deepest
}

/// Leaf paths of every case in `cases`, each prefixed with `prefix/`
/// unless `prefix` is empty. Depth-first, in insertion order.
pub(crate) fn leaf_paths_below(prefix: &str, cases: &NodeSet<CategoryNode>) -> Vec<String> {
    let mut leaves = Vec::new();
    let mut pending = Vec::new();
    push_children(&mut pending, prefix, cases);
    while let Some((path, node)) = pending.pop() {
        if node.subcases.is_empty() {
            leaves.push(path);
        } else {
            push_children(&mut pending, &path, &node.subcases);
        }
    }
    debug!(count = leaves.len(), "collected leaf cases");
    leaves
}

/// Pushes `cases` so that the first inserted one is popped first.
fn push_children<'a>(
    pending: &mut Vec<(String, &'a CategoryNode)>,
    prefix: &str,
    cases: &'a NodeSet<CategoryNode>,
) {
    let start = pending.len();
    pending.extend(cases.iter().map(|c| {
        let path = if prefix.is_empty() {
            c.name.clone()
        } else {
            format!("{prefix}/{}", c.name)
        };
        (path, c)
    }));
    pending[start..].reverse();
}
