use tracing::{debug, instrument};

use crate::domain::category::{self, CategoryNode};
use crate::domain::convert::impl_convertible;
use crate::domain::node_set::NodeSet;

/// Root object that stores the boundary conditions and other attributes
/// attached to a model, grouped into cases.
///
/// Dropping it drops every case and attribute underneath.
#[derive(Debug)]
pub struct ModelTraits {
    name: String,
    cases: NodeSet<CategoryNode>,
}

impl_convertible!(ModelTraits);

impl ModelTraits {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: NodeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a case if it doesn't exist and returns it. If the case does
    /// exist, the existing case is returned unchanged.
    #[instrument(level = "debug", skip(self, name), fields(model = %self.name))]
    pub fn add_case(&mut self, name: impl Into<String>) -> &mut CategoryNode {
        self.cases.add_node(CategoryNode::new(name))
    }

    /// Re-attaches a case previously detached with [`remove_case`](Self::remove_case).
    pub fn attach_case(&mut self, case: CategoryNode) -> &mut CategoryNode {
        self.cases.add_node(case)
    }

    pub fn get_case(&self, name: &str) -> Option<&CategoryNode> {
        self.cases.find_node(name)
    }

    pub fn get_case_mut(&mut self, name: &str) -> Option<&mut CategoryNode> {
        self.cases.find_node_mut(name)
    }

    /// Removes a case by its name, handing ownership to the caller.
    #[instrument(level = "debug", skip(self), fields(model = %self.name))]
    pub fn remove_case(&mut self, name: &str) -> Option<CategoryNode> {
        let removed = self.cases.remove_node(name);
        if removed.is_none() {
            debug!(case = name, "no such case");
        }
        removed
    }

    pub fn num_cases(&self) -> usize {
        self.cases.len()
    }

    pub fn cases(&self) -> &NodeSet<CategoryNode> {
        &self.cases
    }

    pub fn cases_mut(&mut self) -> &mut NodeSet<CategoryNode> {
        &mut self.cases
    }

    /// Looks up a nested case, e.g. `["Load1", "Gravity"]`.
    pub fn find_case(&self, path: &[&str]) -> Option<&CategoryNode> {
        category::find_in(&self.cases, path)
    }

    pub fn find_case_mut(&mut self, path: &[&str]) -> Option<&mut CategoryNode> {
        category::find_in_mut(&mut self.cases, path)
    }

    /// Deepest case nesting; 0 for a model without cases.
    pub fn depth(&self) -> usize {
        category::depth_of(&self.cases)
    }

    pub fn leaf_paths(&self) -> Vec<String> {
        category::leaf_paths_below("", &self.cases)
    }
}
