//! Read-only rendering of a model as a `termtree` tree.
//!
//! ```text
//! model
//! └── Load1
//!     ├── pressure = 101.3 (scalar)
//!     └── Gravity
//! ```

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Attribute, CategoryNode, ModelTraits, Named};

/// Builds a nested `termtree::Tree` mirroring the case hierarchy.
///
/// Rendering and dropping the resulting tree recurse once per level, so it
/// is meant for human-readable depths; use `depth`/`leaf_paths` for
/// arbitrarily deep models.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Attribute {
    fn to_tree_string(&self) -> Tree<String> {
        let value = self.value();
        Tree::new(format!("{} = {} ({})", self.name(), value, value.kind()))
    }
}

impl TreeNodeConvert for CategoryNode {
    fn to_tree_string(&self) -> Tree<String> {
        // Attributes first, then nested cases
        let attributes = self.attributes().iter().map(|a| a.to_tree_string());
        let cases = self.cases().iter().map(|c| c.to_tree_string());

        Tree::new(self.name().to_string()).with_leaves(attributes.chain(cases))
    }
}

impl TreeNodeConvert for ModelTraits {
    #[instrument(level = "debug", skip(self), fields(model = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.cases().iter().map(|c| c.to_tree_string()).collect();
        Tree::new(self.name().to_string()).with_leaves(leaves)
    }
}

impl fmt::Display for ModelTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

impl fmt::Display for CategoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
