//! SOG infile schemas.
//!
//! Two views of the same set of quantities:
//!
//! - The YAML schema: a tree of named groups whose leaves are the rows of
//!   [`yaml_nodes::YAML_NODES`]. A path is a leaf iff it has a row; groups
//!   are implied by the dotted path prefixes.
//! - The infile layout ([`infile_layout`]): the key order SOG's Fortran input
//!   processor reads, plus the conditional and average/historical forcing
//!   keys that are only written when a selector parameter asks for them.

mod value;
pub mod infile_layout;
pub mod yaml_nodes;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub use infile_layout::{sog_layout, AvgHistForcing, InfileLayout};
pub use value::{fortran_real, ParamValue, ValueError};

/// Type of the `value` carried by a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Number,
    Integer,
    Boolean,
    DateTime,
    NumberList,
    IntegerList,
    String,
}

/// One recognized quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaNode {
    /// Dotted path in the YAML infile, e.g. `grid.model_depth`.
    pub path: &'static str,
    /// Key in the Fortran infile, e.g. `maxdepth`. Byte-exact.
    pub infile_key: &'static str,
    /// Name of the Fortran variable the value ends up in (documentation only).
    pub variable_name: &'static str,
    pub kind: SemanticType,
    /// Required leaves must be present in a base YAML infile.
    pub required: bool,
}

impl SchemaNode {
    /// Last segment of the dotted path.
    pub fn name(&self) -> &'static str {
        self.path.rsplit('.').next().unwrap_or(self.path)
    }
}

#[derive(Debug)]
pub enum SchemaEntry {
    Group(SchemaGroup),
    Leaf(&'static SchemaNode),
}

impl SchemaEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Group(group) => &group.name,
            Self::Leaf(node) => node.name(),
        }
    }
}

/// A named group of quantities. The root group has an empty name and path.
#[derive(Debug, Default)]
pub struct SchemaGroup {
    pub name: String,
    pub path: String,
    pub children: Vec<SchemaEntry>,
}

impl SchemaGroup {
    fn child_mut(&mut self, name: &str) -> Option<&mut SchemaEntry> {
        self.children.iter_mut().find(|c| c.name() == name)
    }

    pub fn child(&self, name: &str) -> Option<&SchemaEntry> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// True if any leaf below this group is required.
    pub fn has_required(&self) -> bool {
        self.children.iter().any(|c| match c {
            SchemaEntry::Group(g) => g.has_required(),
            SchemaEntry::Leaf(node) => node.required,
        })
    }

    fn collect_leaves(&self, out: &mut Vec<&'static SchemaNode>) {
        for child in &self.children {
            match child {
                SchemaEntry::Group(g) => g.collect_leaves(out),
                SchemaEntry::Leaf(node) => out.push(node),
            }
        }
    }

    fn collect_group_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.children {
            if let SchemaEntry::Group(g) = child {
                out.push(&g.path);
                g.collect_group_paths(out);
            }
        }
    }
}

// ============================================================================
// YAML schema
// ============================================================================

/// The nested schema, built once from a node table.
#[derive(Debug)]
pub struct YamlSchema {
    root: SchemaGroup,
    leaves: Vec<&'static SchemaNode>,
    by_path: HashMap<&'static str, &'static SchemaNode>,
    by_infile_key: HashMap<&'static str, &'static SchemaNode>,
    problems: Vec<String>,
}

impl YamlSchema {
    /// Build the group tree from a table of leaves.
    ///
    /// Groups are created in order of first appearance. Table defects
    /// (duplicate paths or keys, a path that is both a leaf and a group) do
    /// not abort the build; they are reported by [`YamlSchema::check`].
    pub fn from_nodes(nodes: &'static [SchemaNode]) -> Self {
        let mut root = SchemaGroup::default();
        let mut problems = Vec::new();
        let mut by_path = HashMap::new();
        let mut by_infile_key = HashMap::new();

        for node in nodes {
            if by_path.insert(node.path, node).is_some() {
                problems.push(format!("duplicate path '{}'", node.path));
                continue;
            }
            if by_infile_key.insert(node.infile_key, node).is_some() {
                problems.push(format!("duplicate infile key '{}'", node.infile_key));
            }
            if let Err(problem) = insert_leaf(&mut root, node) {
                problems.push(problem);
            }
        }

        let mut leaves = Vec::with_capacity(nodes.len());
        root.collect_leaves(&mut leaves);

        Self {
            root,
            leaves,
            by_path,
            by_infile_key,
            problems,
        }
    }

    pub fn root(&self) -> &SchemaGroup {
        &self.root
    }

    /// All leaves in depth-first order.
    pub fn leaves(&self) -> &[&'static SchemaNode] {
        &self.leaves
    }

    pub fn leaf(&self, path: &str) -> Option<&'static SchemaNode> {
        self.by_path.get(path).copied()
    }

    pub fn by_infile_key(&self, key: &str) -> Option<&'static SchemaNode> {
        self.by_infile_key.get(key).copied()
    }

    /// Every group and leaf path, for "did you mean" suggestions.
    pub fn known_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.root.collect_group_paths(&mut paths);
        paths.extend(self.leaves.iter().map(|n| n.path));
        paths
    }

    /// Table defects found while building the tree. Empty for a sound table.
    pub fn check(&self) -> &[String] {
        &self.problems
    }
}

fn insert_leaf(root: &mut SchemaGroup, node: &'static SchemaNode) -> Result<(), String> {
    let segments: Vec<&str> = node.path.split('.').collect();
    let (leaf_name, group_names) = segments
        .split_last()
        .ok_or_else(|| format!("empty path for infile key '{}'", node.infile_key))?;

    let mut group = root;
    for name in group_names {
        let path = if group.path.is_empty() {
            (*name).to_string()
        } else {
            format!("{}.{name}", group.path)
        };
        if group.child(name).is_none() {
            group.children.push(SchemaEntry::Group(SchemaGroup {
                name: (*name).to_string(),
                path: path.clone(),
                children: Vec::new(),
            }));
        }
        group = match group.child_mut(name) {
            Some(SchemaEntry::Group(g)) => g,
            _ => return Err(format!("'{path}' is both a leaf and a group")),
        };
    }

    if group.child(leaf_name).is_some() {
        return Err(format!("'{}' is both a leaf and a group", node.path));
    }
    group.children.push(SchemaEntry::Leaf(node));
    Ok(())
}

/// The SOG YAML infile schema.
pub fn yaml_schema() -> &'static YamlSchema {
    static SCHEMA: OnceLock<YamlSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| YamlSchema::from_nodes(yaml_nodes::YAML_NODES))
}

/// Infile keys of every leaf, for coverage checks against a layout.
pub fn infile_keys(schema: &YamlSchema) -> HashSet<&'static str> {
    schema.leaves().iter().map(|n| n.infile_key).collect()
}
