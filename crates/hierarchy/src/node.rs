//! Node descriptors and the shared-parent state tree

use statetree_core::constants::{ABSTRACT_KEY, PARAMS_KEY};
use statetree_core::types::{Object, Value};
use statetree_core::{Error, Result};
use std::sync::Arc;

/// A node of a state tree as the resolver sees it.
///
/// Two path entries are the same node only if they are the same object in
/// memory. Implementations must hand out borrowed references into one shared
/// tree so that paths of related nodes agree on their common prefix.
pub trait NodeDescriptor {
    fn name(&self) -> &str;

    /// Every node from the root down to and including `self`
    fn path(&self) -> Vec<&Self>;

    /// Parameters declared on this node itself, if any
    fn params(&self) -> Option<&Object>;

    /// Abstract nodes group children but cannot be transitioned to
    fn is_abstract(&self) -> bool {
        false
    }
}

/// A state in a tree linked through reference-counted parent pointers
#[derive(Debug)]
pub struct StateNode {
    name: String,
    parent: Option<Arc<StateNode>>,
    params: Object,
    is_abstract: bool,
}

impl StateNode {
    /// Start building a state called `name`
    pub fn builder(name: impl Into<String>) -> StateNodeBuilder {
        StateNodeBuilder {
            name: name.into(),
            parent: None,
            params: Object::new(),
            is_abstract: false,
        }
    }

    /// Build a state from a declaration object such as
    /// `{"params": {"id": null}, "abstract": false}`.
    ///
    /// Only the parameter names matter; their values are carried along
    /// untouched. Unrecognised keys are ignored.
    pub fn from_declaration(
        name: impl Into<String>,
        declaration: &Object,
        parent: Option<&Arc<StateNode>>,
    ) -> Result<Arc<StateNode>> {
        let mut builder = Self::builder(name);
        if let Some(parent) = parent {
            builder = builder.with_parent(parent);
        }

        match declaration.get(PARAMS_KEY) {
            None | Some(Value::Undefined | Value::Null) => {}
            Some(Value::Object(params)) => {
                for (param, value) in params {
                    builder = builder.with_param(param.clone(), value.clone());
                }
            }
            Some(other) => {
                return Err(Error::type_mismatch(
                    format!("object for '{PARAMS_KEY}'"),
                    other.kind().to_string(),
                ))
            }
        }

        match declaration.get(ABSTRACT_KEY) {
            None | Some(Value::Undefined | Value::Null) => {}
            Some(Value::Bool(flag)) => builder = builder.with_abstract(*flag),
            Some(other) => {
                return Err(Error::type_mismatch(
                    format!("boolean for '{ABSTRACT_KEY}'"),
                    other.kind().to_string(),
                ))
            }
        }

        Ok(builder.build())
    }

    pub fn parent(&self) -> Option<&Arc<StateNode>> {
        self.parent.as_ref()
    }

    /// Number of ancestors above this node
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self;
        while let Some(parent) = cursor.parent.as_deref() {
            depth += 1;
            cursor = parent;
        }
        depth
    }

    /// Whether `other` lies on this node's path, `self` included
    pub fn includes(&self, other: &StateNode) -> bool {
        self.path()
            .into_iter()
            .any(|node| std::ptr::eq(node, other))
    }
}

impl NodeDescriptor for StateNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> Vec<&Self> {
        let mut path = vec![self];
        let mut cursor = self;
        while let Some(parent) = cursor.parent.as_deref() {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }

    fn params(&self) -> Option<&Object> {
        (!self.params.is_empty()).then_some(&self.params)
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }
}

/// Builder for [`StateNode`]
#[derive(Debug)]
pub struct StateNodeBuilder {
    name: String,
    parent: Option<Arc<StateNode>>,
    params: Object,
    is_abstract: bool,
}

impl StateNodeBuilder {
    /// Attach the state under `parent`
    pub fn with_parent(mut self, parent: &Arc<StateNode>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Declare a parameter with an arbitrary specification value
    pub fn with_param(mut self, name: impl Into<String>, spec: impl Into<Value>) -> Self {
        self.params.insert(name.into(), spec.into());
        self
    }

    /// Declare several parameters with no specification
    pub fn with_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.params.insert(name.into(), Value::Null);
        }
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn build(self) -> Arc<StateNode> {
        Arc::new(StateNode {
            name: self.name,
            parent: self.parent,
            params: self.params,
            is_abstract: self.is_abstract,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use statetree_core::types::object_from_json;

    fn names(path: &[&StateNode]) -> Vec<String> {
        path.iter().map(|node| node.name().to_string()).collect()
    }

    #[test]
    fn test_path_runs_root_to_self() {
        let root = StateNode::builder("root").build();
        let home = StateNode::builder("home").with_parent(&root).build();
        let detail = StateNode::builder("home.detail")
            .with_parent(&home)
            .build();

        assert_eq!(names(&detail.path()), vec!["root", "home", "home.detail"]);
        assert_eq!(detail.depth(), 2);
        assert_eq!(root.path().len(), 1);
    }

    #[test]
    fn test_path_entries_are_the_shared_parents() {
        let root = StateNode::builder("root").build();
        let a = StateNode::builder("a").with_parent(&root).build();
        let b = StateNode::builder("b").with_parent(&root).build();

        assert!(std::ptr::eq(a.path()[0], b.path()[0]));
        assert!(std::ptr::eq(a.path()[0], &*root));
        assert!(a.includes(&root));
        assert!(!a.includes(&b));
    }

    #[test]
    fn test_empty_params_read_as_absent() {
        let plain = StateNode::builder("plain").build();
        assert!(plain.params().is_none());

        let with = StateNode::builder("with")
            .with_params(["id", "page"])
            .build();
        let declared: Vec<&String> = with.params().unwrap().keys().collect();
        assert_eq!(declared, vec!["id", "page"]);
    }

    #[test]
    fn test_from_declaration() {
        let root = StateNode::builder("root").build();
        let declaration = object_from_json(json!({
            "params": {"id": null, "tab": {"value": "info"}},
            "abstract": true,
            "url": "/ignored"
        }))
        .unwrap();

        let node = StateNode::from_declaration("users", &declaration, Some(&root)).unwrap();
        assert!(node.is_abstract());
        assert_eq!(node.params().unwrap().len(), 2);
        let parent = node.parent().unwrap();
        assert!(Arc::ptr_eq(parent, &root));
    }

    #[test]
    fn test_from_declaration_rejects_wrong_shapes() {
        let bad_params = object_from_json(json!({"params": ["id"]})).unwrap();
        let err = StateNode::from_declaration("x", &bad_params, None).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let bad_flag = object_from_json(json!({"abstract": "yes"})).unwrap();
        let err = StateNode::from_declaration("x", &bad_flag, None).unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }
}
