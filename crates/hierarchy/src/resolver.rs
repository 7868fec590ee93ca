//! Common ancestors and parameter inheritance

use crate::node::NodeDescriptor;
use statetree_core::functional::{extend, object_keys};
use statetree_core::types::{Object, Value};
use tracing::{debug, trace};

/// The path prefix `first` and `second` share, root first.
///
/// The walk stops at the first position where the two paths hold different
/// nodes, or where the shorter path ends. Nodes are compared by identity.
pub fn ancestors<'a, D: NodeDescriptor>(first: &'a D, second: &'a D) -> Vec<&'a D> {
    let common: Vec<&'a D> = first
        .path()
        .into_iter()
        .zip(second.path())
        .take_while(|(a, b)| std::ptr::eq(*a, *b))
        .map(|(node, _)| node)
        .collect();

    trace!(
        first = first.name(),
        second = second.name(),
        common = common.len(),
        "resolved common ancestors"
    );
    common
}

/// Parameters for a move from `current` to `to`.
///
/// Every parameter declared on a common ancestor keeps its value from
/// `current_params` (`Undefined` when it has none); a name declared twice
/// along the path is taken once, at its first declaration. `new_params` is
/// laid over the result and always wins, even with an explicit `Undefined`.
/// Neither input bag is modified.
pub fn inherit_params<D: NodeDescriptor>(
    current_params: &Object,
    new_params: &Object,
    current: &D,
    to: &D,
) -> Object {
    let parents = ancestors(current, to);
    let mut inherited = Object::new();

    for parent in &parents {
        let Some(declared) = parent.params().filter(|params| !params.is_empty()) else {
            continue;
        };
        for name in object_keys(declared) {
            if inherited.contains_key(&name) {
                continue;
            }
            let value = current_params
                .get(&name)
                .cloned()
                .unwrap_or(Value::Undefined);
            inherited.insert(name, value);
        }
    }

    debug!(
        from = current.name(),
        to = to.name(),
        common = parents.len(),
        inherited = inherited.len(),
        "inherited parameters"
    );
    extend(&[&inherited, new_params])
}

/// Every parameter name declared along `node`'s path, root first, each once
pub fn declared_param_names<D: NodeDescriptor>(node: &D) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for step in node.path() {
        let Some(params) = step.params() else {
            continue;
        };
        for name in params.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
    }
    names
}
