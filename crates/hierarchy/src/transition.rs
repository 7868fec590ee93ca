//! Transition planning between two states of a tree

use crate::node::NodeDescriptor;
use crate::resolver::{ancestors, declared_param_names, inherit_params};
use statetree_config::TransitionOptions;
use statetree_core::functional::{equal_for_keys, filter_by_keys};
use statetree_core::types::Object;
use statetree_core::{Error, Result};
use statetree_utils::tracing::transition_span;
use tracing::debug;

/// What a move from one state to another does to the active path
#[derive(Debug)]
pub struct TransitionPlan<'a, D> {
    /// Resolved parameters of the target, limited to names it declares
    pub params: Object,
    /// Common ancestors that stay active, root first
    pub retained: Vec<&'a D>,
    /// States left behind, leaf first
    pub exiting: Vec<&'a D>,
    /// States activated, root first
    pub entering: Vec<&'a D>,
    /// Source and target are the same state and nothing changes
    pub unchanged: bool,
}

/// Work out the parameters and state changes for moving from `from` to `to`.
///
/// A common ancestor is kept active only while every parameter it declares
/// itself compares loosely equal between the resolved and the current
/// parameters; the first ancestor that differs, and everything below it, is
/// exited and re-entered. With `reload` set nothing is kept.
pub fn plan_transition<'a, D: NodeDescriptor>(
    current_params: &Object,
    new_params: &Object,
    from: &'a D,
    to: &'a D,
    options: TransitionOptions,
) -> Result<TransitionPlan<'a, D>> {
    let span = transition_span(from.name(), to.name());
    let _guard = span.enter();

    if to.is_abstract() {
        return Err(Error::abstract_state(to.name()));
    }

    let params = if options.inherit {
        inherit_params(current_params, new_params, from, to)
    } else {
        new_params.clone()
    };
    let params = filter_by_keys(declared_param_names(to).as_slice(), &params);

    let mut retained = Vec::new();
    if !options.reload {
        for node in ancestors(from, to) {
            let own: Vec<&str> = node
                .params()
                .map(|declared| declared.keys().map(String::as_str).collect())
                .unwrap_or_default();
            if !equal_for_keys(&params, current_params, Some(own.as_slice())) {
                break;
            }
            retained.push(node);
        }
    }

    let keep = retained.len();
    let mut exiting: Vec<&'a D> = from.path().into_iter().skip(keep).collect();
    exiting.reverse();
    let entering: Vec<&'a D> = to.path().into_iter().skip(keep).collect();
    let unchanged = std::ptr::eq(from, to) && exiting.is_empty() && entering.is_empty();

    debug!(
        retained = keep,
        exiting = exiting.len(),
        entering = entering.len(),
        unchanged,
        "planned transition"
    );

    Ok(TransitionPlan {
        params,
        retained,
        exiting,
        entering,
        unchanged,
    })
}

impl<D: NodeDescriptor> TransitionPlan<'_, D> {
    /// Names of the exited states, leaf first
    pub fn exiting_names(&self) -> Vec<&str> {
        self.exiting.iter().map(|node| node.name()).collect()
    }

    /// Names of the entered states, root first
    pub fn entering_names(&self) -> Vec<&str> {
        self.entering.iter().map(|node| node.name()).collect()
    }
}
