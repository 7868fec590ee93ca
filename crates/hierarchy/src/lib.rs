//! Hierarchical state trees for statetree
//!
//! A state tree is a set of named nodes, each with an optional parent and a
//! list of declared parameter names. This crate answers two questions about
//! such a tree: which states two nodes have in common, and which parameter
//! values carry over when moving from one node to another.
//!
//! ## Key Components
//!
//! - **`node`**: the `NodeDescriptor` trait and the `StateNode` tree built
//!   on shared parent pointers.
//! - **`resolver`**: `ancestors` and `inherit_params`.
//! - **`transition`**: `plan_transition`, which combines both into the list
//!   of states to exit and enter.

pub mod node;
pub mod resolver;
pub mod transition;

pub use node::{NodeDescriptor, StateNode, StateNodeBuilder};
pub use resolver::{ancestors, declared_param_names, inherit_params};
pub use transition::{plan_transition, TransitionPlan};
