//! Core of compgraph: turns an ordered configuration tree into an undirected
//! graph where components sharing a resource share a node.
//!
//! The entry point is [`GraphBuilder::render`]. Everything a render mutates
//! (the [`NodeRegistry`] and the [`ContextStack`]) is created per call, so a
//! builder can be reused and independent renders never interfere.

pub mod builder;
pub mod config;
pub mod context;
pub mod filter;
pub mod graph;
pub mod registry;
pub mod tree;
pub mod walker;

pub use builder::{GraphBuilder, render};
pub use compgraph_error::{Error, ErrorKind, Result};
pub use config::{DepthRule, GraphStyle, RenderConfig, SuffixSource};
pub use context::ContextStack;
pub use filter::ExclusionFilter;
pub use graph::{Edge, Graph, Node, NodeId};
pub use registry::NodeRegistry;
pub use tree::{ConfigTree, Scalar};
pub use walker::TreeWalker;
