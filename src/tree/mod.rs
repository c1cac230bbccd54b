//! Parse tree materialization.
//!
//! The parser only reports events; [`tree::TreeBuilder`] is the sink that
//! turns them into a [`tree::ParseTree`] for the driver to print.

pub mod tree;
