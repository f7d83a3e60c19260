//! In-memory snapshot of a filesystem subtree.
//!
//! A [`Node`] tree is built once from disk by [`build`], narrowed by the
//! prune passes in [`filter`] and drawn by [`render`]. Every pass returns a
//! new tree; the snapshot itself is never modified.

mod builder;
mod filter;
mod node;
mod render;
mod traversal;

pub use builder::{BuildError, build};
pub use filter::FilterOptions;
pub use node::Node;
pub use render::{RenderOptions, render_with};
pub use traversal::Summary;
