//! The fused pipeline: queue operations once (`descriptor`), check their
//! presence per node in O(1) (`mask`), run them all in one traversal
//! (`traversal`), and drive it all through a small state machine
//! (`builder`).

mod builder;
mod descriptor;
mod mask;
mod traversal;

pub use builder::JsonToolsBuilder;
