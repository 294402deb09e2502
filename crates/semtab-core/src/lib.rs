pub mod alignment;
pub mod config;
pub mod visualize;
pub mod worksheet;

pub use alignment::{AlignmentGraph, AlignmentNode, LabeledLink};
pub use config::Config;
pub use visualize::AlignmentVisualizationUpdate;
pub use worksheet::HeaderTable;
