//! Some common components to reuse when drawing widgets.

pub mod time_graph;
