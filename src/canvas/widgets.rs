pub mod cpu_graph;
