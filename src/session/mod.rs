pub(crate) mod visualizer;
