pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod overlay;
pub(crate) mod scene;
