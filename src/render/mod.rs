pub(crate) mod context;
pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod geometry;
pub(crate) mod recorder;
