pub(crate) mod container;
pub(crate) mod node;
