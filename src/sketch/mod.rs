//! Geometry stages: geographic projection and wobbly path synthesis.

pub(crate) mod path;
pub(crate) mod projector;
pub(crate) mod synth;
