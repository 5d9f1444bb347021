//! Frame assembly and the CPU rasterizer.

pub(crate) mod blur;
pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod renderer;
pub(crate) mod stroke;
