pub(crate) mod color;
pub(crate) mod route_style;
