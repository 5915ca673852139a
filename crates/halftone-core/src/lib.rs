pub mod consts;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod io;
pub mod luma;
pub mod pipeline;
pub mod sampler;
pub mod sink;
