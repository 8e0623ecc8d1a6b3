#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_density_to_png, render_dots_to_png, union_bounds, RenderConfig,
};
