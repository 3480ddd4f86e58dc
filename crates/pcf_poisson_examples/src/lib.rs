#![forbid(unsafe_code)]

mod formatting;
mod rendering;

pub use formatting::{format_glsl_array, format_offset_lines};
pub use rendering::{init_tracing, render_kernel_image, render_kernel_to_png, PreviewConfig};
