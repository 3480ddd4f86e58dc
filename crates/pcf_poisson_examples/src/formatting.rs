//! Text output of generated kernels as GLSL literals.
use std::fmt::Write;

use pcf_poisson::kernel::PoissonKernel;

/// One `vec2(x,y),` line per centered offset, followed by a point-count summary.
pub fn format_offset_lines(kernel: &PoissonKernel) -> String {
    let mut out = String::new();
    for p in kernel.centered() {
        let _ = writeln!(out, "vec2({:.7},{:.7}),", p.x, p.y);
    }
    let _ = writeln!(out, "A total of {} points were generated.", kernel.len());
    out
}

/// A complete GLSL constant array declaration holding the centered offsets.
pub fn format_glsl_array(kernel: &PoissonKernel, name: &str) -> String {
    let offsets = kernel.centered();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "const vec2 {name}[{len}] = vec2[{len}](",
        len = offsets.len()
    );
    for (i, p) in offsets.iter().enumerate() {
        let sep = if i + 1 == offsets.len() { "" } else { "," };
        let _ = writeln!(out, "    vec2({:.7}, {:.7}){sep}", p.x, p.y);
    }
    out.push_str(");\n");
    out
}
