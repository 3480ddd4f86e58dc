use pcf_poisson::prelude::*;
use pcf_poisson_examples::{format_glsl_array, format_offset_lines, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Reference PCF kernel: 15x15 grid, 30 tries, fixed seed for a stable shader constant.
    let config = SamplerConfig::default().with_seed(42);
    let kernel = generate(&config)?;

    print!("{}", format_offset_lines(&kernel));
    println!();
    print!("{}", format_glsl_array(&kernel, "poisson_disk"));

    Ok(())
}
