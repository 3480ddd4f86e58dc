use pcf_poisson::prelude::*;
use pcf_poisson_examples::{init_tracing, render_kernel_to_png, PreviewConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SamplerConfig::default().with_seed(42);
    let kernel = generate(&config)?;

    let preview = PreviewConfig::new(500)
        .with_background([245, 245, 245])
        .with_disk_color([200, 200, 200])
        .with_point_style([0, 82, 172], 3);
    render_kernel_to_png(&kernel, &preview, "kernel-preview.png")?;

    // Coarser and finer grids side by side for comparison.
    for grid_size in [8, 32] {
        let kernel = generate(&SamplerConfig::new(grid_size).with_seed(42))?;
        render_kernel_to_png(
            &kernel,
            &preview,
            format!("kernel-preview-grid-{grid_size}.png"),
        )?;
    }

    Ok(())
}
