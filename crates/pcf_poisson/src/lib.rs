#![forbid(unsafe_code)]
//! pcf_poisson: Poisson-disk sample offsets for shadow-map filtering kernels.
//!
//! Points are generated with Bridson's grid-accelerated dart throwing inside the disk of
//! radius 0.5 centered at `(0.5, 0.5)`, with a minimum spacing equal to the diagonal of one
//! background grid cell.
//!
//! Modules:
//! - kernel: configuration, `generate` entry points and the generated [`kernel::PoissonKernel`]
//! - sampling: spatial grid, active list and the dart-throwing loop
//! - error: configuration errors
pub mod error;
pub mod kernel;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use pcf_poisson::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::kernel::{
        generate, generate_with_rng, PoissonKernel, SamplerConfig, DEFAULT_GRID_SIZE,
        DEFAULT_MAX_TRIES, MAX_GRID_SIZE,
    };
    pub use crate::sampling::poisson_disk::{DOMAIN_CENTER, DOMAIN_RADIUS};
    pub use crate::sampling::{
        sample_annulus, CandidatePool, PoissonDiskSampler, SamplerStats, SpatialGrid,
    };
}
