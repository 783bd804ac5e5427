//! Rasterlab Drawing Surfaces
//!
//! Abstraction over a pixel-addressable 2D drawing target. The engine
//! draws through the [`Surface`] trait only and never depends on a
//! concrete rendering backend; anything that can set a colored block of
//! pixels and clear itself qualifies.
//!
//! # Fat pixels
//!
//! `set_pixel` takes a block size: a `size × size` block anchored at
//! `(x, y)`, the convention that keeps single pixels legible on small
//! teaching surfaces. Out-of-bounds pixels are clipped, never wrapped.
//!
//! # Implementations
//!
//! [`MemorySurface`] backs the trait with an owned [`PixelGrid`] for
//! tests and headless embedders. Terminal and GUI surfaces live with
//! their presentation shells.

mod color;
mod grid;
mod memory;
mod surface;

pub use color::Color;
pub use grid::PixelGrid;
pub use memory::MemorySurface;
pub use surface::{Surface, SurfaceSize};
