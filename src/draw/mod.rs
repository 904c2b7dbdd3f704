//! Drawing primitives for the annotation overlay (Cairo-based).
//!
//! This module defines the rendering types used for live stroke preview:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawSurface`]: the transient-surface capability the stroke tracker draws through
//! - [`RasterSurface`]: the cairo image-surface implementation
//! - Stroke rendering functions shared by the raster backend

pub mod color;
pub mod raster;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use raster::RasterSurface;
pub use surface::{DrawSurface, ImageData, StrokeStyle, SurfaceError};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
