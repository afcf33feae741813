//! The capability seam between the session and drawing layers.

use tessella_core::Size;

/// A drawing layer that can be resized and cleared.
///
/// Each layer (pieces, grid lines, clock dial) implements this
/// independently; there is no shared base type. The session never draws,
/// it only tells layers when their surface geometry changed.
pub trait Renderable {
    /// Resizes the layer's surface to the given canvas dimensions.
    fn resize(&mut self, size: Size);

    /// Clears the layer's surface.
    fn clear(&mut self);
}

/// Resizes a layer to the canvas and clears it, ready for a redraw.
pub fn refit(layer: &mut (impl Renderable + ?Sized), canvas: Size) {
    layer.resize(canvas);
    layer.clear();
}
