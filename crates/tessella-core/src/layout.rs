//! Screen-space layout: tile geometry and click mapping.
//!
//! A [`TileLayout`] relates three coordinate spaces:
//!
//! - *image space* - the source splash art at its native resolution,
//! - *canvas space* - the scaled-down drawing surface,
//! - *grid space* - `(row, col)` cells.
//!
//! The layout only produces numbers; actually drawing tiles is the
//! presentation layer's job.

use crate::{Cell, GridSize};

/// Error returned when layout geometry is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// Image and canvas dimensions must be positive and finite.
    #[display("layout dimensions must be positive and finite")]
    InvalidDimensions,
}

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

impl Point {
    /// Creates a point from `x` and `y` offsets.
    #[must_use]
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle extent in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size from `width` and `height`.
    #[must_use]
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Radii for the two phase-clock circles of a round.
///
/// The preview clock covers a quarter of the shorter canvas side so it is
/// always fully visible; the smaller level clock sits over a single tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockRadii {
    /// Radius of the preview-phase clock.
    pub preview: f64,
    /// Radius of the level-phase clock.
    pub level: f64,
}

/// Returns the clock radii for a canvas whose shorter side has the given
/// length.
#[must_use]
pub fn clock_radii(shorter_side: f64) -> ClockRadii {
    let preview = shorter_side / 4.0;
    ClockRadii {
        preview,
        level: preview / 3.0,
    }
}

/// Default number of width breakpoints considered by [`fit_width`].
pub const FIT_BREAKPOINTS: usize = 10;

/// Default breakpoint step in pixels used by [`fit_width`].
pub const FIT_STEP: f64 = 100.0;

/// Returns the largest breakpoint width that still fits the screen.
///
/// Candidate widths are `(i + 5) * step` for `i` in `0..breakpoints`, so the
/// defaults produce 500, 600, ... 1400. Screens narrower than every
/// candidate get the smallest one.
///
/// # Examples
///
/// ```
/// use tessella_core::fit_width;
///
/// assert_eq!(fit_width(1920.0), 1400.0);
/// assert_eq!(fit_width(1024.0), 1000.0);
/// assert_eq!(fit_width(320.0), 500.0);
/// ```
#[must_use]
pub fn fit_width(screen_width: f64) -> f64 {
    fit_width_with(screen_width, FIT_BREAKPOINTS, FIT_STEP)
}

/// [`fit_width`] with explicit breakpoint count and step.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn fit_width_with(screen_width: f64, breakpoints: usize, step: f64) -> f64 {
    (0..breakpoints)
        .map(|i| (i + 5) as f64 * step)
        .reduce(|prev, curr| if screen_width < curr { prev } else { curr })
        .unwrap_or(screen_width)
}

/// Mapping between the source image, the canvas, and the puzzle grid.
///
/// The canvas keeps the image's aspect ratio: `ratio` is
/// `canvas_width / image_width` and the canvas height is the image height
/// scaled by it. Tile destination offsets are in canvas space; tile source
/// offsets are in image space (canvas offsets divided back by the ratio).
///
/// # Examples
///
/// ```
/// use tessella_core::{Cell, GridSize, Point, Size, TileLayout};
///
/// let grid = GridSize::try_new(3, 3).unwrap();
/// let layout = TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid)?;
///
/// assert_eq!(layout.ratio(), 0.5);
/// assert_eq!(layout.canvas(), Size::new(600.0, 300.0));
/// assert_eq!(layout.tile(), Size::new(200.0, 100.0));
///
/// // Destination offsets are canvas-space, source offsets image-space.
/// assert_eq!(layout.dest_origin(Cell::new(1, 2)), Point::new(400.0, 100.0));
/// assert_eq!(layout.source_origin(Cell::new(1, 2)), Point::new(800.0, 200.0));
/// # Ok::<(), tessella_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    canvas: Size,
    grid: GridSize,
    ratio: f64,
}

impl TileLayout {
    /// Creates a layout for an image scaled down to `canvas_width`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] if the image dimensions or
    /// the canvas width are not positive finite numbers.
    pub fn new(image: Size, canvas_width: f64, grid: GridSize) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(image.width) || !valid(image.height) || !valid(canvas_width) {
            return Err(LayoutError::InvalidDimensions);
        }
        let ratio = canvas_width / image.width;
        Ok(Self {
            canvas: Size::new(canvas_width, image.height * ratio),
            grid,
            ratio,
        })
    }

    /// Creates a layout sized with [`fit_width`] for the given screen width.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] as [`Self::new`] does.
    pub fn for_screen(image: Size, screen_width: f64, grid: GridSize) -> Result<Self, LayoutError> {
        Self::new(image, fit_width(screen_width), grid)
    }

    /// Returns the canvas dimensions.
    #[must_use]
    #[inline]
    pub fn canvas(self) -> Size {
        self.canvas
    }

    /// Returns the grid shape this layout was built for.
    #[must_use]
    #[inline]
    pub fn grid(self) -> GridSize {
        self.grid
    }

    /// Returns the canvas-to-image scale factor.
    #[must_use]
    #[inline]
    pub fn ratio(self) -> f64 {
        self.ratio
    }

    /// Returns the canvas-space dimensions of one tile.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn tile(self) -> Size {
        Size::new(
            self.canvas.width / self.grid.cols() as f64,
            self.canvas.height / self.grid.rows() as f64,
        )
    }

    /// Returns the image-space dimensions of one tile.
    #[must_use]
    pub fn source_tile(self) -> Size {
        let tile = self.tile();
        Size::new(tile.width / self.ratio, tile.height / self.ratio)
    }

    /// Returns the canvas-space top-left corner of the tile at `cell`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn dest_origin(self, cell: Cell) -> Point {
        let tile = self.tile();
        Point::new(tile.width * cell.col() as f64, tile.height * cell.row() as f64)
    }

    /// Returns the image-space top-left corner of the tile at `cell`.
    #[must_use]
    pub fn source_origin(self, cell: Cell) -> Point {
        let dest = self.dest_origin(cell);
        Point::new(dest.x / self.ratio, dest.y / self.ratio)
    }

    /// Maps a canvas-space point to the cell under it, or `None` if the
    /// point lies outside the canvas.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at_point(self, point: Point) -> Option<Cell> {
        if point.x < 0.0
            || point.y < 0.0
            || point.x >= self.canvas.width
            || point.y >= self.canvas.height
        {
            return None;
        }
        let tile = self.tile();
        let cell = Cell::new(
            (point.y / tile.height) as usize,
            (point.x / tile.width) as usize,
        );
        self.grid.contains(cell).then_some(cell)
    }

    /// Maps a canvas-space point to the flattened slot index under it.
    #[must_use]
    pub fn index_at_point(self, point: Point) -> Option<usize> {
        self.cell_at_point(point).map(|cell| self.grid.index_of(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_3x3() -> TileLayout {
        let grid = GridSize::try_new(3, 3).unwrap();
        TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        let grid = GridSize::try_new(3, 3).unwrap();
        assert_eq!(
            TileLayout::new(Size::new(0.0, 600.0), 600.0, grid),
            Err(LayoutError::InvalidDimensions)
        );
        assert_eq!(
            TileLayout::new(Size::new(1200.0, 600.0), f64::NAN, grid),
            Err(LayoutError::InvalidDimensions)
        );
    }

    #[test]
    fn test_fit_width_bounds() {
        assert_eq!(fit_width(5000.0), 1400.0);
        assert_eq!(fit_width(0.0), 500.0);
        assert_eq!(fit_width(600.0), 600.0);
        // One past a breakpoint keeps it, one short falls back.
        assert_eq!(fit_width(799.0), 700.0);
        assert_eq!(fit_width(800.0), 800.0);
    }

    #[test]
    fn test_click_mapping() {
        let layout = layout_3x3();
        assert_eq!(layout.index_at_point(Point::new(0.0, 0.0)), Some(0));
        assert_eq!(layout.index_at_point(Point::new(599.0, 299.0)), Some(8));
        assert_eq!(layout.index_at_point(Point::new(250.0, 150.0)), Some(4));
        assert_eq!(layout.index_at_point(Point::new(-1.0, 0.0)), None);
        assert_eq!(layout.index_at_point(Point::new(600.0, 0.0)), None);
    }

    #[test]
    fn test_source_is_dest_unscaled() {
        let layout = layout_3x3();
        for cell in layout.grid().cells() {
            let dest = layout.dest_origin(cell);
            let source = layout.source_origin(cell);
            assert_eq!(source.x, dest.x / layout.ratio());
            assert_eq!(source.y, dest.y / layout.ratio());
        }
    }

    #[test]
    fn test_clock_radii() {
        let radii = clock_radii(300.0);
        assert_eq!(radii.preview, 75.0);
        assert_eq!(radii.level, 25.0);
    }
}
