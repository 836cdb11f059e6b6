//! DrawSurface - the seam between the simulation and whatever paints pixels
//!
//! The browser host implements it over a `CanvasRenderingContext2d`; tests
//! implement it with a recorder.

use super::math::Bounds;

pub trait DrawSurface {
    /// Image handle accepted by `draw_image` (an `HtmlImageElement` in the browser)
    type Image;

    /// Current surface size in pixels
    fn bounds(&self) -> Bounds;

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Draw `image` scaled into the `w`×`h` box at `(x, y)`.
    ///
    /// Images that have not finished loading draw nothing.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, w: f64, h: f64);
}
