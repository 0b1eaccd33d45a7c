//! Pointer parallax of the particle layers.

use folio_kernel::dom::ids::{FIREFLY_CLASS, LEAF_CLASS};
use folio_kernel::prelude::*;

/// Offset of leaf `index` for a pointer at `(x, y)` normalised to the viewport.
#[must_use]
pub fn leaf_offset(index: usize, x: f64, y: f64) -> (f64, f64) {
    let speed = 0.5 + (index % 3) as f64 * 0.2;
    ((x - 0.5) * 20.0 * speed, (y - 0.5) * 20.0 * speed)
}

/// Fireflies drift less than leaves.
#[must_use]
pub fn firefly_offset(index: usize, x: f64, y: f64) -> (f64, f64) {
    let speed = 0.3 + (index % 5) as f64 * 0.1;
    ((x - 0.5) * 10.0 * speed, (y - 0.5) * 10.0 * speed)
}

/// Moves every particle for a pointer at client coordinates `(client_x, client_y)`.
///
/// Returns the number of particles moved.
pub fn apply(doc: &mut impl Document, client_x: f64, client_y: f64) -> usize {
    let viewport = doc.viewport();
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return 0;
    }
    let (x, y) = (client_x / viewport.width, client_y / viewport.height);

    shift(doc, LEAF_CLASS, |i| leaf_offset(i, x, y)) + shift(doc, FIREFLY_CLASS, |i| firefly_offset(i, x, y))
}

fn shift(doc: &mut impl Document, class: &str, offset: impl Fn(usize) -> (f64, f64)) -> usize {
    let mut moved = 0;
    for (index, id) in doc.ids_with_class(class).iter().enumerate() {
        let (dx, dy) = offset(index);
        if doc.set_style(id, "transform", &format!("translate({dx:.2}px, {dy:.2}px)")) {
            moved += 1;
        }
    }
    moved
}
