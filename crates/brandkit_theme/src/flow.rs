//! Row-wrapping layout for chip-like items.
//!
//! Items are placed left to right and wrap onto a new row when the next one
//! would overflow the available width. The first item of a row never wraps,
//! so an item wider than the available width sits alone on its row.

use gpui::{Bounds, Pixels, Point, Size, point, px, size};

/// The result of a flow layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLayout {
    /// Bounding size of every placed item.
    pub size: Size<Pixels>,
    /// Top-left corner of each item, in input order, relative to (0, 0).
    pub positions: Vec<Point<Pixels>>,
    rows: Vec<usize>,
    row_heights: Vec<Pixels>,
}

impl FlowLayout {
    /// Lays `sizes` out in rows no wider than `max_width`.
    ///
    /// Pass an infinite width to keep everything on one row. Negative or
    /// non-finite spacing and negative or NaN item dimensions are treated as
    /// zero.
    pub fn compute(sizes: &[Size<Pixels>], max_width: Pixels, spacing: Pixels) -> Self {
        let max_width = max_width.to_f64() as f32;
        let spacing = spacing.to_f64() as f32;
        let spacing = if !spacing.is_finite() || spacing < 0. {
            tracing::warn!(spacing, "flow spacing must be finite and non-negative, using 0");
            0.
        } else {
            spacing
        };

        let mut positions = Vec::with_capacity(sizes.len());
        let mut rows = Vec::with_capacity(sizes.len());
        let mut row_heights = Vec::new();

        let (mut x, mut y, mut row_height) = (0_f32, 0_f32, 0_f32);
        let mut total_width = 0_f32;

        for item in sizes {
            let width = non_negative(item.width);
            let height = non_negative(item.height);

            if x > 0. && x + width > max_width {
                row_heights.push(px(row_height));
                x = 0.;
                y += row_height + spacing;
                row_height = 0.;
            }

            positions.push(point(px(x), px(y)));
            rows.push(row_heights.len());

            total_width = total_width.max(x + width);
            x += width + spacing;
            row_height = row_height.max(height);
        }

        if !sizes.is_empty() {
            row_heights.push(px(row_height));
        }

        let layout = Self {
            size: size(px(total_width), px(y + row_height)),
            positions,
            rows,
            row_heights,
        };

        tracing::trace!(
            items = sizes.len(),
            max_width,
            rows = layout.row_count(),
            width = total_width,
            height = y + row_height,
            "computed flow layout"
        );

        layout
    }

    /// Number of rows the items occupy. Zero when there are no items.
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// The row index of each item, in input order.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Height of each row, tallest item per row.
    pub fn row_heights(&self) -> &[Pixels] {
        &self.row_heights
    }
}

fn non_negative(value: Pixels) -> f32 {
    let value = value.to_f64() as f32;
    if value.is_nan() { 0. } else { value.max(0.) }
}

/// Total size the items need when offered `max_width`.
pub fn measure(max_width: Pixels, sizes: &[Size<Pixels>], spacing: Pixels) -> Size<Pixels> {
    FlowLayout::compute(sizes, max_width, spacing).size
}

/// Positions for the items inside `bounds`, offset by its origin.
///
/// The bounds' width is the wrapping width; its height is not a constraint.
pub fn place(
    bounds: Bounds<Pixels>,
    sizes: &[Size<Pixels>],
    spacing: Pixels,
) -> Vec<Point<Pixels>> {
    FlowLayout::compute(sizes, bounds.size.width, spacing)
        .positions
        .into_iter()
        .map(|position| {
            point(
                bounds.origin.x + position.x,
                bounds.origin.y + position.y,
            )
        })
        .collect()
}
