//! Cell placement
//!
//! Cells are laid out left to right on a single line. Each cell is two
//! columns by three rows; a running cursor marks the centre of the left
//! column and moves by [`LayoutConfig::advance`] per cell, blank or not.

use crate::braille::DotSet;

use super::{Document, Dot, LayoutConfig, Placement, Point};

/// Column and row of a dot within its cell.
///
/// Dots 1-3 run down the left column, 4-6 down the right.
pub fn grid_position(dot: u8) -> (u8, u8) {
    let col = if dot <= 3 { 0 } else { 1 };
    let row = dot.saturating_sub(1) % 3;
    (col, row)
}

/// Place every raised dot of every cell.
///
/// Output order follows the input: cell by cell, ascending dot number
/// within a cell.
pub fn place_dots(cells: &[DotSet], config: &LayoutConfig) -> Placement {
    let mut dots = Vec::with_capacity(cells.iter().map(|c| c.len()).sum());
    let mut x = config.cell_width / 2.0;

    for cell in cells {
        for dot in cell.iter() {
            let (col, row) = grid_position(dot);
            let center = Point::new(
                x + f64::from(col) * config.cell_width,
                f64::from(row) * config.cell_height + config.cell_height / 2.0,
            );
            dots.push(Dot {
                center,
                radius: config.dot_radius,
                color: config.dot_color.clone(),
            });
        }
        x += config.advance();
    }

    Placement { dots, cursor: x }
}

/// Canvas width for a final cursor position: the cursor minus the trailing
/// gap, plus half a column. An explicit width in the config wins unless it
/// is zero or NaN, which count as unset.
pub fn canvas_width(cursor: f64, config: &LayoutConfig) -> f64 {
    config
        .canvas_width
        .filter(|w| *w != 0.0 && !w.is_nan())
        .unwrap_or(cursor - config.char_spacing + config.cell_width / 2.0)
}

/// Lay out the cells and size the canvas
pub fn compute(cells: &[DotSet], config: &LayoutConfig) -> Document {
    let Placement { dots, cursor } = place_dots(cells, config);
    let width = canvas_width(cursor, config);

    log::debug!(
        "laid out {} cells, {} dots, canvas {}x{}",
        cells.len(),
        dots.len(),
        width,
        config.canvas_height
    );

    Document {
        width,
        height: config.canvas_height,
        background: config.background().map(str::to_string),
        dots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(placement: &Placement) -> Vec<(f64, f64)> {
        placement
            .dots
            .iter()
            .map(|d| (d.center.x, d.center.y))
            .collect()
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position(1), (0, 0));
        assert_eq!(grid_position(2), (0, 1));
        assert_eq!(grid_position(3), (0, 2));
        assert_eq!(grid_position(4), (1, 0));
        assert_eq!(grid_position(5), (1, 1));
        assert_eq!(grid_position(6), (1, 2));
    }

    #[test]
    fn test_single_cell_positions() {
        let config = LayoutConfig::default();
        let placement = place_dots(&[DotSet::from_dots(&[1, 2])], &config);
        assert_eq!(centers(&placement), vec![(5.0, 5.0), (5.0, 15.0)]);
        assert_eq!(placement.cursor, 30.0);
        assert!(placement.dots.iter().all(|d| d.radius == 3.0 && d.color == "black"));
    }

    #[test]
    fn test_full_cell_positions() {
        let config = LayoutConfig::default();
        let placement = place_dots(&[DotSet::from_pattern(0x3F)], &config);
        assert_eq!(
            centers(&placement),
            vec![
                (5.0, 5.0),
                (5.0, 15.0),
                (5.0, 25.0),
                (15.0, 5.0),
                (15.0, 15.0),
                (15.0, 25.0),
            ]
        );
    }

    #[test]
    fn test_second_cell_offset_by_advance() {
        let config = LayoutConfig::new().with_cell_size(12.0, 12.0).with_char_spacing(8.0);
        let cell = DotSet::from_dots(&[1, 5]);
        let placement = place_dots(&[cell, cell], &config);
        let xs: Vec<f64> = placement.dots.iter().map(|d| d.center.x).collect();
        assert_eq!(xs[2] - xs[0], config.advance());
        assert_eq!(xs[3] - xs[1], config.advance());
    }

    #[test]
    fn test_blank_cells_still_advance() {
        let config = LayoutConfig::default();
        let cells = [DotSet::empty(), DotSet::empty(), DotSet::from_dots(&[1])];
        let placement = place_dots(&cells, &config);
        assert_eq!(placement.dots.len(), 1);
        assert_eq!(placement.dots[0].center.x, 5.0 + 2.0 * 25.0);
        assert_eq!(placement.cursor, 5.0 + 3.0 * 25.0);
    }

    #[test]
    fn test_canvas_width_empty_input() {
        let config = LayoutConfig::default();
        let doc = compute(&[], &config);
        assert_eq!(doc.width, 5.0);
        assert_eq!(doc.height, 40.0);
        assert!(doc.dots.is_empty());
    }

    #[test]
    fn test_canvas_width_one_cell() {
        let doc = compute(&[DotSet::from_dots(&[1, 2])], &LayoutConfig::default());
        assert_eq!(doc.width, 30.0);
    }

    #[test]
    fn test_explicit_canvas_width() {
        let config = LayoutConfig::new().with_canvas_width(200.0);
        let doc = compute(&[DotSet::empty(); 3], &config);
        assert_eq!(doc.width, 200.0);
    }

    #[test]
    fn test_zero_or_nan_canvas_width_is_computed() {
        let cells = [DotSet::from_dots(&[1, 2])];
        let doc = compute(&cells, &LayoutConfig::new().with_canvas_width(0.0));
        assert_eq!(doc.width, 30.0);
        let doc = compute(&cells, &LayoutConfig::new().with_canvas_width(f64::NAN));
        assert_eq!(doc.width, 30.0);
    }

    #[test]
    fn test_background_passed_through() {
        let config = LayoutConfig::new().with_background_color("white");
        let doc = compute(&[], &config);
        assert_eq!(doc.background.as_deref(), Some("white"));
    }
}
