//! Widget placement check for a single dashboard.

use super::{WidgetSpec, GRID_COLUMNS, GRID_ROWS, MAX_COL, MAX_ROW};
use crate::error::CoreError;

/// Reject widgets that share a grid cell or extend past the grid.
///
/// Widgets are processed in slice order. Each widget is first checked
/// against the grid bounds, so a widget that both overlaps and sticks out
/// is reported as out of bounds. It then claims every cell of its
/// rectangle; a cell claimed earlier fails with a "cell already taken"
/// error naming the current widget's top-left cell.
pub fn check_widget_placement(
    dashboard_name: &str,
    widgets: &[WidgetSpec],
) -> Result<(), CoreError> {
    let mut taken = [[false; GRID_COLUMNS]; GRID_ROWS];

    for widget in widgets {
        if !is_within_bounds(widget) {
            return Err(CoreError::Validation(format!(
                "Dashboard \"{dashboard_name}\" widget in cell X - {} Y - {} is out of bounds.",
                widget.col, widget.row
            )));
        }

        for row in widget.row..widget.row + widget.height {
            for col in widget.col..widget.col + widget.width {
                let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
                    continue;
                };
                let Some(cell) = taken.get_mut(r).and_then(|cells| cells.get_mut(c)) else {
                    continue;
                };

                if *cell {
                    return Err(CoreError::Validation(format!(
                        "Dashboard \"{dashboard_name}\" cell X - {} Y - {} is already taken.",
                        widget.col, widget.row
                    )));
                }
                *cell = true;
            }
        }
    }

    Ok(())
}

fn is_within_bounds(widget: &WidgetSpec) -> bool {
    widget.row >= 0
        && widget.col >= 0
        && widget.height >= 1
        && widget.width >= 1
        && widget.bottom() <= MAX_ROW
        && widget.right() <= MAX_COL
}
