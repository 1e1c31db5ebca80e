//! Calendar placement: date ranges and month grids.

pub mod date_range;
pub mod grid;

pub use date_range::{cells_for_item, position_in_range, span_days, SpanPosition};
pub use grid::{
    assign_items, build_month_grid, build_month_grid_with, CalendarCell, GridAssignment,
    InvalidItem, MonthGrid, WeekStart, DAYS_PER_WEEK, GRID_CELLS,
};
