//! es-calendar
//!
//! The content-calendar view model: month grid, post placement, selection
//! and expansion state, and the inline display rules layered on top.

pub mod classify;
pub mod clock;
pub mod display;
pub mod filter;
pub mod grid;
pub mod state;
pub mod summary;
pub mod view;

pub use classify::{Classifier, DayResolver, Placement};
pub use clock::{FixedClock, SystemClock};
pub use display::{CellContent, CellView, DisplayPolicy, MoreLink, DEFAULT_INLINE_CAP};
pub use filter::PostFilter;
pub use grid::{build_month_grid, build_month_grid_from, MonthGrid, GRID_CELLS};
pub use state::{CalendarEvent, CalendarState, Mode};
pub use summary::MonthSummary;
pub use view::{CalendarView, ViewOptions};
