pub mod callbacks;
pub mod components;
pub mod figure;
pub mod layout;
pub mod reports;
pub mod selection;

pub use callbacks::{render_output, year_selector_enabled};
pub use components::{Component, DropdownOption, Scalar};
pub use figure::{BarSeries, Figure, LayoutSpec, Title, Trace};
pub use layout::{page_layout, DROPDOWN_STATISTICS, OUTPUT_CONTAINER, PAGE_TITLE, SELECT_YEAR};
pub use reports::{recession_figures, yearly_figures};
pub use selection::{Selection, StatisticsType, YEARS};
