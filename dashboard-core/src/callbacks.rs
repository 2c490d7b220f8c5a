use sales_core::SalesTable;

use crate::components::Component;
use crate::reports::{recession_figures, yearly_figures};
use crate::selection::{Selection, StatisticsType};

/// Enabled state of the year selector. Only the yearly report reads a year,
/// so only the exact "Yearly Statistics" choice enables it.
pub fn year_selector_enabled(statistics: Option<StatisticsType>) -> bool {
    statistics == Some(StatisticsType::Yearly)
}

/// Recompute the output region for the current selection.
///
/// Returns the replacement children of the output container: two chart
/// groups of two graphs each, or nothing when the selection does not name
/// a complete report.
pub fn render_output(table: &SalesTable, selection: &Selection) -> Vec<Component> {
    let figures = match (selection.statistics, selection.year) {
        (Some(StatisticsType::Recession), _) => recession_figures(table),
        (Some(StatisticsType::Yearly), Some(year)) => yearly_figures(table, year),
        _ => return Vec::new(),
    };

    let mut figures = figures.into_iter();
    let mut groups = Vec::new();
    while let (Some(first), Some(second)) = (figures.next(), figures.next()) {
        groups.push(Component::Container {
            id: None,
            class: Some("chart-item".to_string()),
            children: vec![
                Component::Graph { figure: first },
                Component::Graph { figure: second },
            ],
        });
    }
    groups
}
