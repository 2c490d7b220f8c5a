use crate::components::{Component, DropdownOption, Scalar};
use crate::selection::{StatisticsType, YEARS};

pub const PAGE_TITLE: &str = "Automobile Statistics Dashboard";

// Control and region ids shared by the layout, the update round-trip and
// the browser shell.
pub const DROPDOWN_STATISTICS: &str = "dropdown-statistics";
pub const SELECT_YEAR: &str = "select-year";
pub const OUTPUT_CONTAINER: &str = "output-container";

/// The static page tree, built once and served as JSON.
///
/// Interaction never regenerates it. The only mutations the page ever sees
/// are the year selector's disabled flag and the replacement of the output
/// container's children, both carried by update responses.
pub fn page_layout() -> Component {
    Component::Container {
        id: None,
        class: None,
        children: vec![
            Component::Heading {
                text: PAGE_TITLE.to_string(),
            },
            Component::Label {
                text: "Select Statistics :".to_string(),
            },
            Component::Dropdown {
                id: DROPDOWN_STATISTICS.to_string(),
                options: vec![
                    report_option(StatisticsType::Yearly),
                    report_option(StatisticsType::Recession),
                ],
                placeholder: Some("Select a report type".to_string()),
                disabled: false,
            },
            Component::Dropdown {
                id: SELECT_YEAR.to_string(),
                options: YEARS
                    .map(|year| DropdownOption {
                        label: year.to_string(),
                        value: Scalar::from(year),
                    })
                    .collect(),
                placeholder: Some("Select Year".to_string()),
                // stays disabled until the yearly report is chosen
                disabled: true,
            },
            Component::Container {
                id: Some(OUTPUT_CONTAINER.to_string()),
                class: Some("chart-grid".to_string()),
                children: Vec::new(),
            },
        ],
    }
}

fn report_option(stat: StatisticsType) -> DropdownOption {
    DropdownOption {
        label: stat.as_str().to_string(),
        value: Scalar::from(stat.as_str()),
    }
}
