use sales_core::SalesTable;

use crate::components::Scalar;
use crate::figure::{BarSeries, Figure};

/// The four recession-period charts, in presentation order.
///
/// Every chart reads the recession-flagged rows only; the year selection
/// plays no part in this branch.
pub fn recession_figures(table: &SalesTable) -> Vec<Figure> {
    let recession = table.recession_only();

    let by_year = recession.mean_sales_by_year();
    let sales_over_years = Figure::line(
        "Average Automobile Sales fluctuation over Recession Period",
        "Year",
        "Automobile_Sales",
        by_year.iter().map(|&(year, _)| Scalar::from(year)).collect(),
        by_year.iter().map(|&(_, mean)| mean).collect(),
    );

    let by_type = recession.mean_sales_by_vehicle_type();
    let sales_by_type = Figure::bar(
        "Average number of vehicles sold by vehicle type",
        "Vehicle_Type",
        "Automobile_Sales",
        by_type
            .iter()
            .map(|(ty, _)| Scalar::from(ty.as_str()))
            .collect(),
        by_type.iter().map(|&(_, mean)| mean).collect(),
    );

    let spend = recession.ad_spend_by_vehicle_type();
    let expenditure_share = Figure::pie(
        "Total expenditure share by vehicle type during recessions",
        spend.iter().map(|(ty, _)| ty.clone()).collect(),
        spend.iter().map(|&(_, total)| total).collect(),
    );

    let unemployment_effect = Figure::grouped_bar(
        "Effect of Unemployment Rate on Vehicle Type and Sales",
        "unemployment_rate",
        "Automobile_Sales",
        recession
            .mean_sales_by_unemployment()
            .into_iter()
            .map(|series| BarSeries {
                name: series.vehicle_type,
                x: series
                    .points
                    .iter()
                    .map(|&(rate, _)| Scalar::from(rate))
                    .collect(),
                y: series.points.iter().map(|&(_, mean)| mean).collect(),
            })
            .collect(),
    );

    vec![
        sales_over_years,
        sales_by_type,
        expenditure_share,
        unemployment_effect,
    ]
}

/// The four yearly charts, in presentation order.
///
/// Chart 1 plots per-year means over the whole table; charts 2 through 4
/// read only the selected year's rows.
pub fn yearly_figures(table: &SalesTable, year: i32) -> Vec<Figure> {
    let year_rows = table.for_year(year);

    let by_year = table.mean_sales_by_year();
    let sales_over_years = Figure::line(
        "Yearly Automobile sales",
        "Year",
        "Automobile_Sales",
        by_year.iter().map(|&(y, _)| Scalar::from(y)).collect(),
        by_year.iter().map(|&(_, mean)| mean).collect(),
    );

    // raw per-month rows in their stored order, no aggregation
    let (months, sales) = year_rows.monthly_sales();
    let monthly = Figure::line(
        "Monthly Automobile sales",
        "Month",
        "Automobile_Sales",
        months.into_iter().map(Scalar::from).collect(),
        sales,
    );

    let by_type = year_rows.mean_sales_by_vehicle_type();
    let sales_by_type = Figure::bar(
        format!("Average Vehicles Sold by Vehicle Type in the year {year}"),
        "Vehicle_Type",
        "Automobile_Sales",
        by_type
            .iter()
            .map(|(ty, _)| Scalar::from(ty.as_str()))
            .collect(),
        by_type.iter().map(|&(_, mean)| mean).collect(),
    );

    let spend = year_rows.ad_spend_by_vehicle_type();
    let expenditure_share = Figure::pie(
        "Total expenditure share by vehicle type",
        spend.iter().map(|(ty, _)| ty.clone()).collect(),
        spend.iter().map(|&(_, total)| total).collect(),
    );

    vec![sales_over_years, monthly, sales_by_type, expenditure_share]
}
