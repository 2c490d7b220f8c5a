use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// One row of the historical automobile sales dataset.
///
/// Serde renames map the CSV's case-sensitive headers onto the fields;
/// columns beyond these seven are ignored at parse time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: String,
    #[serde(rename = "Automobile_Sales")]
    pub automobile_sales: f64,
    #[serde(rename = "Advertising_Expenditure")]
    pub advertising_expenditure: f64,
    #[serde(rename = "Recession", deserialize_with = "flag_from_int")]
    pub recession: bool,
    #[serde(rename = "unemployment_rate")]
    pub unemployment_rate: f64,
}

// The recession column is a 0/1 indicator; any nonzero value counts as set.
fn flag_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = u8::deserialize(deserializer)?;
    Ok(flag != 0)
}

/// Mean sales across unemployment-rate levels for one vehicle type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnemploymentSeries {
    pub vehicle_type: String,
    /// `(unemployment rate, mean sales)` pairs, rates ascending.
    pub points: Vec<(f64, f64)>,
}

/// Immutable in-memory table of sales records.
///
/// Built once when the dataset loads. Filters hand back new derived tables
/// and never touch the source rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    rows: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(rows: Vec<SalesRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SalesRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows flagged as belonging to a recession period.
    pub fn recession_only(&self) -> SalesTable {
        self.filtered(|r| r.recession)
    }

    /// Rows for one calendar year.
    pub fn for_year(&self, year: i32) -> SalesTable {
        self.filtered(|r| r.year == year)
    }

    fn filtered<F>(&self, keep: F) -> SalesTable
    where
        F: Fn(&SalesRecord) -> bool,
    {
        SalesTable {
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// First and last year present, or None for an empty table.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.rows.iter().map(|r| r.year).min()?;
        let last = self.rows.iter().map(|r| r.year).max()?;
        Some((first, last))
    }

    /// Mean automobile sales per year, years ascending.
    pub fn mean_sales_by_year(&self) -> Vec<(i32, f64)> {
        let mut groups: BTreeMap<i32, MeanAcc> = BTreeMap::new();
        for r in &self.rows {
            groups.entry(r.year).or_default().add(r.automobile_sales);
        }
        groups
            .into_iter()
            .map(|(year, acc)| (year, acc.mean()))
            .collect()
    }

    /// Mean automobile sales per vehicle type, types in lexicographic order.
    pub fn mean_sales_by_vehicle_type(&self) -> Vec<(String, f64)> {
        let mut groups: BTreeMap<String, MeanAcc> = BTreeMap::new();
        for r in &self.rows {
            groups
                .entry(r.vehicle_type.clone())
                .or_default()
                .add(r.automobile_sales);
        }
        groups
            .into_iter()
            .map(|(vehicle_type, acc)| (vehicle_type, acc.mean()))
            .collect()
    }

    /// Total advertising expenditure per vehicle type, lexicographic order.
    pub fn ad_spend_by_vehicle_type(&self) -> Vec<(String, f64)> {
        let mut groups: BTreeMap<String, f64> = BTreeMap::new();
        for r in &self.rows {
            *groups.entry(r.vehicle_type.clone()).or_default() += r.advertising_expenditure;
        }
        groups.into_iter().collect()
    }

    /// Mean sales at each observed unemployment rate, one series per vehicle
    /// type. Types come out lexicographic, rates ascending within a series.
    pub fn mean_sales_by_unemployment(&self) -> Vec<UnemploymentSeries> {
        let mut groups: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
        for r in &self.rows {
            groups
                .entry(r.vehicle_type.clone())
                .or_default()
                .push((r.unemployment_rate, r.automobile_sales));
        }
        groups
            .into_iter()
            .map(|(vehicle_type, mut samples)| {
                samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
                UnemploymentSeries {
                    vehicle_type,
                    points: merge_rate_runs(&samples),
                }
            })
            .collect()
    }

    /// Month and sales columns in their stored row order, no aggregation.
    pub fn monthly_sales(&self) -> (Vec<String>, Vec<f64>) {
        let months = self.rows.iter().map(|r| r.month.clone()).collect();
        let sales = self.rows.iter().map(|r| r.automobile_sales).collect();
        (months, sales)
    }
}

// Collapse sorted (rate, sales) samples into one mean point per distinct rate.
fn merge_rate_runs(samples: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut acc = MeanAcc::default();
    let mut current: Option<f64> = None;
    for &(rate, sales) in samples {
        match current {
            Some(run) if run == rate => acc.add(sales),
            Some(run) => {
                points.push((run, acc.mean()));
                acc = MeanAcc::default();
                acc.add(sales);
                current = Some(rate);
            }
            None => {
                acc.add(sales);
                current = Some(rate);
            }
        }
    }
    if let Some(run) = current {
        points.push((run, acc.mean()));
    }
    points
}

#[derive(Debug, Default, Clone, Copy)]
struct MeanAcc {
    sum: f64,
    n: usize,
}

impl MeanAcc {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.n += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.n.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        year: i32,
        month: &str,
        vehicle_type: &str,
        sales: f64,
        ad_spend: f64,
        recession: bool,
        unemployment: f64,
    ) -> SalesRecord {
        SalesRecord {
            year,
            month: month.to_string(),
            vehicle_type: vehicle_type.to_string(),
            automobile_sales: sales,
            advertising_expenditure: ad_spend,
            recession,
            unemployment_rate: unemployment,
        }
    }

    fn sample_table() -> SalesTable {
        SalesTable::new(vec![
            rec(2019, "Jan", "Sports", 40.0, 10.0, false, 3.5),
            rec(2020, "Jan", "Car", 100.0, 50.0, false, 5.0),
            rec(2020, "Feb", "Truck", 200.0, 30.0, false, 5.0),
            rec(1982, "Mar", "Car", 60.0, 20.0, true, 8.0),
            rec(1982, "Apr", "Car", 80.0, 40.0, true, 9.0),
        ])
    }

    #[test]
    fn filters_produce_new_tables() {
        let table = sample_table();

        let recession = table.recession_only();
        assert_eq!(recession.len(), 2);
        assert!(recession.rows().iter().all(|r| r.recession));
        assert_eq!(table.len(), 5);

        let year = table.for_year(2020);
        assert_eq!(year.len(), 2);
        assert!(year.rows().iter().all(|r| r.year == 2020));
    }

    #[test]
    fn mean_sales_by_year_ascends() {
        let means = sample_table().mean_sales_by_year();
        assert_eq!(means, vec![(1982, 70.0), (2019, 40.0), (2020, 150.0)]);
    }

    #[test]
    fn mean_sales_by_vehicle_type_is_lexicographic() {
        let means = sample_table().mean_sales_by_vehicle_type();
        assert_eq!(
            means,
            vec![
                ("Car".to_string(), 80.0),
                ("Sports".to_string(), 40.0),
                ("Truck".to_string(), 200.0),
            ]
        );
    }

    #[test]
    fn ad_spend_sums_per_type() {
        let spend = sample_table().ad_spend_by_vehicle_type();
        assert_eq!(
            spend,
            vec![
                ("Car".to_string(), 110.0),
                ("Sports".to_string(), 10.0),
                ("Truck".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn unemployment_series_merge_equal_rates() {
        let table = SalesTable::new(vec![
            rec(1982, "Jan", "Car", 10.0, 0.0, true, 8.0),
            rec(1982, "Feb", "Car", 30.0, 0.0, true, 8.0),
            rec(1982, "Mar", "Car", 50.0, 0.0, true, 6.0),
            rec(1982, "Apr", "Truck", 70.0, 0.0, true, 8.0),
        ]);
        let series = table.mean_sales_by_unemployment();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].vehicle_type, "Car");
        assert_eq!(series[0].points, vec![(6.0, 50.0), (8.0, 20.0)]);
        assert_eq!(series[1].vehicle_type, "Truck");
        assert_eq!(series[1].points, vec![(8.0, 70.0)]);
    }

    #[test]
    fn monthly_sales_preserves_row_order() {
        let (months, sales) = sample_table().for_year(1982).monthly_sales();
        assert_eq!(months, vec!["Mar", "Apr"]);
        assert_eq!(sales, vec![60.0, 80.0]);
    }

    #[test]
    fn empty_table_aggregates_to_nothing() {
        let table = SalesTable::default();
        assert!(table.is_empty());
        assert!(table.mean_sales_by_year().is_empty());
        assert!(table.mean_sales_by_vehicle_type().is_empty());
        assert!(table.ad_spend_by_vehicle_type().is_empty());
        assert!(table.mean_sales_by_unemployment().is_empty());
        assert_eq!(table.year_span(), None);
        let (months, sales) = table.monthly_sales();
        assert!(months.is_empty() && sales.is_empty());
    }

    #[test]
    fn year_span_covers_min_and_max() {
        assert_eq!(sample_table().year_span(), Some((1982, 2020)));
        assert_eq!(sample_table().for_year(2019).year_span(), Some((2019, 2019)));
    }
}
