use contracts::dashboards::d400_sales_analysis::{
    CategoryFilter, FilterOptions, HourlySales, SalesAnalysisQuery, SalesAnalysisResponse,
    SalesKpis, WeekdaySales, ALL_CATEGORIES,
};
use contracts::domain::a001_sales_record::SalesRow;
use contracts::enums::{City, DayOfWeek};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::shared::data::LoadedDataset;
use crate::shared::format::{format_money, format_optional_money};

/// Invalid filter values coming from the client
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Unknown product category: {0}")]
    UnknownCategory(String),
}

/// City set + category selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesFilter {
    /// Selected cities in canonical order, no duplicates
    pub cities: Vec<City>,
    pub category: CategoryFilter,
}

impl SalesFilter {
    /// Every city, every category (the page's initial state)
    pub fn everything() -> Self {
        Self {
            cities: City::all(),
            category: CategoryFilter::All,
        }
    }

    pub fn from_query(query: &SalesAnalysisQuery) -> Result<Self, FilterError> {
        let cities = match query.cities.as_deref() {
            None => City::all(),
            Some(raw) => {
                let mut selected = Vec::new();
                for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
                    let city =
                        City::from_code(code).ok_or_else(|| FilterError::UnknownCity(code.to_string()))?;
                    selected.push(city);
                }
                City::all()
                    .into_iter()
                    .filter(|c| selected.contains(c))
                    .collect()
            }
        };

        let category = match query.category.as_deref() {
            None => CategoryFilter::All,
            Some(code) => CategoryFilter::from_code(code.trim())
                .ok_or_else(|| FilterError::UnknownCategory(code.to_string()))?,
        };

        Ok(Self { cities, category })
    }

    pub fn matches(&self, row: &SalesRow) -> bool {
        self.cities.contains(&row.record.city) && self.category.matches(row.record.product_category)
    }
}

pub fn filter_rows<'a>(rows: &'a [SalesRow], filter: &SalesFilter) -> Vec<&'a SalesRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// Total, mean ticket and transaction count. Mean is `None` for an empty set.
pub fn compute_kpis(rows: &[&SalesRow]) -> SalesKpis {
    let total_sales: f64 = rows.iter().map(|r| r.record.amount).sum();
    let total_transactions = rows.len();
    let average_ticket = if total_transactions > 0 {
        Some(total_sales / total_transactions as f64)
    } else {
        None
    };

    SalesKpis {
        total_sales,
        average_ticket,
        total_transactions,
        total_sales_display: format_money(total_sales),
        average_ticket_display: format_optional_money(average_ticket),
    }
}

/// Sum per hour of day, ascending. Hours without sales are not present.
pub fn sales_by_hour(rows: &[&SalesRow]) -> Vec<HourlySales> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.hour_of_day).or_insert(0.0) += row.record.amount;
    }
    totals
        .into_iter()
        .map(|(hour, total)| HourlySales { hour, total })
        .collect()
}

/// Sum per day of week, reindexed Monday..Sunday with zeros for empty days
pub fn sales_by_weekday(rows: &[&SalesRow]) -> Vec<WeekdaySales> {
    let mut totals: HashMap<DayOfWeek, f64> = HashMap::new();
    for row in rows {
        *totals.entry(row.day_of_week).or_insert(0.0) += row.record.amount;
    }
    DayOfWeek::all()
        .into_iter()
        .map(|day| WeekdaySales {
            day,
            total: totals.get(&day).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Filter the cached dataset and compute everything the page shows
pub fn get_sales_analysis(
    dataset: &LoadedDataset,
    query: &SalesAnalysisQuery,
) -> Result<SalesAnalysisResponse, FilterError> {
    let filter = SalesFilter::from_query(query)?;
    let filtered = filter_rows(&dataset.rows, &filter);

    let kpis = compute_kpis(&filtered);
    let sales_by_hour = sales_by_hour(&filtered);
    let sales_by_weekday = sales_by_weekday(&filtered);

    let limit = query.limit.unwrap_or(filtered.len());
    let rows_truncated = filtered.len() > limit;
    let rows = filtered.into_iter().take(limit).cloned().collect();

    Ok(SalesAnalysisResponse {
        cities: filter.cities,
        category: filter.category,
        kpis,
        sales_by_hour,
        sales_by_weekday,
        rows,
        rows_truncated,
    })
}

/// Cities and categories present in the data, in order of first appearance
pub fn get_filter_options(dataset: &LoadedDataset) -> FilterOptions {
    let mut cities: Vec<City> = Vec::new();
    let mut categories: Vec<String> = vec![ALL_CATEGORIES.to_string()];

    for row in &dataset.rows {
        if !cities.contains(&row.record.city) {
            cities.push(row.record.city);
        }
        let code = row.record.product_category.code();
        if !categories.iter().any(|c| c == code) {
            categories.push(code.to_string());
        }
    }

    FilterOptions { cities, categories }
}
