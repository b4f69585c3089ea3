use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_sales_record::SalesRow;
use crate::enums::{City, DayOfWeek, ProductCategory};

/// Sentinel for "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Query string of the sales analysis dashboard.
///
/// `cities` is a comma separated list of city codes: absent means every city,
/// an empty string means no city at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesAnalysisQuery {
    pub cities: Option<String>,
    pub category: Option<String>,
    /// Max number of table rows to return (metrics always use every filtered row)
    pub limit: Option<usize>,
}

impl SalesAnalysisQuery {
    /// Build a query for an explicit selection
    pub fn for_selection(cities: &[City], category: CategoryFilter) -> Self {
        Self {
            cities: Some(
                cities
                    .iter()
                    .map(|c| c.code())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            category: Some(category.code().to_string()),
            limit: None,
        }
    }
}

/// Product category filter: either every category or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == ALL_CATEGORIES {
            return Some(CategoryFilter::All);
        }
        ProductCategory::from_code(code).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.code().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryFilter::from_code(&value).ok_or_else(|| format!("Unknown category: {}", value))
    }
}

/// Response of the sales analysis dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalysisResponse {
    /// Cities that were applied, in canonical order
    pub cities: Vec<City>,
    pub category: CategoryFilter,
    pub kpis: SalesKpis,
    /// Sum of sales per hour of day, ascending; hours without sales are absent
    pub sales_by_hour: Vec<HourlySales>,
    /// Sum of sales per day of week, always 7 entries Monday..Sunday
    pub sales_by_weekday: Vec<WeekdaySales>,
    /// Filtered rows (possibly truncated by `limit`)
    pub rows: Vec<SalesRow>,
    pub rows_truncated: bool,
}

/// Three headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesKpis {
    pub total_sales: f64,
    /// Mean ticket, `None` when the filtered set is empty
    pub average_ticket: Option<f64>,
    pub total_transactions: usize,
    /// e.g. "$1,234.56"
    pub total_sales_display: String,
    /// e.g. "$245.10" or "N/A"
    pub average_ticket_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySales {
    pub hour: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySales {
    pub day: DayOfWeek,
    pub total: f64,
}

/// Values for the two filter controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Cities present in the dataset, order of first appearance
    pub cities: Vec<City>,
    /// "All" followed by categories present in the dataset
    pub categories: Vec<String>,
}

/// Result of an operator-triggered reload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub rows: usize,
    pub source_path: String,
    pub loaded_at: DateTime<Utc>,
}
