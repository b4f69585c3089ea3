use backend::dashboards::d400_sales_analysis::service;
use backend::domain::a001_sales_record::repository;
use backend::shared::data::DatasetStore;
use backend::usecases::u501_generate_dataset::{executor, generate_sales_records, GenerateRequest};
use chrono::{NaiveDate, NaiveDateTime};
use contracts::dashboards::d400_sales_analysis::SalesAnalysisQuery;
use contracts::domain::a001_sales_record::CSV_COLUMNS;
use contracts::enums::{City, DayOfWeek, PaymentMethod, ProductCategory};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 1)
        .unwrap()
        .and_hms_opt(17, 45, 12)
        .unwrap()
}

#[test]
fn generated_rows_are_complete_and_valid() {
    for n in [1usize, 4, 5, 37, 1000] {
        let dataset = generate_sales_records(n, now(), &mut StdRng::seed_from_u64(n as u64)).unwrap();
        assert_eq!(dataset.records.len(), n);

        let pool: HashSet<&str> = dataset.customer_pool.iter().map(String::as_str).collect();
        assert_eq!(pool.len(), (n / 5).max(1));

        for record in &dataset.records {
            assert!(!record.customer_id.is_empty());
            assert!(pool.contains(record.customer_id.as_str()));
            assert!(record.amount > 0.0);
            assert!(ProductCategory::all().contains(&record.product_category));
            assert!(City::all().contains(&record.city));
            assert!(PaymentMethod::all().contains(&record.payment_method));
        }
    }
}

#[test]
fn written_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw_sales_data.csv");
    let dataset = generate_sales_records(300, now(), &mut StdRng::seed_from_u64(42)).unwrap();

    repository::write_records(&path, &dataset.records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(header, CSV_COLUMNS.join(","));
    assert_eq!(text.lines().count(), 301);

    let rows = repository::load_rows(&path).unwrap();
    assert_eq!(rows.len(), dataset.records.len());
    for (row, original) in rows.iter().zip(&dataset.records) {
        assert_eq!(&row.record, original);
        assert_eq!(row.record.purchased_at, original.purchased_at);
    }
}

#[tokio::test]
async fn generated_file_feeds_the_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let request = GenerateRequest {
        record_count: 500,
        output_path: dir.path().join("raw_sales_data.csv"),
        seed: Some(2025),
    };
    executor::run(&request, now()).unwrap();

    let store = DatasetStore::open(&request.output_path).await.unwrap();
    let dataset = store.current().await;
    assert_eq!(dataset.len(), 500);

    let everything = service::get_sales_analysis(&dataset, &SalesAnalysisQuery::default()).unwrap();
    assert_eq!(everything.kpis.total_transactions, 500);
    assert_eq!(everything.rows.len(), 500);
    let total: f64 = dataset.rows.iter().map(|r| r.record.amount).sum();
    assert!((everything.kpis.total_sales - total).abs() < 1e-6);

    let hourly_sum: f64 = everything.sales_by_hour.iter().map(|h| h.total).sum();
    let weekday_sum: f64 = everything.sales_by_weekday.iter().map(|w| w.total).sum();
    assert!((hourly_sum - total).abs() < 1e-6);
    assert!((weekday_sum - total).abs() < 1e-6);
    assert!(everything.sales_by_hour.iter().all(|h| h.hour < 24));
    assert_eq!(
        everything
            .sales_by_weekday
            .iter()
            .map(|w| w.day)
            .collect::<Vec<_>>(),
        DayOfWeek::all().to_vec()
    );

    // Every category subset adds up to the whole
    let per_category: usize = ProductCategory::all()
        .iter()
        .map(|category| {
            let query = SalesAnalysisQuery {
                category: Some(category.code().to_string()),
                ..SalesAnalysisQuery::default()
            };
            service::get_sales_analysis(&dataset, &query)
                .unwrap()
                .kpis
                .total_transactions
        })
        .sum();
    assert_eq!(per_category, 500);

    let options = service::get_filter_options(&dataset);
    assert_eq!(options.categories[0], "All");
    assert!(options.cities.len() <= City::all().len());
}
