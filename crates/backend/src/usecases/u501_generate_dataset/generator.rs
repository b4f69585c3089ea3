use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Timelike};
use contracts::domain::a001_sales_record::SalesRecord;
use contracts::enums::{City, PaymentMethod, ProductCategory};
use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use std::collections::HashSet;

/// Customer pool is 20% of the record count
const CUSTOMER_POOL_DIVISOR: usize = 5;
/// Purchases fall into the trailing two years
const WINDOW_DAYS: i64 = 730;
const AMOUNT_SHAPE: f64 = 2.0;
const AMOUNT_SCALE: f64 = 150.0;
/// Smallest positive amount after rounding to cents
const MIN_AMOUNT: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    /// Unique customer ids every record draws from
    pub customer_pool: Vec<String>,
    pub records: Vec<SalesRecord>,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
}

/// Generate `record_count` independent sales records.
///
/// Every column is drawn as a whole vector from its own distribution, then
/// the columns are zipped into records. The only structure across rows is the
/// reuse of customer ids from a pool of `record_count / 5` ids.
pub fn generate_sales_records<R: Rng + ?Sized>(
    record_count: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<GeneratedDataset> {
    let window_end = now.with_nanosecond(0).unwrap_or(now);
    let window_start = window_end - Duration::days(WINDOW_DAYS);

    let customer_pool = customer_pool(pool_size(record_count), rng);
    let customers = draw_customers(&customer_pool, record_count, rng);
    let timestamps = draw_timestamps(window_start, window_end, record_count, rng);
    let amounts = draw_amounts(record_count, rng)?;
    let categories = draw_weighted(&ProductCategory::all(), |c| c.probability(), record_count, rng)?;
    let cities = draw_weighted(&City::all(), |c| c.probability(), record_count, rng)?;
    let payment_methods =
        draw_weighted(&PaymentMethod::all(), |m| m.probability(), record_count, rng)?;

    let records = customers
        .into_iter()
        .zip(timestamps)
        .zip(amounts)
        .zip(categories)
        .zip(cities)
        .zip(payment_methods)
        .map(
            |(((((customer_id, purchased_at), amount), product_category), city), payment_method)| {
                SalesRecord {
                    customer_id,
                    purchased_at,
                    amount,
                    product_category,
                    city,
                    payment_method,
                }
            },
        )
        .collect();

    Ok(GeneratedDataset {
        customer_pool,
        records,
        window_start,
        window_end,
    })
}

/// `floor(record_count * 0.2)`, at least one id so tiny datasets stay populated
pub fn pool_size(record_count: usize) -> usize {
    (record_count / CUSTOMER_POOL_DIVISOR).max(1)
}

fn customer_pool<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::with_capacity(size);
    let mut pool = Vec::with_capacity(size);
    while pool.len() < size {
        let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
        if seen.insert(id) {
            pool.push(id.to_string());
        }
    }
    pool
}

fn draw_customers<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())].clone())
        .collect()
}

fn draw_timestamps<R: Rng + ?Sized>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    count: usize,
    rng: &mut R,
) -> Vec<NaiveDateTime> {
    let span = (end - start).num_seconds();
    (0..count)
        .map(|_| start + Duration::seconds(rng.gen_range(0..=span)))
        .collect()
}

fn draw_amounts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<f64>> {
    let gamma = Gamma::new(AMOUNT_SHAPE, AMOUNT_SCALE)
        .map_err(|e| anyhow::anyhow!("Invalid amount distribution: {}", e))?;
    Ok((0..count)
        .map(|_| round_to_cents(gamma.sample(rng)).max(MIN_AMOUNT))
        .collect())
}

fn draw_weighted<T: Copy, R: Rng + ?Sized>(
    values: &[T],
    weight: impl Fn(&T) -> f64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    let index = WeightedIndex::new(values.iter().map(weight))
        .map_err(|e| anyhow::anyhow!("Invalid probability vector: {}", e))?;
    Ok((0..count).map(|_| values[index.sample(rng)]).collect())
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
