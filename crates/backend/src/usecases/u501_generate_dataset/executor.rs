use anyhow::Result;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::PathBuf;

use super::generator::generate_sales_records;
use crate::domain::a001_sales_record::repository;
use crate::shared::config::{get_dataset_path, Config};

/// Параметры генерации датасета
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub record_count: usize,
    pub output_path: PathBuf,
    /// Фиксированный seed для воспроизводимости; иначе энтропия ОС
    pub seed: Option<u64>,
}

impl GenerateRequest {
    pub fn from_config(config: &Config) -> Self {
        Self {
            record_count: config.generator.record_count,
            output_path: get_dataset_path(config),
            seed: config.generator.seed,
        }
    }
}

/// Итог генерации
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub rows_written: usize,
    pub customer_pool_size: usize,
    /// Сколько клиентов из пула реально встретилось в датасете
    pub distinct_customers: usize,
    pub output_path: PathBuf,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
}

/// Сгенерировать датасет и перезаписать файл.
///
/// Ошибка записи (например, нет директории) не перехватывается.
pub fn run(request: &GenerateRequest, now: NaiveDateTime) -> Result<GenerationSummary> {
    if request.record_count == 0 {
        anyhow::bail!("record_count must be a positive integer");
    }

    let mut rng = match request.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let dataset = generate_sales_records(request.record_count, now, &mut rng)?;
    tracing::debug!(
        "Generated {} records, window {} .. {}",
        dataset.records.len(),
        dataset.window_start,
        dataset.window_end
    );

    repository::write_records(&request.output_path, &dataset.records)?;

    let distinct_customers = dataset
        .records
        .iter()
        .map(|r| r.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(GenerationSummary {
        rows_written: dataset.records.len(),
        customer_pool_size: dataset.customer_pool.len(),
        distinct_customers,
        output_path: request.output_path.clone(),
        window_start: dataset.window_start,
        window_end: dataset.window_end,
    })
}
