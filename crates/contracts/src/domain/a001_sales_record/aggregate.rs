use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::enums::{City, DayOfWeek, PaymentMethod, ProductCategory};

/// Колонки CSV в порядке записи
pub const CSV_COLUMNS: [&str; 6] = [
    "id_cliente",
    "fecha_compra",
    "monto",
    "categoria_producto",
    "ciudad",
    "metodo_pago",
];

/// Одна продажа (строка файла `raw_sales_data.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Идентификатор клиента (UUID из пула постоянных клиентов)
    #[serde(rename = "id_cliente")]
    pub customer_id: String,
    /// Дата и время покупки, с точностью до секунды
    #[serde(rename = "fecha_compra", with = "super::timestamp_format")]
    pub purchased_at: NaiveDateTime,
    /// Сумма покупки, два знака после запятой
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Категория товара
    #[serde(rename = "categoria_producto")]
    pub product_category: ProductCategory,
    /// Город покупки
    #[serde(rename = "ciudad")]
    pub city: City,
    /// Способ оплаты
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
}

/// Строка загруженного датасета: запись + вычисляемые календарные поля.
///
/// Вычисляемые поля не хранятся в CSV, они заполняются при загрузке.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    #[serde(flatten)]
    pub record: SalesRecord,
    /// Час покупки (0..=23)
    #[serde(rename = "hora_dia")]
    pub hour_of_day: u32,
    #[serde(rename = "dia_semana")]
    pub day_of_week: DayOfWeek,
}

impl SalesRow {
    pub fn from_record(record: SalesRecord) -> Self {
        let hour_of_day = record.purchased_at.hour();
        let day_of_week = DayOfWeek::from(record.purchased_at.weekday());
        Self {
            record,
            hour_of_day,
            day_of_week,
        }
    }
}

impl From<SalesRecord> for SalesRow {
    fn from(record: SalesRecord) -> Self {
        SalesRow::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> SalesRecord {
        SalesRecord {
            customer_id: "c-1".to_string(),
            // 2024-03-10 is a Sunday
            purchased_at: NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(21, 5, 9)
                .unwrap(),
            amount: 310.45,
            product_category: ProductCategory::Toys,
            city: City::Cartagena,
            payment_method: PaymentMethod::Pse,
        }
    }

    #[test]
    fn test_derived_fields() {
        let row = SalesRow::from_record(sample_record());
        assert_eq!(row.hour_of_day, 21);
        assert_eq!(row.day_of_week, DayOfWeek::Sunday);
    }

    #[test]
    fn test_row_serializes_flat() {
        let row = SalesRow::from(sample_record());
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id_cliente"], "c-1");
        assert_eq!(value["fecha_compra"], "2024-03-10 21:05:09");
        assert_eq!(value["monto"], 310.45);
        assert_eq!(value["categoria_producto"], "Juguetes");
        assert_eq!(value["ciudad"], "Cartagena");
        assert_eq!(value["metodo_pago"], "PSE");
        assert_eq!(value["hora_dia"], 21);
        assert_eq!(value["dia_semana"], "Sunday");
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let json = r#"{
            "id_cliente": "c-1",
            "fecha_compra": "10/03/2024 21:05",
            "monto": 1.0,
            "categoria_producto": "Ropa",
            "ciudad": "Cali",
            "metodo_pago": "Efectivo"
        }"#;
        let parsed: Result<SalesRecord, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
