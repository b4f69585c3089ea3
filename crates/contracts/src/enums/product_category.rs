use serde::{Deserialize, Serialize};
use std::fmt;

/// Категории товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Electrónica")]
    Electronics,
    #[serde(rename = "Ropa")]
    Clothing,
    #[serde(rename = "Hogar")]
    Home,
    #[serde(rename = "Alimentos")]
    Food,
    #[serde(rename = "Juguetes")]
    Toys,
    #[serde(rename = "Libros")]
    Books,
}

impl ProductCategory {
    /// Значение в CSV и в API
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electrónica",
            ProductCategory::Clothing => "Ropa",
            ProductCategory::Home => "Hogar",
            ProductCategory::Food => "Alimentos",
            ProductCategory::Toys => "Juguetes",
            ProductCategory::Books => "Libros",
        }
    }

    /// Вероятность категории при генерации датасета
    pub fn probability(&self) -> f64 {
        match self {
            ProductCategory::Electronics => 0.25,
            ProductCategory::Clothing => 0.20,
            ProductCategory::Home => 0.20,
            ProductCategory::Food => 0.15,
            ProductCategory::Toys => 0.10,
            ProductCategory::Books => 0.10,
        }
    }

    /// Все категории в каноническом порядке
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronics,
            ProductCategory::Clothing,
            ProductCategory::Home,
            ProductCategory::Food,
            ProductCategory::Toys,
            ProductCategory::Books,
        ]
    }

    /// Парсинг из строки (точное совпадение)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
