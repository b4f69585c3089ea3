use serde::{Deserialize, Serialize};
use std::fmt;

/// Города продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Bogotá")]
    Bogota,
    #[serde(rename = "Medellín")]
    Medellin,
    #[serde(rename = "Cali")]
    Cali,
    #[serde(rename = "Barranquilla")]
    Barranquilla,
    #[serde(rename = "Cartagena")]
    Cartagena,
}

impl City {
    pub fn code(&self) -> &'static str {
        match self {
            City::Bogota => "Bogotá",
            City::Medellin => "Medellín",
            City::Cali => "Cali",
            City::Barranquilla => "Barranquilla",
            City::Cartagena => "Cartagena",
        }
    }

    /// Крупные рынки получают больший вес
    pub fn probability(&self) -> f64 {
        match self {
            City::Bogota => 0.40,
            City::Medellin => 0.25,
            City::Cali => 0.15,
            City::Barranquilla => 0.10,
            City::Cartagena => 0.10,
        }
    }

    pub fn all() -> Vec<City> {
        vec![
            City::Bogota,
            City::Medellin,
            City::Cali,
            City::Barranquilla,
            City::Cartagena,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
