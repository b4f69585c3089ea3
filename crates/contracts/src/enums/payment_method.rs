use serde::{Deserialize, Serialize};
use std::fmt;

/// Способы оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Tarjeta de Crédito")]
    CreditCard,
    #[serde(rename = "PSE")]
    Pse,
    #[serde(rename = "Efectivo")]
    Cash,
    #[serde(rename = "Billetera digital")]
    DigitalWallet,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Tarjeta de Crédito",
            PaymentMethod::Pse => "PSE",
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::DigitalWallet => "Billetera digital",
        }
    }

    pub fn probability(&self) -> f64 {
        match self {
            PaymentMethod::CreditCard => 0.50,
            PaymentMethod::Pse => 0.25,
            PaymentMethod::Cash => 0.10,
            PaymentMethod::DigitalWallet => 0.15,
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::CreditCard,
            PaymentMethod::Pse,
            PaymentMethod::Cash,
            PaymentMethod::DigitalWallet,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
