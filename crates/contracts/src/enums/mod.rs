pub mod city;
pub mod day_of_week;
pub mod payment_method;
pub mod product_category;

pub use city::City;
pub use day_of_week::DayOfWeek;
pub use payment_method::PaymentMethod;
pub use product_category::ProductCategory;

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(weights: impl Iterator<Item = f64>) -> f64 {
        weights.sum()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let eps = 1e-9;
        assert!((sum(PaymentMethod::all().iter().map(|m| m.probability())) - 1.0).abs() < eps);
        assert!((sum(City::all().iter().map(|c| c.probability())) - 1.0).abs() < eps);
        assert!(
            (sum(ProductCategory::all().iter().map(|c| c.probability())) - 1.0).abs() < eps
        );
    }

    #[test]
    fn test_from_code_roundtrip() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
        for city in City::all() {
            assert_eq!(City::from_code(city.code()), Some(city));
        }
        assert_eq!(ProductCategory::from_code("Electrónica"), Some(ProductCategory::Electronics));
        assert_eq!(ProductCategory::from_code("electronica"), None);
        assert_eq!(City::from_code("Bogota"), None);
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"Tarjeta de Crédito\"");
        let city: City = serde_json::from_str("\"Medellín\"").unwrap();
        assert_eq!(city, City::Medellin);
    }
}
