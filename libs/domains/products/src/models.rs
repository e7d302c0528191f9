use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Rejects empty or whitespace-only strings.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Reads an explicit `null` as an empty string so it fails validation like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

/// Body for creating or replacing a product.
///
/// Any `id` in the body is ignored; ids come from storage or the request path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    #[schema(min_length = 3, max_length = 100, example = "Cordless Drill")]
    pub name: String,

    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    #[schema(max_length = 500)]
    pub description: Option<String>,

    #[validate(
        required(message = "Price is required"),
        range(exclusive_min = 0.0, message = "Price must be greater than 0")
    )]
    #[schema(example = 129.99)]
    pub price: Option<f64>,

    /// Defaults to 0 when omitted
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(minimum = 0)]
    pub stock: Option<i32>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Category is required"))]
    #[schema(example = "tools")]
    pub category: String,
}

impl ProductInput {
    pub fn stock_or_default(&self) -> i32 {
        self.stock.unwrap_or(0)
    }

    /// Materialize as a stored product under `id`
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            stock: self.stock_or_default(),
            price: self.price.unwrap_or_default(),
            name: self.name,
            description: self.description,
            category: self.category,
        }
    }
}

/// Inclusive price bounds for `/price-range`
#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validation_error_map;

    fn valid() -> ProductInput {
        ProductInput {
            name: "Cordless Drill".to_string(),
            description: Some("18V".to_string()),
            price: Some(129.99),
            stock: Some(4),
            category: "tools".to_string(),
        }
    }

    fn errors_for(input: ProductInput) -> std::collections::BTreeMap<String, String> {
        validation_error_map(&input.validate().unwrap_err())
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let short = ProductInput { name: "ab".into(), ..valid() };
        assert_eq!(
            errors_for(short)["name"],
            "Name must be between 3 and 100 characters"
        );

        let at_max = ProductInput { name: "x".repeat(100), ..valid() };
        assert!(at_max.validate().is_ok());

        let too_long = ProductInput { name: "x".repeat(101), ..valid() };
        assert!(errors_for(too_long).contains_key("name"));
    }

    #[test]
    fn test_whitespace_name_is_required_error() {
        let input = ProductInput { name: "   ".into(), ..valid() };
        assert_eq!(errors_for(input)["name"], "Name is required");
    }

    #[test]
    fn test_price_rules() {
        let missing = ProductInput { price: None, ..valid() };
        assert_eq!(errors_for(missing)["price"], "Price is required");

        let zero = ProductInput { price: Some(0.0), ..valid() };
        assert_eq!(errors_for(zero)["price"], "Price must be greater than 0");

        let negative = ProductInput { price: Some(-5.0), ..valid() };
        assert_eq!(errors_for(negative)["price"], "Price must be greater than 0");
    }

    #[test]
    fn test_stock_optional_but_not_negative() {
        let omitted = ProductInput { stock: None, ..valid() };
        assert!(omitted.validate().is_ok());
        assert_eq!(omitted.stock_or_default(), 0);

        let negative = ProductInput { stock: Some(-1), ..valid() };
        assert_eq!(errors_for(negative)["stock"], "Stock cannot be negative");
    }

    #[test]
    fn test_description_limit() {
        let input = ProductInput { description: Some("d".repeat(501)), ..valid() };
        assert_eq!(
            errors_for(input)["description"],
            "Description cannot exceed 500 characters"
        );
    }

    #[test]
    fn test_blank_category() {
        let input = ProductInput { category: " ".into(), ..valid() };
        assert_eq!(errors_for(input)["category"], "Category is required");
    }

    #[test]
    fn test_body_id_is_ignored() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "id": 999,
            "name": "Hammer",
            "price": 10.0,
            "category": "tools"
        }))
        .unwrap();

        let product = input.into_product(7);
        assert_eq!(product.id, 7);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_null_name_and_category_fail_validation() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "name": null,
            "price": 10.0,
            "category": null
        }))
        .unwrap();

        let errors = errors_for(input);
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["category"], "Category is required");
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange { min: 100.0, max: 200.0 };
        assert!(range.contains(100.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(200.01));
    }
}
