use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stocked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by storage on creation
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Producto 1")]
    pub name: String,
    #[schema(example = 10)]
    pub quantity: i32,
    #[schema(example = 99.99)]
    pub price: f64,
}

impl Product {
    /// Entity for `id` carrying the submitted fields.
    pub fn from_input(id: i64, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
        }
    }
}

/// Body of create and update requests.
///
/// `quantity` and `price` default to zero when omitted. An `id` in the body
/// is ignored: creation assigns one, updates take it from the path. The
/// `name` width is enforced by the column, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Producto 1", max_length = 255)]
    pub name: String,
    #[serde(default)]
    #[schema(example = 10)]
    pub quantity: i32,
    #[serde(default)]
    #[schema(example = 99.99)]
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let input: NewProduct = serde_json::from_value(json!({ "name": "Widget" })).unwrap();
        assert_eq!(input, NewProduct::new("Widget", 0, 0.0));
    }

    #[test]
    fn test_body_id_is_ignored() {
        let input: NewProduct =
            serde_json::from_value(json!({ "id": 42, "name": "Widget", "quantity": 3, "price": 1.5 }))
                .unwrap();
        assert_eq!(Product::from_input(7, input).id, 7);
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_value::<NewProduct>(json!({ "quantity": 1 })).is_err());
    }

    #[test]
    fn test_fractional_quantity_is_rejected() {
        assert!(serde_json::from_value::<NewProduct>(json!({ "name": "x", "quantity": 1.5 })).is_err());
    }

    #[test]
    fn test_overlong_name_still_decodes() {
        let input: NewProduct = serde_json::from_value(json!({ "name": "a".repeat(256) })).unwrap();
        assert_eq!(input.name.len(), 256);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::from_input(1, NewProduct::new("Producto 1", 10, 99.99));
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "id": 1, "name": "Producto 1", "quantity": 10, "price": 99.99 })
        );
    }
}
