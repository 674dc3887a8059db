use crate::model::{Operator, OperatorId, Product, Property, PropertyType, StoredValue};
use crate::store::{Catalog, CatalogError};

pub fn properties() -> Vec<Property> {
    vec![
        Property::new(0, "Product Name", PropertyType::String),
        Property::new(1, "color", PropertyType::String),
        Property::new(2, "weight (oz)", PropertyType::Number),
        Property::enumerated(3, "category", &["tools", "electronics", "kitchenware"]),
        Property::enumerated(4, "wireless", &["true", "false"]),
    ]
}

pub fn operators() -> Vec<Operator> {
    vec![
        Operator::new(OperatorId::Equals, "Equals"),
        Operator::new(OperatorId::GreaterThan, "Is greater than"),
        Operator::new(OperatorId::LessThan, "Is less than"),
        Operator::new(OperatorId::Any, "Has any value"),
        Operator::new(OperatorId::None, "Has no value"),
        Operator::new(OperatorId::In, "Is any of"),
        Operator::new(OperatorId::Contains, "Contains"),
    ]
}

/// Helper to build a product from (property id, value) pairs
fn product(id: i64, values: Vec<(i64, StoredValue)>) -> Product {
    Product::new(id, values)
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            0,
            vec![
                (0, "Headphones".into()),
                (1, "black".into()),
                (2, 5i64.into()),
                (3, "electronics".into()),
                (4, "false".into()),
            ],
        ),
        product(
            1,
            vec![
                (0, "Cell Phone".into()),
                (1, "black".into()),
                (2, 3i64.into()),
                (3, "electronics".into()),
                (4, "true".into()),
            ],
        ),
        product(
            2,
            vec![
                (0, "Keyboard".into()),
                (1, "grey".into()),
                (2, 5i64.into()),
                (3, "electronics".into()),
                (4, "false".into()),
            ],
        ),
        product(
            3,
            vec![
                (0, "Cup".into()),
                (1, "white".into()),
                (2, 3i64.into()),
                (3, "kitchenware".into()),
            ],
        ),
        product(
            4,
            vec![
                (0, "Key".into()),
                (1, "silver".into()),
                (2, 1i64.into()),
                (3, "tools".into()),
            ],
        ),
        product(
            5,
            vec![
                (0, "Hammer".into()),
                (1, "brown".into()),
                (2, 19i64.into()),
                (3, "tools".into()),
            ],
        ),
    ]
}

/// The built-in demonstration catalog.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(properties(), operators(), products())
}
