use crate::model::{Operator, OperatorId, PropertyType};

/// Operators that can be applied to values of the given property type.
pub fn compatible_operator_ids(property_type: PropertyType) -> &'static [OperatorId] {
    match property_type {
        PropertyType::String => &[
            OperatorId::Equals,
            OperatorId::Any,
            OperatorId::None,
            OperatorId::In,
            OperatorId::Contains,
        ],
        PropertyType::Number => &[
            OperatorId::Equals,
            OperatorId::GreaterThan,
            OperatorId::LessThan,
            OperatorId::Any,
            OperatorId::None,
            OperatorId::In,
        ],
        PropertyType::Enumerated => &[
            OperatorId::Equals,
            OperatorId::Any,
            OperatorId::None,
            OperatorId::In,
        ],
    }
}

/// Filter the operator list down to those valid for `property_type`,
/// preserving list order. No type means the full list.
pub fn operators_for_type(
    operators: &[Operator],
    property_type: Option<PropertyType>,
) -> Vec<Operator> {
    match property_type {
        Some(property_type) => {
            let allowed = compatible_operator_ids(property_type);
            operators
                .iter()
                .filter(|op| allowed.contains(&op.id))
                .cloned()
                .collect()
        }
        None => operators.to_vec(),
    }
}

pub fn is_operator_valid(
    operators: &[Operator],
    property_type: Option<PropertyType>,
    operator_id: &str,
) -> bool {
    operators_for_type(operators, property_type)
        .iter()
        .any(|op| op.id.as_str() == operator_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(operators: &[Operator]) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = operators.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_operators_for_each_type() {
        let operators = seed::operators();

        assert_eq!(
            ids(&operators_for_type(&operators, Some(PropertyType::String))),
            vec!["any", "contains", "equals", "in", "none"]
        );
        assert_eq!(
            ids(&operators_for_type(&operators, Some(PropertyType::Number))),
            vec!["any", "equals", "greater_than", "in", "less_than", "none"]
        );
        assert_eq!(
            ids(&operators_for_type(&operators, Some(PropertyType::Enumerated))),
            vec!["any", "equals", "in", "none"]
        );
    }

    #[test]
    fn test_no_type_returns_full_list_in_order() {
        let operators = seed::operators();
        assert_eq!(operators_for_type(&operators, None), operators);
    }

    #[test]
    fn test_filtered_list_keeps_dataset_order() {
        let operators = seed::operators();
        let number_ops: Vec<OperatorId> = operators_for_type(&operators, Some(PropertyType::Number))
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(
            number_ops,
            vec![
                OperatorId::Equals,
                OperatorId::GreaterThan,
                OperatorId::LessThan,
                OperatorId::Any,
                OperatorId::None,
                OperatorId::In,
            ]
        );
    }

    #[test]
    fn test_is_operator_valid() {
        let operators = seed::operators();

        assert!(is_operator_valid(&operators, Some(PropertyType::Number), "equals"));
        assert!(is_operator_valid(&operators, Some(PropertyType::String), "contains"));
        assert!(!is_operator_valid(&operators, Some(PropertyType::Number), "contains"));
        assert!(!is_operator_valid(&operators, Some(PropertyType::Enumerated), "greater_than"));
        assert!(!is_operator_valid(&operators, Some(PropertyType::String), "bogus"));
        assert!(is_operator_valid(&operators, None, "less_than"));
    }
}
