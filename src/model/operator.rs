use serde::{Deserialize, Serialize};

use crate::model::OperatorId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub text: String,
    pub id: OperatorId,
}

impl Operator {
    pub fn new(id: OperatorId, text: &str) -> Self {
        Self {
            text: text.to_string(),
            id,
        }
    }
}
