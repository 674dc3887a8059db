pub mod numeric;
pub mod operator_table;
pub mod product_filter;
pub mod query_builder;
pub mod request_validation;

pub use operator_table::*;
pub use product_filter::*;
pub use query_builder::*;
pub use request_validation::*;
