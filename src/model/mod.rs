pub mod common;
pub mod operator;
pub mod product;
pub mod property;

pub use common::*;
pub use operator::*;
pub use product::*;
pub use property::*;
