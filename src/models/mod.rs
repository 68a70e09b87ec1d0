pub mod search;
pub mod shop;
