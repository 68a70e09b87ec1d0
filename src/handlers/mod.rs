pub mod master;
pub mod search;
pub mod shop;
