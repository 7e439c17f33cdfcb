pub mod item;
pub mod list;
pub mod product;
