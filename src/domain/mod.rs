pub mod category;
pub mod charm;
pub mod discount;
pub mod product;
