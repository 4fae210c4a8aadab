//! Data models
//!
//! Row structs map the database shape; the normalized [`Product`] is the
//! flat UI-facing view produced after joining the lookup tables.

pub mod brand;
pub mod category;
pub mod filter;
pub mod product;

pub use brand::Brand;
pub use category::Category;
pub use filter::{ProductFilter, SortConfig, SortDirection, StockStatus};
pub use product::{
    Product, ProductCreate, ProductImage, ProductRow, ProductStats, ProductUpdate,
};
