//! Catalog types: products, categories, brands.

mod brand;
mod category;
mod product;

pub use brand::Brand;
pub use category::Category;
pub use product::{Product, ProductImage, ProductStatus};
