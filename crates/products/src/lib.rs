//! Products domain module.
//!
//! Every product is built through the product schema: either from a caller's
//! candidate record ([`create_product`]) or from random data for an
//! authorized user ([`create_random_product`]). Pure domain logic, no IO.

pub mod factory;
pub mod product;
pub mod schema;

pub use factory::{create_random_product, ProductFactory, NOT_ALLOWED_MESSAGE};
pub use product::{NewProduct, Price, Product, ProductId};
pub use schema::{create_product, create_product_from, product_schema, ProductInput};
