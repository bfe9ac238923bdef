//! One service per backend resource. Services share the authenticated
//! [`HttpClient`](yadwy_http::HttpClient) and hold no other state.

pub mod auth;
pub mod categories;
pub mod orders;
pub mod products;
pub mod provinces;

pub use auth::AuthService;
pub use categories::CategoriesService;
pub use orders::OrdersService;
pub use products::ProductsService;
pub use provinces::ProvincesService;
