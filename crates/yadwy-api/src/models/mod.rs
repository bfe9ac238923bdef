//! Request and response bodies of the seller API

pub mod auth;
pub mod categories;
pub mod orders;
pub mod pagination;
pub mod products;
pub mod provinces;
pub mod status;

pub use auth::{LoginRequest, LoginResponse, RegisterSellerRequest, RegisterSellerResponse};
pub use categories::{Category, CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest};
pub use orders::{
    OrderResponse, OrderSource, PaymentMethod, PlaceOrderItem, PlaceOrderRequest, SellerOrder,
    SellerOrderItem, ShippingAddress, UpdateOrderStatusRequest,
};
pub use pagination::{Listing, ListingKind, Page, PageParams};
pub use products::{CreateProductRequest, Product, ProductListParams};
pub use provinces::{LocalizedName, Province};
pub use status::{StatusKind, Tone};
