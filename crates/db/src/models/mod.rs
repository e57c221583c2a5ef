pub mod admin;
pub mod contact;
pub mod product;
