pub mod admin_repo;
pub mod contact_repo;
pub mod product_repo;

pub use admin_repo::AdminRepo;
pub use contact_repo::ContactRepo;
pub use product_repo::ProductRepo;
