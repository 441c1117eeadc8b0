pub mod auth_service;
pub mod catalog_service;
pub mod library_service;
pub mod profile_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use library_service::LibraryService;
pub use profile_service::ProfileService;
