use actix_web::web;

use crate::handlers::{
    auth_handler, catalog_handler, health, library_handler, profile_handler,
};

/// Register all HTTP routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Auth
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(auth_handler::me)
        // Profiles
        .service(profile_handler::create_profile)
        .service(profile_handler::list_profiles)
        // Catalog
        .service(catalog_handler::popular)
        .service(catalog_handler::trending)
        .service(catalog_handler::search)
        .service(catalog_handler::details)
        // Watchlist and history
        .service(library_handler::add_to_watchlist)
        .service(library_handler::get_watchlist)
        .service(library_handler::remove_from_watchlist)
        .service(library_handler::update_watch_history)
        .service(library_handler::get_watch_history)
        // Health
        .service(health::handle_health_check);
}
