//! Operation handlers for the gateway event router.

pub mod urls;

pub use urls::{
    create_url_handler, delete_url_handler, list_urls_handler, preflight_handler,
    redirect_handler, route_not_found_handler, update_url_handler,
};
