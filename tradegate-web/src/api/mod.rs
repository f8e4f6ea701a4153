pub(crate) mod admin;
pub(crate) mod public;

pub(crate) use admin::configure_admin_routes;
pub(crate) use public::configure_public_routes;
