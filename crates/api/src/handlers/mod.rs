pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod leads;
pub mod properties;
pub mod users;
pub mod wishlist;
