//! Listings core for the Industrial Realty Hub site: property catalog
//! fetched from the hosted table store, diacritic-insensitive search, and
//! the admin write workflows for properties and their image assets.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod content;
pub mod models;
pub mod search;
pub mod store;
