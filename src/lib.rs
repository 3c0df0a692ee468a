//! Field injection for WG-Gesucht listing pages.
//!
//! A page is parsed into a [`dom::Document`], then a [`injector::Pipeline`]
//! fills an [`models::Offer`] or [`models::Request`] from it field by field.

pub mod dom;
pub mod injector;
pub mod models;
pub mod sources;
