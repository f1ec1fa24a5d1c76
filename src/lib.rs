//! proppath - resolve and navigate compound property-path expressions.
//!
//! Expressions such as `address.city`, `items[3]`, `attributes(color)` or
//! `accounts[2].owner(name)` are decomposed one segment at a time by the
//! [`resolver`], and walked over structured values by the [`navigator`].

pub mod config;
pub mod file;
pub mod navigator;
pub mod resolver;
