pub mod api;
pub mod auth;
pub mod config;
pub mod customer;
pub mod error;
pub mod handlers;
pub mod nav;
pub mod room;
pub mod storage;
pub mod table;
pub mod views;
