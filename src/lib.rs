//! Coffee Recipe Personalization
//!
//! This library provides the core functionality for brewmate: a canonical
//! recipe catalog, a pure personalization engine that matches recipes against
//! the user's inventory and taste preferences, and a consumption ledger for
//! daily caffeine tracking.

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod storage;
