//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, adaptive work factor)
//! - Cookie building and extraction

pub mod cookie;
pub mod password;
