//! Domain model for the Chat domain

pub mod entities;
