//! Wire types for the matriculas REST API.
//!
//! This crate contains the serde-serializable types exchanged with the
//! authentication endpoints (`/auth/*`) and the two resource families
//! (`/matriculas/facultades`, `/matriculas/carreras`).
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with the API: camelCase field names exactly as the server emits them
//! * Sparse where the API is sparse: patch records omit absent fields instead
//!   of sending `null`
//!
//! Session handling and request construction live in `matr-rs`.

pub mod auth;
pub mod carrera;
pub mod error;
pub mod facultad;

pub use auth::*;
pub use carrera::*;
pub use error::*;
pub use facultad::*;
