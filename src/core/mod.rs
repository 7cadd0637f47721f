// src/core/mod.rs
pub mod compare;
pub mod hasher;
pub mod kdf;
pub mod legacy;
pub mod salt;

pub use compare::*;
pub use hasher::*;
pub use kdf::*;
pub use legacy::*;
pub use salt::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
