//! Masking strategies: string transformations and their tags.
//!
//! This module provides:
//!
//! - **Text strategies** (`text`): the five masking functions
//!   ([`mask_as_generic`], [`mask_as_password`], [`mask_as_email`],
//!   [`mask_as_phone`], [`mask_as_card_pan`]) and the mask constants.
//!
//! - **Strategy tags** (`strategy`): the [`MaskStrategy`] enum, which maps a
//!   stable tag name to one of the functions above.
//!
//! # Example
//!
//! ```rust
//! use masker::{MaskStrategy, mask_as_card_pan};
//!
//! assert_eq!(mask_as_card_pan("1234 5678 7654 3210"), "1234 56** **** 3210");
//!
//! let strategy: MaskStrategy = "Email".parse().unwrap();
//! assert_eq!(strategy.apply("ann@mail.box"), "***@mail.box");
//! ```

mod spans;
pub mod strategy;
pub mod text;

pub use strategy::{MaskFn, MaskStrategy, ParseStrategyError};
pub use text::{
    MASK_CHAR, PASSWORD_MASK, mask_as_card_pan, mask_as_email, mask_as_generic, mask_as_password,
    mask_as_phone,
};
