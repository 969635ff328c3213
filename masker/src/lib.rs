//! One-way masking of personal data for logs, audit trails and exports.
//!
//! This crate separates:
//! - **Strategies**: how a string is masked (`Generic`, `Password`, `Email`,
//!   `Phone`, `CardPAN`), exposed both as plain functions and as
//!   [`MaskStrategy`] tags.
//! - **Traversal**: which fields of a structured value get masked, declared
//!   with `#[derive(Mask)]` and `#[mask(Strategy)]` field annotations.
//!
//! ```rust
//! use masker::{Mask, mask_as_email, mask_as_phone};
//!
//! assert_eq!(mask_as_email("user@mail.box"), "u***@mail.box");
//! assert_eq!(mask_as_phone("+1(234)567-89-01"), "+1(234)***-89-01");
//!
//! #[derive(Clone, Mask)]
//! struct Signup {
//!     #[mask(Email)]
//!     email: String,
//!     #[mask(Password)]
//!     password: String,
//!     plan: String,
//! }
//!
//! let signup = Signup {
//!     email: "ann@mail.box".into(),
//!     password: "hunter2".into(),
//!     plan: "pro".into(),
//! };
//! let masked = signup.clone_masked();
//! assert_eq!(masked.email, "***@mail.box");
//! assert_eq!(masked.password, "********");
//! assert_eq!(masked.plan, "pro");
//! ```
//!
//! What this crate does not do:
//! - encrypt, hash, tokenize or otherwise reversibly transform data
//! - validate that an input really is an email, phone or card number
//! - perform I/O or logging on its own (see the `tracing` and `slog` features)
//!
//! The `Mask` derive macro lives in `masker-derive` and is re-exported from
//! this crate behind the default `derive` feature.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use masker_derive::Mask;

#[allow(unused_extern_crates)]
extern crate self as masker;

// Module declarations
pub mod mask;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from mask module
pub use mask::{
    MASK_CHAR, MaskFn, MaskStrategy, PASSWORD_MASK, ParseStrategyError, mask_as_card_pan,
    mask_as_email, mask_as_generic, mask_as_password, mask_as_phone,
};
// Re-exports from masking module
pub use masking::{Mask, MaskLeaf, MaskedDisplay};
#[cfg(feature = "json")]
pub use masking::{MaskedJson, MaskedJsonExt};
