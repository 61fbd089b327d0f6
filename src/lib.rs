//! Stateless anti-forgery (XSRF) tokens for web forms.
//!
//! A [`Guard`] embeds a keyed-hash token in every rendered form and checks it on submission.
//! Tokens carry their own issue time, so validation needs nothing beyond the shared key and
//! settings: no token registry, no shared storage.
//!
//! ```
//! use xsrf_guard::Guard;
//!
//! let mut guard = Guard::new();
//!
//! guard.set_key("topsecret").set_timeout(3).set_now(1000);
//!
//! let token = guard.generate_token();
//!
//! assert!(guard.is_valid(token.as_str()));
//!
//! guard.set_now(1004);
//!
//! assert!(!guard.is_valid(token.as_str()));
//! assert_eq!(guard.last_error().map(|e| e.kind()), Some("expired"));
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod digest;
pub mod error;
pub mod guard;
pub mod key;
pub mod obs;
pub mod strategy;
pub mod submission;
pub mod token;

pub use config::{GuardConfig, GuardOptions};
pub use digest::HashAlgorithm;
pub use error::{ConfigError, Error, Result, TokenSyntaxError, ValidationError};
pub use guard::{FormField, Guard};
pub use key::GuardKey;
pub use strategy::{
	DEFAULT_TOKEN_GENERATOR, DEFAULT_TOKEN_VALIDATOR, DefaultTokenGenerator, DefaultTokenValidator,
	TokenGenerator, TokenValidator,
};
pub use submission::{FormData, FormFields, Submission};

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		hash::Hash,
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::Result;
}

#[cfg(test)] use color_eyre as _;
