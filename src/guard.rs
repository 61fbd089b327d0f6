//! The guard facade: configuration plus token generation and validation.

// std
use std::fmt::Write;
// self
use crate::{
	_prelude::*,
	config::{GuardConfig, GuardOptions},
	digest::HashAlgorithm,
	error::{ConfigError, ValidationError},
	key::GuardKey,
	obs::{self, GuardOperation, GuardOutcome, OperationSpan},
	strategy::{DEFAULT_TOKEN_GENERATOR, DEFAULT_TOKEN_VALIDATOR, TokenGenerator, TokenValidator},
	submission::Submission,
};

/// Issues and checks anti-forgery tokens for web forms.
///
/// Tokens are stateless: validity depends only on the configuration and the token string,
/// so any process sharing the key can validate tokens issued by another. The flip side is
/// that a token can be replayed until it expires; pair it with session state if that
/// matters.
///
/// Setters take `&mut self`. Configure a guard once at startup and share it read-only, or
/// clone it per request; [`Guard::is_valid`] records the last failure and therefore needs
/// exclusive access.
#[derive(Clone, Default)]
pub struct Guard {
	config: GuardConfig,
	generator: Option<Arc<dyn TokenGenerator>>,
	validator: Option<Arc<dyn TokenValidator>>,
	last_error: Option<ValidationError>,
}
impl Guard {
	/// Creates a guard with default settings and an empty key.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a guard from a checked configuration.
	pub fn from_config(config: GuardConfig) -> Result<Self, ConfigError> {
		config.check()?;

		Ok(Self { config, ..Default::default() })
	}

	/// Creates a guard from options layered over the defaults.
	pub fn from_options(options: GuardOptions) -> Result<Self, ConfigError> {
		Self::from_config(options.into())
	}

	/// Read-only view of the current configuration.
	pub fn config(&self) -> &GuardConfig {
		&self.config
	}

	/// Applies the options that are set, leaving the others untouched.
	pub fn configure(&mut self, options: GuardOptions) -> &mut Self {
		self.config.apply(options);

		self
	}

	/// Sets the secret key.
	pub fn set_key(&mut self, key: impl Into<GuardKey>) -> &mut Self {
		self.config.key = key.into();

		self
	}

	/// Sets the binding userdata; an empty string disables binding.
	pub fn set_userdata(&mut self, userdata: impl Into<String>) -> &mut Self {
		self.config.userdata = userdata.into();

		self
	}

	/// Sets the maximum token age in seconds. Zero limits tokens to the second they were issued.
	pub fn set_timeout(&mut self, seconds: u64) -> &mut Self {
		self.config.timeout_seconds = seconds;

		self
	}

	/// Sets the form field name.
	pub fn set_field_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.config.field_name = name.into();

		self
	}

	/// Sets the hash algorithm.
	pub fn set_hash_algorithm(&mut self, algorithm: HashAlgorithm) -> &mut Self {
		self.config.hash_algorithm = algorithm;

		self
	}

	/// Pins the current time, in Unix seconds, for deterministic runs.
	pub fn set_now(&mut self, timestamp: i64) -> &mut Self {
		self.config.now = Some(timestamp);

		self
	}

	/// Returns to reading the wall clock.
	pub fn clear_now(&mut self) -> &mut Self {
		self.config.now = None;

		self
	}

	/// Replaces the token generator.
	pub fn set_generator(&mut self, generator: impl 'static + TokenGenerator) -> &mut Self {
		self.generator = Some(Arc::new(generator));

		self
	}

	/// Replaces the token validator.
	pub fn set_validator(&mut self, validator: impl 'static + TokenValidator) -> &mut Self {
		self.validator = Some(Arc::new(validator));

		self
	}

	/// Restores the built-in generator.
	pub fn use_default_generator(&mut self) -> &mut Self {
		self.generator = None;

		self
	}

	/// Restores the built-in validator.
	pub fn use_default_validator(&mut self) -> &mut Self {
		self.validator = None;

		self
	}

	/// Generates a token with the configured (or default) generator.
	pub fn generate_token(&self) -> String {
		let _span = OperationSpan::new(GuardOperation::Generate, &self.config.field_name).entered();
		let token = self.generator().generate(&self.config);

		obs::record_operation(GuardOperation::Generate, GuardOutcome::Success);

		token
	}

	/// Generates a token paired with the configured field name.
	pub fn field(&self) -> FormField {
		FormField { name: self.config.field_name.clone(), value: self.generate_token() }
	}

	/// Renders a hidden `<input>` carrying a fresh token.
	pub fn render_field(&self) -> String {
		self.field().to_string()
	}

	/// Validates a raw token or the token field of submitted form data.
	pub fn validate<'a>(
		&self,
		submission: impl Into<Submission<'a>>,
	) -> Result<(), ValidationError> {
		let field = &self.config.field_name;
		let _span = OperationSpan::new(GuardOperation::Validate, field).entered();
		let submission: Submission<'a> = submission.into();
		let result = match submission.token(field) {
			Some(token) => self.validator().validate(token, &self.config),
			None => Err(ValidationError::MissingField { field: field.clone() }),
		};

		if let Err(e) = &result {
			obs::log_rejection(e);
		}

		obs::record_operation(GuardOperation::Validate, GuardOutcome::of(&result));

		result
	}

	/// Returns `true` when the submission validates; otherwise stores the failure.
	///
	/// The stored error is not cleared on success, so [`Guard::last_error`] is only
	/// meaningful right after this returns `false`.
	pub fn is_valid<'a>(&mut self, submission: impl Into<Submission<'a>>) -> bool {
		match self.validate(submission) {
			Ok(()) => true,
			Err(e) => {
				self.last_error = Some(e);

				false
			},
		}
	}

	/// Most recent failure recorded by [`Guard::is_valid`].
	pub fn last_error(&self) -> Option<&ValidationError> {
		self.last_error.as_ref()
	}

	fn generator(&self) -> &dyn TokenGenerator {
		match &self.generator {
			Some(generator) => generator.as_ref(),
			None => &DEFAULT_TOKEN_GENERATOR,
		}
	}

	fn validator(&self) -> &dyn TokenValidator {
		match &self.validator {
			Some(validator) => validator.as_ref(),
			None => &DEFAULT_TOKEN_VALIDATOR,
		}
	}
}
impl Debug for Guard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Guard")
			.field("config", &self.config)
			.field("custom_generator", &self.generator.is_some())
			.field("custom_validator", &self.validator.is_some())
			.field("last_error", &self.last_error)
			.finish()
	}
}

/// Field name and token pair ready to embed in a form.
///
/// `Display` renders a hidden `<input>` element with HTML-escaped attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
	/// Form field name.
	pub name: String,
	/// Token value.
	pub value: String,
}
impl Display for FormField {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<input type=\"hidden\" name=\"")?;
		write_escaped(f, &self.name)?;
		f.write_str("\" value=\"")?;
		write_escaped(f, &self.value)?;
		f.write_str("\" />\n")
	}
}

fn write_escaped(f: &mut Formatter, value: &str) -> FmtResult {
	for c in value.chars() {
		match c {
			'&' => f.write_str("&amp;")?,
			'<' => f.write_str("&lt;")?,
			'>' => f.write_str("&gt;")?,
			'"' => f.write_str("&quot;")?,
			'\'' => f.write_str("&#39;")?,
			c => f.write_char(c)?,
		}
	}

	Ok(())
}
