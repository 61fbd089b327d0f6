//! Submitted form data handed to the guard for validation.
//!
//! The guard never reads HTTP requests itself; callers pass either the raw token or any
//! mapping-like view of the submitted fields.

// std
use std::borrow::Borrow;
// self
use crate::_prelude::*;

/// Read-only lookup over submitted form fields.
pub trait FormData {
	/// Returns the value submitted under `name`, if any.
	fn field(&self, name: &str) -> Option<&str>;
}
impl<K, V, S> FormData for HashMap<K, V, S>
where
	K: Borrow<str> + Eq + Hash,
	V: AsRef<str>,
	S: std::hash::BuildHasher,
{
	fn field(&self, name: &str) -> Option<&str> {
		self.get(name).map(AsRef::as_ref)
	}
}
impl<K, V> FormData for BTreeMap<K, V>
where
	K: Borrow<str> + Ord,
	V: AsRef<str>,
{
	fn field(&self, name: &str) -> Option<&str> {
		self.get(name).map(AsRef::as_ref)
	}
}
impl<K, V> FormData for [(K, V)]
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	fn field(&self, name: &str) -> Option<&str> {
		self.iter().rev().find(|(k, _)| k.as_ref() == name).map(|(_, v)| v.as_ref())
	}
}
impl<K, V> FormData for Vec<(K, V)>
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	fn field(&self, name: &str) -> Option<&str> {
		self.as_slice().field(name)
	}
}

/// Owned list of fields decoded from an `application/x-www-form-urlencoded` body.
///
/// Repeated names resolve to the last occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);
impl FormFields {
	/// Decodes a URL-encoded request body.
	pub fn parse(body: impl AsRef<[u8]>) -> Self {
		Self(url::form_urlencoded::parse(body.as_ref()).into_owned().collect())
	}

	/// Returns the decoded pairs in submission order.
	pub fn pairs(&self) -> &[(String, String)] {
		&self.0
	}
}
impl FormData for FormFields {
	fn field(&self, name: &str) -> Option<&str> {
		self.0.field(name)
	}
}
impl FromIterator<(String, String)> for FormFields {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		Self(iter.into_iter().collect())
	}
}

/// Candidate passed to [`Guard::validate`](crate::guard::Guard::validate).
#[derive(Clone, Copy)]
pub enum Submission<'a> {
	/// The raw token string.
	Token(&'a str),
	/// Submitted fields; the token is read from the configured field name.
	Form(&'a dyn FormData),
}
impl<'a> Submission<'a> {
	/// Wraps any form data view.
	pub fn form(data: &'a dyn FormData) -> Self {
		Self::Form(data)
	}

	/// Resolves the token, reading `field_name` for form submissions.
	pub fn token(&self, field_name: &str) -> Option<&'a str> {
		match *self {
			Self::Token(token) => Some(token),
			Self::Form(data) => data.field(field_name),
		}
	}
}
impl Debug for Submission<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Token(_) => f.write_str("Submission::Token(..)"),
			Self::Form(_) => f.write_str("Submission::Form(..)"),
		}
	}
}
impl<'a> From<&'a str> for Submission<'a> {
	fn from(token: &'a str) -> Self {
		Self::Token(token)
	}
}
impl<'a> From<&'a String> for Submission<'a> {
	fn from(token: &'a String) -> Self {
		Self::Token(token)
	}
}
impl<'a> From<&'a FormFields> for Submission<'a> {
	fn from(data: &'a FormFields) -> Self {
		Self::Form(data)
	}
}
impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for Submission<'a>
where
	K: 'a + Borrow<str> + Eq + Hash,
	V: 'a + AsRef<str>,
	S: 'a + std::hash::BuildHasher,
{
	fn from(data: &'a HashMap<K, V, S>) -> Self {
		Self::Form(data)
	}
}
impl<'a, K, V> From<&'a BTreeMap<K, V>> for Submission<'a>
where
	K: 'a + Borrow<str> + Ord,
	V: 'a + AsRef<str>,
{
	fn from(data: &'a BTreeMap<K, V>) -> Self {
		Self::Form(data)
	}
}
impl<'a, K, V> From<&'a Vec<(K, V)>> for Submission<'a>
where
	K: 'a + AsRef<str>,
	V: 'a + AsRef<str>,
{
	fn from(data: &'a Vec<(K, V)>) -> Self {
		Self::Form(data)
	}
}
