//! Token wire codec: Base64 over `<hashHex>:<unixTimestamp>`.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, error::TokenSyntaxError};

const SEPARATOR: u8 = b':';

/// Token payload after Base64 decoding and splitting.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedToken {
	/// Hex digest exactly as submitted.
	pub digest: Vec<u8>,
	/// Issue timestamp in Unix seconds.
	pub issued_at: i64,
}
impl Debug for DecodedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DecodedToken")
			.field("digest", &String::from_utf8_lossy(&self.digest))
			.field("issued_at", &self.issued_at)
			.finish()
	}
}

/// Encodes a digest and its issue timestamp into the wire format.
pub fn encode(digest_hex: &str, issued_at: i64) -> String {
	STANDARD.encode(format!("{digest_hex}:{issued_at}"))
}

/// Decodes a token, checking encoding, part count, and timestamp syntax in that order.
pub fn decode(token: &str) -> Result<DecodedToken, TokenSyntaxError> {
	let payload = STANDARD.decode(token.trim()).map_err(|_| TokenSyntaxError::Encoding)?;
	let mut parts = payload.split(|b| *b == SEPARATOR);
	let (Some(digest), Some(issued_at), None) = (parts.next(), parts.next(), parts.next()) else {
		let parts = payload.split(|b| *b == SEPARATOR).count();

		return Err(TokenSyntaxError::PartCount { parts });
	};
	let issued_at = std::str::from_utf8(issued_at)
		.ok()
		.and_then(parse_canonical_timestamp)
		.ok_or(TokenSyntaxError::Timestamp)?;

	Ok(DecodedToken { digest: digest.to_vec(), issued_at })
}

// The digest covers the timestamp as issued, so only the canonical rendering is accepted.
fn parse_canonical_timestamp(text: &str) -> Option<i64> {
	let timestamp = text.parse::<i64>().ok()?;

	(timestamp.to_string() == text).then_some(timestamp)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn encode_produces_padded_standard_base64() {
		assert_eq!(encode("abc", 1000), "YWJjOjEwMDA=");
	}

	#[test]
	fn decode_splits_digest_and_timestamp() {
		let decoded = decode("YWJjOjEwMDA=").expect("Well-formed token should decode.");

		assert_eq!(decoded.digest, b"abc");
		assert_eq!(decoded.issued_at, 1000);
	}

	#[test]
	fn decode_rejects_each_syntax_stage() {
		assert_eq!(decode("not base64!"), Err(TokenSyntaxError::Encoding));
		assert_eq!(decode(""), Err(TokenSyntaxError::PartCount { parts: 1 }));
		assert_eq!(
			decode(&STANDARD.encode("a:b:1000")),
			Err(TokenSyntaxError::PartCount { parts: 3 })
		);
		assert_eq!(decode(&STANDARD.encode("abc:soon")), Err(TokenSyntaxError::Timestamp));
		assert_eq!(decode(&STANDARD.encode("abc:")), Err(TokenSyntaxError::Timestamp));
	}

	#[test]
	fn decode_rejects_non_canonical_timestamps() {
		for timestamp in ["+1000", "01000", "0001000", " 1000", "-0", "1000 "] {
			assert_eq!(
				decode(&STANDARD.encode(format!("abc:{timestamp}"))),
				Err(TokenSyntaxError::Timestamp),
				"Timestamp {timestamp:?} should be rejected."
			);
		}

		assert_eq!(
			decode(&STANDARD.encode("abc:-5")).map(|decoded| decoded.issued_at),
			Ok(-5)
		);
	}

	#[test]
	fn debug_shows_digest_as_text() {
		let decoded = decode("YWJjOjEwMDA=").expect("Well-formed token should decode.");

		assert_eq!(format!("{decoded:?}"), "DecodedToken { digest: \"abc\", issued_at: 1000 }");
	}
}
