//! Hash algorithm identifiers and the digest over token material.

// crates.io
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
// self
use crate::{_prelude::*, error::ConfigError};

/// Hash function used to derive token digests.
///
/// Identifiers match the names PHP's `hash()` accepts, so tokens stay interchangeable with
/// deployments of the original format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
	/// SHA-224.
	Sha224,
	#[default]
	/// SHA-256.
	Sha256,
	/// SHA-384.
	Sha384,
	/// SHA-512.
	Sha512,
	/// SHA-512 truncated to 224 bits.
	Sha512_224,
	/// SHA-512 truncated to 256 bits.
	Sha512_256,
}
impl HashAlgorithm {
	/// Every supported algorithm, in declaration order.
	pub const ALL: [Self; 6] = [
		Self::Sha224,
		Self::Sha256,
		Self::Sha384,
		Self::Sha512,
		Self::Sha512_224,
		Self::Sha512_256,
	];

	/// Returns the canonical identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
			Self::Sha512_224 => "sha512/224",
			Self::Sha512_256 => "sha512/256",
		}
	}

	/// Length of the hex digest produced by this algorithm.
	pub const fn hex_len(self) -> usize {
		match self {
			Self::Sha224 | Self::Sha512_224 => 56,
			Self::Sha256 | Self::Sha512_256 => 64,
			Self::Sha384 => 96,
			Self::Sha512 => 128,
		}
	}

	/// Hashes `material` and returns the lowercase hex digest.
	pub fn hex_digest(self, material: &[u8]) -> String {
		match self {
			Self::Sha224 => hex_digest::<Sha224>(material),
			Self::Sha256 => hex_digest::<Sha256>(material),
			Self::Sha384 => hex_digest::<Sha384>(material),
			Self::Sha512 => hex_digest::<Sha512>(material),
			Self::Sha512_224 => hex_digest::<Sha512_224>(material),
			Self::Sha512_256 => hex_digest::<Sha512_256>(material),
		}
	}
}
impl Display for HashAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HashAlgorithm {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|alg| alg.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ConfigError::UnsupportedHashAlgorithm { name: s.to_owned() })
	}
}
impl TryFrom<String> for HashAlgorithm {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<HashAlgorithm> for String {
	fn from(value: HashAlgorithm) -> Self {
		value.as_str().to_owned()
	}
}

/// Builds the byte string hashed into a token.
///
/// Empty userdata yields `key:timestamp`, which is what deployed validators of the original
/// format expect; otherwise the userdata is bound in as `key:userdata:timestamp`.
pub fn token_material(key: &str, userdata: &str, timestamp: i64) -> String {
	if userdata.is_empty() {
		format!("{key}:{timestamp}")
	} else {
		format!("{key}:{userdata}:{timestamp}")
	}
}

fn hex_digest<D>(material: &[u8]) -> String
where
	D: Digest,
{
	hex::encode(D::digest(material))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sha256_matches_known_vector() {
		assert_eq!(
			HashAlgorithm::Sha256.hex_digest(b"abc"),
			"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
		);
	}

	#[test]
	fn digest_lengths_match_algorithms() {
		for alg in HashAlgorithm::ALL {
			let digest = alg.hex_digest(b"topsecret:1000");

			assert_eq!(digest.len(), alg.hex_len(), "Digest length mismatch for {alg}.");
			assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
		}
	}

	#[test]
	fn identifiers_parse_case_insensitively() {
		assert_eq!("SHA256".parse::<HashAlgorithm>().ok(), Some(HashAlgorithm::Sha256));
		assert_eq!("sha512/256".parse::<HashAlgorithm>().ok(), Some(HashAlgorithm::Sha512_256));
		assert!(matches!(
			"md5".parse::<HashAlgorithm>(),
			Err(ConfigError::UnsupportedHashAlgorithm { name }) if name == "md5"
		));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let alg: HashAlgorithm =
			serde_json::from_str("\"sha384\"").expect("Algorithm should deserialize.");

		assert_eq!(alg, HashAlgorithm::Sha384);
		assert_eq!(
			serde_json::to_string(&alg).expect("Algorithm should serialize."),
			"\"sha384\""
		);
		assert!(serde_json::from_str::<HashAlgorithm>("\"crc32\"").is_err());
	}

	#[test]
	fn material_binds_userdata_only_when_present() {
		assert_eq!(token_material("topsecret", "", 1000), "topsecret:1000");
		assert_eq!(token_material("topsecret", "alice", 1000), "topsecret:alice:1000");
	}
}
