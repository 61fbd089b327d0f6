// self
use xsrf_guard::{ConfigError, Guard, GuardConfig, GuardKey, GuardOptions, HashAlgorithm};

#[test]
fn json_options_build_a_working_guard() {
	let options = GuardOptions::from_json_str(
		r#"{
			"key": "topsecret",
			"userdata": "user-42",
			"timeout_seconds": 60,
			"field_name": "csrf",
			"hash_algorithm": "SHA384",
			"now": 1000
		}"#,
	)
	.expect("Complete options should parse.");
	let mut guard = Guard::from_options(options).expect("Complete options should build a guard.");
	let config = guard.config();

	assert_eq!(config.userdata, "user-42");
	assert_eq!(config.timeout_seconds, 60);
	assert_eq!(config.field_name, "csrf");
	assert_eq!(config.hash_algorithm, HashAlgorithm::Sha384);
	assert_eq!(config.now, Some(1000));

	let token = guard.generate_token();

	assert!(guard.is_valid(token.as_str()));
}

#[test]
fn configure_leaves_unset_options_alone() {
	let mut guard = Guard::new();

	guard.configure(GuardOptions::default().key("topsecret").field_name("csrf"));
	guard.configure(GuardOptions::default().timeout_seconds(0));

	let config = guard.config();

	assert_eq!(config.key, GuardKey::new("topsecret"));
	assert_eq!(config.field_name, "csrf");
	assert_eq!(config.timeout_seconds, 0);
	assert_eq!(config.hash_algorithm, HashAlgorithm::Sha256);
}

#[test]
fn empty_key_is_rejected_at_startup_only() {
	assert!(matches!(
		Guard::from_options(GuardOptions::default().userdata("alice")),
		Err(ConfigError::EmptyKey)
	));
	assert!(matches!(
		Guard::from_config(GuardConfig { field_name: String::new(), ..GuardConfig::new("k") }),
		Err(ConfigError::EmptyFieldName)
	));

	// `Guard::new` stays permissive; the caller owns key provisioning.
	let mut guard = Guard::new();

	guard.set_now(1000);

	let token = guard.generate_token();

	assert!(guard.is_valid(token.as_str()));
}

#[test]
fn generated_keys_work_across_guard_instances() {
	let key = GuardKey::generate();
	let issuer = Guard::from_config(GuardConfig { now: Some(1000), ..GuardConfig::new(key.clone()) })
		.expect("Generated key should pass the startup check.");
	let mut verifier =
		Guard::from_config(GuardConfig { now: Some(1500), ..GuardConfig::new(key) })
			.expect("Generated key should pass the startup check.");

	assert!(verifier.is_valid(issuer.generate_token().as_str()));
}

#[test]
fn parse_errors_name_the_failing_option() {
	let error = GuardOptions::from_json_str(r#"{"timeout_seconds":"soon"}"#)
		.expect_err("String timeout should fail to parse.");

	match error {
		ConfigError::Parse { source } => assert_eq!(source.path().to_string(), "timeout_seconds"),
		other => panic!("Expected a parse error, got {other:?}."),
	}
}
