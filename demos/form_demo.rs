//! Walks through a form round trip: render the hidden field, "submit" it as a URL-encoded
//! body, and validate it once while fresh and once after the 3-second timeout has passed.

// crates.io
use color_eyre::Result;
// self
use xsrf_guard::{FormFields, Guard, GuardOptions};

fn main() -> Result<()> {
	color_eyre::install()?;

	let issued_at = 1_700_000_000;
	let mut guard =
		Guard::from_options(GuardOptions::default().key("topsecret").timeout_seconds(3))?;

	guard.set_now(issued_at);

	let field = guard.field();

	println!("Rendered form field:\n{field}");

	let body = format!("comment=hello+world&{}={}", field.name, urlencode(&field.value));
	let submission = FormFields::parse(&body);

	for (label, now) in [("right away", issued_at + 1), ("after a coffee break", issued_at + 600)] {
		guard.set_now(now);

		let message = if guard.is_valid(&submission) {
			"Nice! Your request was valid.".to_owned()
		} else {
			format!(
				"Uh-oh! Invalid request!!! ({})",
				guard.last_error().map(ToString::to_string).unwrap_or_default()
			)
		};

		println!("Submitted {label}: {message}");
	}

	Ok(())
}

fn urlencode(value: &str) -> String {
	url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
