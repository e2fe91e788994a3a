//! Runs the `immutable_passport` callback over a JSON body read from stdin, or a built-in
//! sample when stdin is a terminal, and prints the resulting auth hash.

// std
use std::io::{self, IsTerminal};
// crates.io
use color_eyre::Result;
// self
use immutable_passport::{
	ImmutablePassport, catalog::StrategyCatalog, id::IMMUTABLE_PASSPORT, run_callback,
};

const SAMPLE: &str = r#"{
	"omniauth": {
		"uid": "email|64f1c2",
		"info": { "email": "ann@example.com", "nickname": "annie" },
		"credentials": { "id_token": "eyJ..." }
	}
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let catalog = StrategyCatalog::default();

	catalog.register(std::sync::Arc::new(ImmutablePassport::new()))?;

	let strategy =
		catalog.get(IMMUTABLE_PASSPORT).ok_or_else(|| color_eyre::eyre::eyre!("strategy missing"))?;
	let stdin = io::stdin();
	let auth = if stdin.is_terminal() {
		run_callback(strategy.as_ref(), SAMPLE.as_bytes())?
	} else {
		run_callback(strategy.as_ref(), stdin.lock())?
	};

	println!("{}", serde_json::to_string_pretty(&auth)?);

	Ok(())
}
