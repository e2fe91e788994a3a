#![cfg(feature = "test")]

// std
use std::io::ErrorKind;
// self
use immutable_passport::{
	AssertionParser, CallbackPhase, ImmutablePassport,
	_preludet::{CountingReader, FailingReader},
	error::Error,
	run_callback,
};

#[test]
fn hooks_never_reread_the_body() {
	let (body, reads) = CountingReader::new(r#"{"omniauth":{"uid":"u1","info":{"nickname":"n"}}}"#);
	let strategy = ImmutablePassport::new();
	let phase = CallbackPhase::from_body(&strategy, body).expect("Phase should start.");
	let after_parse = reads.get();
	let uid = phase.uid().expect("Uid should be present.");
	let info = phase.info();
	let extra = phase.extra();

	assert_eq!(phase.uid().expect("Uid should be present."), uid);
	assert_eq!(phase.info(), info);
	assert_eq!(phase.extra(), extra);
	assert_eq!(phase.auth_hash().expect("Auth hash should assemble.").info, info);
	assert_eq!(reads.get(), after_parse);
}

#[test]
fn dropped_connection_fails_before_the_phase_starts() {
	let strategy = ImmutablePassport::new();
	let result = CallbackPhase::from_body(&strategy, FailingReader::new(r#"{"omniauth":{"uid""#));
	let err = result.expect_err("Reset stream must not start a phase.");

	assert!(matches!(&err, Error::Io(e) if e.kind() == ErrorKind::ConnectionReset), "{err:?}");
	assert!(err.is_decode_failure());

	let err = run_callback(&strategy, FailingReader::new(""))
		.expect_err("Reset stream must not yield an auth hash.");

	assert!(matches!(err, Error::Io(_)));
}

#[test]
fn parser_surfaces_read_errors_verbatim() {
	let err = AssertionParser::default()
		.parse(FailingReader::with_kind(r#"{"omniauth":{}}"#, ErrorKind::UnexpectedEof))
		.expect_err("Truncated stream must fail.");

	assert!(matches!(&err, Error::Io(e) if e.kind() == ErrorKind::UnexpectedEof), "{err:?}");
}
