//! ProcessCompiler against a scripted fake compiler.

#![cfg(unix)]

use std::fs;
use std::path::Path;

use takin_compiler::{Compiler, CompileResult, Error, ProcessCompiler};
use takin_config::{assemble, BuildMode};

fn shell(script: &str) -> ProcessCompiler {
    ProcessCompiler::new("sh").arg("-c").arg(script)
}

fn collect(compiler: &ProcessCompiler) -> takin_compiler::Result<Vec<CompileResult>> {
    let config = assemble(BuildMode::Production, "/srv/site").unwrap();
    let mut results = Vec::new();
    compiler.compile(config, &mut |result| results.push(result))?;
    Ok(results)
}

fn write_stats(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn one_shot_build_delivers_a_single_stats_result() {
    let dir = tempfile::tempdir().unwrap();
    let stats = write_stats(
        dir.path(),
        "stats.json",
        r#"{"assets": {"app.js": {"size": 2048}}, "startTime": 1, "endTime": 2}"#,
    );

    // The script drains the configuration from stdin before answering,
    // proving the handoff happened and stdin was closed.
    let compiler = shell(&format!("cat - >/dev/null; cat {stats}"));
    let results = collect(&compiler).unwrap();

    assert_eq!(results.len(), 1);
    let CompileResult::Stats(stats) = &results[0] else {
        panic!("expected a statistics snapshot");
    };
    assert_eq!(stats.assets["app.js"].size, Some(2048));
}

#[test]
fn watch_mode_delivers_one_result_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let stats = write_stats(
        dir.path(),
        "stats.ndjson",
        concat!(
            r#"{"assets": {"app.js": {"size": 100}}}"#,
            "\n",
            r#"{"assets": {"app.js": {"size": 200}}}"#,
            "\n",
        ),
    );

    let compiler = shell(&format!("cat - >/dev/null; cat {stats}"));
    let results = collect(&compiler).unwrap();

    assert_eq!(results.len(), 2);
    for (result, expected) in results.iter().zip([100u64, 200]) {
        let CompileResult::Stats(stats) = result else {
            panic!("expected a statistics snapshot");
        };
        assert_eq!(stats.assets["app.js"].size, Some(expected));
    }
}

#[test]
fn fatal_error_payloads_parse_as_fatal() {
    let compiler = shell(
        r#"cat - >/dev/null; echo '{"error": {"message": "boom", "details": "at main.ts:1"}}'"#,
    );
    let results = collect(&compiler).unwrap();

    assert_eq!(results.len(), 1);
    let CompileResult::Fatal { error } = &results[0] else {
        panic!("expected a fatal error");
    };
    assert_eq!(error.message.as_deref(), Some("boom"));
    assert_eq!(error.details.as_deref(), Some("at main.ts:1"));
}

#[test]
fn malformed_output_is_a_protocol_error() {
    let compiler = shell("cat - >/dev/null; echo 'not json'");
    let err = collect(&compiler).unwrap_err();
    assert!(matches!(err, Error::MalformedResult(_)));
}

#[test]
fn missing_executable_is_a_spawn_error() {
    let compiler = ProcessCompiler::new("takin-no-such-compiler");
    let err = collect(&compiler).unwrap_err();
    assert!(matches!(err, Error::Spawn { command, .. } if command == "takin-no-such-compiler"));
}

#[test]
fn silent_exit_is_a_no_result_error() {
    let compiler = shell("cat - >/dev/null; exit 3");
    let err = collect(&compiler).unwrap_err();
    assert!(matches!(err, Error::NoResult { .. }));
}

#[test]
fn blank_lines_between_results_are_ignored() {
    let compiler =
        shell(r#"cat - >/dev/null; printf '\n{"assets": {}}\n\n{"assets": {}}\n'"#);
    let results = collect(&compiler).unwrap();
    assert_eq!(results.len(), 2);
}
