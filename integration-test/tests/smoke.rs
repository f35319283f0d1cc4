use test_driver::{binary, write_file, TestSession};

fn flagcheck(args: &[&str], env: &[(&str, &str)]) -> TestSession {
    TestSession::spawn(&binary("flagcheck"), args, env).expect("failed to spawn flagcheck")
}

fn clo_trace(args: &[&str]) -> TestSession {
    TestSession::spawn(&binary("clo-trace"), args, &[]).expect("failed to spawn clo-trace")
}

// -- clo-trace --

#[test]
fn trace_walks_flags_values_and_rollback() {
    let out = clo_trace(&[
        "flag:-v --verbose",
        "int:--level",
        "text:-O",
        "--",
        "--verbose",
        "-Ofast",
        "--level",
        "3",
        "--level",
        "abc",
        "model",
    ])
    .wait_exit(0);
    let lines: Vec<&str> = out.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0 --verbose: '-v --verbose' flag -> 0",
            "1 -Ofast: '-O' text = 'fast' -> 1",
            "2 --level: '--level' int = 3 -> 3",
            "4 --level: positional",
            "5 abc: positional",
            "6 model: positional",
            "end 7",
        ]
    );
}

#[test]
fn trace_optional_value_missing() {
    let out = clo_trace(&["int?:--level", "--", "--level"]).wait_exit(0);
    assert_eq!(out.stdout, "0 --level: '--level' int = 0 -> 0\nend 1\n");
}

#[test]
fn trace_rejects_bad_spec() {
    let out = clo_trace(&["bogus:-x", "--", "-x"]).wait_exit(2);
    assert!(out.stderr.contains("unknown kind 'bogus'"), "{}", out.stderr);
}

// -- flagcheck --

#[test]
fn help_prints_usage() {
    let out = flagcheck(&["-v", "--help"], &[]).wait_exit(0);
    assert!(out.stdout.starts_with("Usage: flagcheck"));
}

#[test]
fn version_prints_tool_version() {
    let out = flagcheck(&["--version"], &[]).wait_exit(0);
    assert_eq!(out.stdout, "flagcheck 0.1.0\n");
}

#[test]
fn resolved_configuration() {
    let out = flagcheck(
        &[
            "-v",
            "-a",
            "-p4",
            "--time-limit",
            "2500",
            "-Ggecode",
            "-I",
            "lib",
            "--solver",
            "chuffed",
            "model.mzn",
            "data.dzn",
        ],
        &[],
    )
    .wait_exit(0);
    assert_eq!(
        out.stdout,
        "solver: chuffed\n\
         files: model.mzn, data.dzn\n\
         globals-dir: gecode\n\
         search-dirs: lib\n\
         data: (none)\n\
         optimisation-level: 1\n\
         limits: 2500 ms, 4 threads\n\
         flags: verbose, all-solutions\n"
    );
}

#[test]
fn missing_value_fails() {
    let out = flagcheck(&["model.mzn", "--num-solutions"], &[]).wait_exit(1);
    assert!(
        out.stderr
            .contains("flagcheck: option --num-solutions requires an argument"),
        "{}",
        out.stderr
    );
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_value_fails() {
    let out = flagcheck(&["-p", "many"], &[]).wait_exit(1);
    assert!(
        out.stderr
            .contains("flagcheck: invalid argument 'many' for option -p"),
        "{}",
        out.stderr
    );
}

#[test]
fn unknown_option_fails() {
    let out = flagcheck(&["--frobnicate"], &[]).wait_exit(1);
    assert!(out
        .stderr
        .contains("flagcheck: unrecognized option '--frobnicate'"));
}

#[test]
fn min_version_too_old_fails() {
    let out = flagcheck(&["--min-version", "99.0.0"], &[]).wait_exit(1);
    assert!(out
        .stderr
        .contains("version 99.0.0 or later required, this is 0.1.0"));
}

#[test]
fn options_from_environment() {
    let out = flagcheck(&["-p", "2"], &[("FLAGCHECK_OPTIONS", " -s  -p 8 ")]).wait_exit(0);
    assert!(out.stdout.contains("limits: 2 threads\n"), "{}", out.stdout);
    assert!(out.stdout.contains("flags: statistics\n"), "{}", out.stdout);
}

#[test]
fn args_file_relative_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "opts.txt", "--statistics\n-n 5\n-D n=3;\n");
    let out = TestSession::spawn_in(
        &binary("flagcheck"),
        &["--args-file", "opts.txt", "m.mzn"],
        &[],
        Some(dir.path().to_str().unwrap()),
    )
    .expect("failed to spawn flagcheck")
    .wait_exit(0);
    assert!(out.stdout.contains("files: m.mzn\n"));
    assert!(out.stdout.contains("data: n=3;\n"));
    assert!(out.stdout.contains("limits: 5 solutions\n"));
    assert!(out.stdout.contains("flags: statistics\n"));
}

#[test]
fn missing_args_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = TestSession::spawn_in(
        &binary("flagcheck"),
        &["--args-file", "absent.txt"],
        &[],
        Some(dir.path().to_str().unwrap()),
    )
    .expect("failed to spawn flagcheck")
    .wait_exit(1);
    assert!(out.stderr.contains("cannot read args file absent.txt"), "{}", out.stderr);
}
