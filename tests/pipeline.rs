use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crossdock_routes::{run, Config, Error};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self, instance: &str, result: &str) -> Config {
        let instance = self.file("instance.csv", instance);
        let result = self.file("result.txt", result);
        Config::new(result, Some(instance)).with_output(self.path("routes.svg"))
    }
}

const INSTANCE: &str = "2,2\n1,0,0\n2,0,10\n3,10,0\n4,10,10\n5,5,5\n";

#[test]
fn test_scenario_single_edge() {
    let ws = Workspace::new();
    let config = ws.config("1,1\n1,0,0\n2,3,4\n", "1 1 2\n");
    let report = run(&config).expect("valid run");
    assert!((report.total() - 5.0).abs() < 1e-10);
    assert!(ws.path("routes.svg").exists());
}

#[test]
fn test_scenario_unpositioned_cross_dock_in_route() {
    let ws = Workspace::new();
    let config = ws.config("1,1\n1,0,0\n2,3,4\n", "1 1 3\n");
    let err = run(&config).expect_err("node 3 has no row");
    assert!(matches!(err, Error::Lookup { node: 3, .. }));
    assert!(!ws.path("routes.svg").exists());
}

#[test]
fn test_scenario_labelled_objective() {
    let ws = Workspace::new();
    let config = ws.config(INSTANCE, "1 1 5\nTotalObjective 42\n");
    let err = run(&config).expect_err("two-token line");
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_scenario_three_owners() {
    let ws = Workspace::new();
    let config = ws.config(INSTANCE, "1 1 5\n2 2 5\n3 5 3\n");
    let err = run(&config).expect_err("only two styles");
    assert!(matches!(err, Error::RenderCapacity { owners: 3, slots: 2 }));
    assert!(!ws.path("routes.svg").exists());
}

#[test]
fn test_two_routes_through_cross_dock() {
    let ws = Workspace::new();
    let config = ws.config(INSTANCE, "12.0\n1 1 5\n1 5 3\n2 2 5\n2 5 4\n");
    let report = run(&config).expect("valid run");

    let leg = 50f64.sqrt();
    assert_eq!(report.num_routes(), 2);
    assert_eq!(report.routes()[0].owner, 1);
    assert!((report.routes()[0].cost - 2.0 * leg).abs() < 1e-10);
    assert!((report.total() - 4.0 * leg).abs() < 1e-10);

    let svg = fs::read_to_string(ws.path("routes.svg")).expect("diagram written");
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("Route 2"));
}

#[test]
fn test_skip_rows_preamble() {
    let ws = Workspace::new();
    let instance = ws.file("instance.csv", "1,1\n0,0\n1,0,0\n2,3,4\n");
    let result = ws.file("result.txt", "1 1 2\n");
    let config = Config::new(result, Some(instance))
        .with_output(ws.path("routes.svg"))
        .with_skip_rows(1);
    let report = run(&config).expect("preamble skipped");
    assert!((report.total() - 5.0).abs() < 1e-10);
}

#[test]
fn test_missing_result_file() {
    let ws = Workspace::new();
    let instance = ws.file("instance.csv", INSTANCE);
    let config = Config::new(ws.path("absent.txt"), Some(instance)).with_output(ws.path("routes.svg"));
    let err = run(&config).expect_err("missing result");
    match err {
        Error::Io { path, .. } => assert_eq!(path, ws.path("absent.txt")),
        other => panic!("expected io error, got {:?}", other),
    }
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_crossdock-routes"))
}

fn exit_code(cmd: &mut Command) -> Option<i32> {
    cmd.env_remove("CROSSDOCK_INSTANCE")
        .env_remove("CROSSDOCK_OUTPUT")
        .env_remove("CROSSDOCK_SKIP_ROWS")
        .output()
        .expect("binary runs")
        .status
        .code()
}

fn out(ws: &Workspace) -> PathBuf {
    ws.path("cli.svg")
}

fn args<'a>(result: &'a Path, instance: &'a Path, output: &'a Path) -> [&'a Path; 4] {
    [result, instance, Path::new("--output"), output]
}

#[test]
fn test_cli_success() {
    let ws = Workspace::new();
    let instance = ws.file("instance.csv", "1,1\n1,0,0\n2,3,4\n");
    let result = ws.file("result.txt", "1 1 2\n");
    let output = bin()
        .args(args(&result, &instance, &out(&ws)))
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total cost = 5"));
    assert!(out(&ws).exists());
}

#[cfg(feature = "json")]
#[test]
fn test_cli_json_report() {
    let ws = Workspace::new();
    let instance = ws.file("instance.csv", "1,1\n1,0,0\n2,3,4\n");
    let result = ws.file("result.txt", "1 1 2\n");
    let output = bin()
        .args(args(&result, &instance, &out(&ws)))
        .arg("--json")
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(0));

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(v["total"].as_f64(), Some(5.0));
    assert_eq!(v["routes"][0]["owner"].as_u64(), Some(1));
    assert_eq!(v["routes"][0]["cost"].as_f64(), Some(5.0));
}

#[test]
fn test_cli_missing_argument() {
    assert_eq!(exit_code(&mut bin()), Some(64));
}

#[test]
fn test_cli_exit_codes_per_error_kind() {
    let ws = Workspace::new();
    let instance = ws.file("instance.csv", INSTANCE);
    let output = out(&ws);

    let bad = ws.file("bad.txt", "1 1 x\n");
    assert_eq!(exit_code(bin().args(args(&bad, &instance, &output))), Some(65));

    let absent = ws.path("absent.txt");
    assert_eq!(exit_code(bin().args(args(&absent, &instance, &output))), Some(66));

    let unknown = ws.file("unknown.txt", "1 1 9\n");
    assert_eq!(exit_code(bin().args(args(&unknown, &instance, &output))), Some(67));

    let three = ws.file("three.txt", "1 1 5\n2 2 5\n3 3 5\n");
    assert_eq!(exit_code(bin().args(args(&three, &instance, &output))), Some(68));

    let ok = ws.file("ok.txt", "1 1 5\n");
    let unwritable = ws.path("missing-dir").join("cli.svg");
    assert_eq!(exit_code(bin().args(args(&ok, &instance, &unwritable))), Some(73));
}
