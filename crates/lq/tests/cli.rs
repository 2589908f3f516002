//! End-to-end tests for the `lq` binary.
//!
//! Every test runs the binary in a sandbox with its own config file so the
//! developer's configuration never leaks in.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct CliContext {
    _sandbox: TempDir,
    config_path: PathBuf,
}

impl CliContext {
    fn new() -> Self {
        let sandbox = TempDir::new().expect("failed to create temporary sandbox");
        let config_path = sandbox.path().join("config.toml");
        Self {
            _sandbox: sandbox,
            config_path,
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lq"));
        cmd.args(args);
        cmd.env("LISTQ_CONFIG", &self.config_path);
        cmd.env("NO_COLOR", "1");
        for var in ["LISTQ_URL", "LISTQ_TOKEN", "LISTQ_LOG", "RUST_LOG"] {
            cmd.env_remove(var);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to run lq")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "lq failed\nargs: {:?}\nstatus: {}\nstderr:\n{}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}

#[test]
fn test_flatten_prints_pairs() {
    let ctx = CliContext::new();
    let stdout = ctx.run_ok(&[
        "flatten",
        r#"(latency > 2 || status >= 400) && method = "GET""#,
    ]);

    assert_eq!(
        stdout,
        "filter[$and][0][$or][0][latency][$gt]=2\n\
         filter[$and][0][$or][1][status][$gte]=400\n\
         filter[$and][1][method]=GET\n"
    );
}

#[test]
fn test_flatten_query_string() {
    let ctx = CliContext::new();
    let stdout = ctx.run_ok(&["flatten", "--query-string", "a != 'x y'"]);
    assert_eq!(stdout.trim_end(), "filter%5Ba%5D%5B%24ne%5D=x+y");
}

#[test]
fn test_flatten_json() {
    let ctx = CliContext::new();
    let stdout = ctx.run_ok(&["--json", "flatten", "a < 1"]);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([["filter[a][$lt]", "1"]]));
}

#[test]
fn test_flatten_bad_filter_exits_with_one() {
    let ctx = CliContext::new();
    let output = ctx.run(&["flatten", "a = 1 && b = 2 || c = 3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("No implicit &&/|| precedence"), "stderr: {stderr}");
}

#[test]
fn test_flatten_unsupported_operator_json_error() {
    let ctx = CliContext::new();
    let output = ctx.run(&["--json", "flatten", "tags ?= 'a'"]);

    assert_eq!(output.status.code(), Some(1));
    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "FILTER_ERROR");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Not supported: ?="));
}

#[test]
fn test_params_uses_configured_page_size() {
    let ctx = CliContext::new();
    ctx.run_ok(&["config", "set", "page_size", "25"]);

    let stdout = ctx.run_ok(&["params", "--filter", "a=1", "--page", "2"]);
    assert_eq!(stdout, "filter[a]=1\nlimit=25\noffset=50\n");
}

#[test]
fn test_params_bad_filter_is_reported_not_fatal() {
    let ctx = CliContext::new();
    let output = ctx.run(&["params", "--filter", "(a = 1", "--limit", "5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "limit=5\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error:").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_params_offset_overflow_is_config_error() {
    let ctx = CliContext::new();
    let limit = usize::MAX.to_string();
    let output = ctx.run(&["params", "--limit", &limit, "--page", "2"]);

    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn test_params_order_expand_count() {
    let ctx = CliContext::new();
    let stdout = ctx.run_ok(&[
        "params",
        "--limit",
        "5",
        "--order",
        "-year,name",
        "--expand",
        "director",
        "--count",
    ]);
    assert_eq!(
        stdout,
        "limit=5\norder=-year,name\nexpand=director\ncount=true\n"
    );
}

#[test]
fn test_piped_output_has_no_ansi_codes() {
    let ctx = CliContext::new();
    let output = ctx
        .command(&["flatten", "a = 1 && b > 2"])
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to run lq");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'), "stdout: {stdout:?}");
    assert_eq!(stdout, "filter[$and][0][a]=1\nfilter[$and][1][b][$gt]=2\n");
}

#[test]
fn test_list_without_url_is_config_error() {
    let ctx = CliContext::new();
    let output = ctx.run(&["list", "/api/records/v1/movies"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_config_path_honours_env() {
    let ctx = CliContext::new();
    let stdout = ctx.run_ok(&["config", "path"]);
    assert_eq!(stdout.trim_end(), ctx.config_path.display().to_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_fetches_filtered_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/records/v1/movies"))
        .and(header("Authorization", "Bearer cli-token"))
        .and(query_param("filter[year][$gte]", "2000"))
        .and(query_param("limit", "2"))
        .and(query_param("count", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cursor": "Mg",
            "total_count": 5,
            "records": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = CliContext::new();
    let mut cmd = ctx.command(&[
        "--json",
        "--token",
        "cli-token",
        "list",
        "/api/records/v1/movies",
        "--filter",
        "year >= 2000",
        "--limit",
        "2",
        "--count",
    ]);
    cmd.env("LISTQ_URL", mock_server.uri());

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let page: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["total_row_count"], 5);
    assert_eq!(page["cursor"], "Mg");
    assert_eq!(page["records"].as_array().unwrap().len(), 2);
}
