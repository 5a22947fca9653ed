//! Integration tests for the `show`, `init` and `validate` commands, driven through `run`

use camino::Utf8PathBuf;
use medal_rank_lib::Host;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

async fn medal_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "code": "USA", "gold": 40, "silver": 44, "bronze": 42 },
            { "code": "CHN", "gold": 40, "silver": 27, "bronze": 24 },
            { "code": "JPN", "gold": 20, "silver": 12, "bronze": 13 },
            { "code": "AUS", "gold": 18, "silver": 19, "bronze": 16 },
            { "code": "FRA", "gold": 16, "silver": 26, "bronze": 22 }
        ])))
        .mount(&server)
        .await;
    server
}

fn codes(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_show_ranks_by_total() {
    let server = medal_server().await;
    let url = format!("{}/medals.json", server.uri());

    let mut host = TestHost::new();
    medal_rank_lib::run(
        &mut host,
        ["medal-rank", "show", "--source", url.as_str(), "--sort", "total", "--color", "never"],
    )
    .await
    .expect("show should succeed");

    let output = host.output_str();
    assert!(output.lines().next().unwrap().contains("Total▼"));
    assert_eq!(codes(&output), ["USA", "CHN", "FRA", "AUS", "JPN"]);
    assert_eq!(host.exit_code, None);
}

#[tokio::test]
async fn test_show_with_unknown_sort_ranks_by_gold() {
    let server = medal_server().await;
    let url = format!("{}/medals.json", server.uri());

    let mut host = TestHost::new();
    medal_rank_lib::run(
        &mut host,
        ["medal-rank", "show", "--source", url.as_str(), "--sort", "bogus", "--limit", "3", "--color", "never"],
    )
    .await
    .expect("show should succeed");

    let output = host.output_str();
    assert!(output.lines().next().unwrap().contains("Gold▼"));
    assert_eq!(codes(&output), ["USA", "CHN", "JPN"]);
}

#[tokio::test]
async fn test_show_writes_json_report() {
    let server = medal_server().await;
    let url = format!("{}/medals.json", server.uri());
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report = Utf8PathBuf::from_path_buf(dir.path().join("report.json")).unwrap();

    let mut host = TestHost::new();
    medal_rank_lib::run(
        &mut host,
        ["medal-rank", "show", "--source", url.as_str(), "--sort", "silver", "--json", report.as_str()],
    )
    .await
    .expect("show should succeed");

    assert!(host.output_str().is_empty());

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["sort"], "silver");
    assert_eq!(value["medals"][0]["code"], "USA");
    assert_eq!(value["medals"][1]["code"], "CHN");
    assert_eq!(value["medals"][2]["code"], "FRA");
    assert_eq!(value["medals"][0]["rank"], 1);
    assert_eq!(value["medals"][0]["total"], 126);
}

#[tokio::test]
async fn test_show_failure_sets_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medals.json"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;
    let url = format!("{}/medals.json", server.uri());

    let mut host = TestHost::new();
    let result = medal_rank_lib::run(&mut host, ["medal-rank", "show", "--source", url.as_str(), "--color", "never"]).await;

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("502"), "got: {}", host.error_str());
    server.verify().await;
}

#[tokio::test]
async fn test_show_uses_config_file() {
    let server = medal_server().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Utf8PathBuf::from_path_buf(dir.path().join("medals.toml")).unwrap();
    std::fs::write(
        &config,
        format!("source = \"{}/medals.json\"\nsort = \"bronze\"\nlimit = 2\n", server.uri()),
    )
    .unwrap();

    let mut host = TestHost::new();
    medal_rank_lib::run(&mut host, ["medal-rank", "show", "--config", config.as_str(), "--color", "never"])
        .await
        .expect("show should succeed");

    let output = host.output_str();
    assert!(output.lines().next().unwrap().contains("Bronze▼"));
    assert_eq!(codes(&output), ["USA", "CHN"]);
}

#[tokio::test]
async fn test_init_then_validate() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Utf8PathBuf::from_path_buf(dir.path().join("medals.toml")).unwrap();

    let mut host = TestHost::new();
    medal_rank_lib::run(&mut host, ["medal-rank", "init", config.as_str()])
        .await
        .expect("init should succeed");
    assert!(config.exists());

    let mut host = TestHost::new();
    medal_rank_lib::run(&mut host, ["medal-rank", "validate", "--config", config.as_str()])
        .await
        .expect("validate should succeed");
    assert!(host.output_str().contains("Configuration file is valid"));
}
