//! Tests for the CLI module

use super::*;
use crate::config::ClientConfig;
use crate::fetch::SwapiClient;
use clap::Parser;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("starwars-api").chain(args.iter().copied())).unwrap()
}

fn client_for(server: &MockServer) -> SwapiClient {
    let config = ClientConfig {
        max_retries: 0,
        rate_limit: None,
        ..ClientConfig::default()
    }
    .with_base_url(server.uri());
    SwapiClient::new(&config).unwrap()
}

async fn run(cli: Cli, client: &SwapiClient) -> String {
    let mut out = Vec::new();
    Runner::new(cli).run_with(client, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

async fn mount_people(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": "page 2",
            "results": [
                {"name": "Luke Skywalker", "url": "https://swapi.dev/api/people/1/"},
                {"name": "C-3PO", "url": "https://swapi.dev/api/people/2/"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "results": [
                {"name": "R2-D2", "url": "https://swapi.dev/api/people/3/"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(server)
        .await;
}

#[test]
fn test_parse_list_with_alias() {
    let cli = parse(&["list", "person", "--max-records", "5", "-f", "pretty"]);
    assert_eq!(cli.format, OutputFormat::Pretty);
    match cli.command {
        Commands::List { kind, max_records } => {
            assert_eq!(kind, crate::resource::ResourceKind::Person);
            assert_eq!(max_records, Some(5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_kind() {
    let result = Cli::try_parse_from(["starwars-api", "list", "planets"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = parse(&["get", "films", "1", "--base-url", "http://localhost/api", "-v"]);
    assert!(cli.verbose);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost/api"));
    assert!(matches!(cli.command, Commands::Get { id: 1, .. }));
}

#[tokio::test]
async fn test_list_streams_all_pages() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    let client = client_for(&server);

    let output = run(parse(&["list", "people"]), &client).await;
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["name"], "Luke Skywalker");
    assert_eq!(lines[2]["name"], "R2-D2");
}

#[tokio::test]
async fn test_list_max_records_stops_early() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    let client = client_for(&server);

    let output = run(parse(&["list", "people", "--max-records", "1", "-f", "pretty"]), &client).await;

    assert_eq!(output, "Person: Luke Skywalker (#1)\n");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_count() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    let client = client_for(&server);

    let output = run(parse(&["count", "people"]), &client).await;
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value, json!({"kind": "people", "count": 3}));
}

#[tokio::test]
async fn test_get_pretty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "A New Hope",
            "url": "https://swapi.dev/api/films/1/"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let output = run(parse(&["get", "film", "1", "--format", "pretty"]), &client).await;
    assert_eq!(output, "Film: A New Hope (#1)\n");
}

#[tokio::test]
async fn test_kinds_json() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let output = run(parse(&["kinds"]), &client).await;
    let kinds: Vec<String> = output
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["kind"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(kinds, vec!["people", "films"]);
}
