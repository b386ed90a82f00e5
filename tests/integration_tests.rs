//! Integration tests using a mock SWAPI server
//!
//! Tests the full flow: QuerySet → SwapiClient → HTTP → typed records

use futures::TryStreamExt;
use serde_json::{json, Value};
use starwars_api::{query, ClientConfig, Film, Person, ResourceKind, SwapiClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SwapiClient {
    let config = ClientConfig::from_yaml_str("max_retries: 0\nrate_limit: null\n")
        .unwrap()
        .with_base_url(format!("{}/api", server.uri()));
    SwapiClient::new(&config).unwrap()
}

fn film(id: u32, title: &str) -> Value {
    json!({
        "title": title,
        "episode_id": id + 3,
        "url": format!("https://swapi.dev/api/films/{id}/")
    })
}

async fn mount_page(server: &MockServer, resource: &str, page: u32, results: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{resource}/")))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 5,
            "next": null,
            "previous": null,
            "results": results
        })))
        .mount(server)
        .await;
}

async fn mount_end(server: &MockServer, resource: &str, page: u32) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{resource}/")))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(server)
        .await;
}

/// Five films over three pages, 404 past the end
async fn mount_films(server: &MockServer) {
    mount_page(server, "films", 1, vec![film(1, "A New Hope"), film(2, "The Empire Strikes Back")]).await;
    mount_page(server, "films", 2, vec![film(3, "Return of the Jedi"), film(4, "The Phantom Menace")]).await;
    mount_page(server, "films", 3, vec![film(5, "Attack of the Clones")]).await;
    mount_end(server, "films", 4).await;
}

async fn page_requests(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .map(|req| req.url.query().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_drain_films_over_http() {
    let server = MockServer::start().await;
    mount_films(&server).await;
    let client = client_for(&server);

    let mut films = query::all(&client, ResourceKind::Film);
    let mut titles = Vec::new();
    while let Some(record) = films.advance().await.unwrap() {
        titles.push(record.label().to_string());
    }

    assert_eq!(
        titles,
        vec![
            "A New Hope",
            "The Empire Strikes Back",
            "Return of the Jedi",
            "The Phantom Menace",
            "Attack of the Clones"
        ]
    );
    assert!(films.advance().await.unwrap().is_none());
    assert_eq!(
        page_requests(&server).await,
        vec!["page=1", "page=2", "page=3", "page=4"]
    );
}

#[tokio::test]
async fn test_stream_into_typed_films() {
    let server = MockServer::start().await;
    mount_films(&server).await;
    let client = client_for(&server);

    let records: Vec<_> = query::all(&client, ResourceKind::Film)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let films: Vec<Film> = records
        .into_iter()
        .map(|record| Film::try_from(record).unwrap())
        .collect();
    assert_eq!(films.len(), 5);
    assert_eq!(films[4].id, 5);
    assert_eq!(films[4].extra["episode_id"], 8);
}

#[tokio::test]
async fn test_server_error_then_retry_same_page() {
    let server = MockServer::start().await;
    mount_page(&server, "people", 1, vec![json!({"name": "Luke Skywalker", "url": "https://swapi.dev/api/people/1/"})]).await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_page(&server, "people", 2, vec![json!({"name": "C-3PO", "url": "https://swapi.dev/api/people/2/"})]).await;
    mount_end(&server, "people", 3).await;

    let client = client_for(&server);
    let mut people = query::all(&client, ResourceKind::Person);

    assert_eq!(people.advance().await.unwrap().unwrap().label(), "Luke Skywalker");

    let err = people.advance().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
    assert!(!people.is_exhausted());

    assert_eq!(people.advance().await.unwrap().unwrap().label(), "C-3PO");
    assert!(people.advance().await.unwrap().is_none());
    assert_eq!(
        page_requests(&server).await,
        vec!["page=1", "page=2", "page=2", "page=3"]
    );
}

#[tokio::test]
async fn test_count_and_restart_over_http() {
    let server = MockServer::start().await;
    mount_films(&server).await;
    let client = client_for(&server);

    let mut films = query::all(&client, ResourceKind::Film);
    films.advance().await.unwrap();
    films.advance().await.unwrap();

    assert_eq!(films.count().await.unwrap(), 5);

    let mut fresh = films.restart();
    assert_eq!(fresh.advance().await.unwrap().unwrap().id(), 1);
    assert_eq!(films.advance().await.unwrap().unwrap().id(), 3);
}

#[tokio::test]
async fn test_get_person_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Leia Organa",
            "height": "150",
            "url": "https://swapi.dev/api/people/5/"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let leia: Person = query::get(&client, 5).await.unwrap();

    assert_eq!(leia.id, 5);
    assert_eq!(leia.name, "Leia Organa");
    assert_eq!(leia.extra["height"], "150");
    assert_eq!(leia.to_string(), "Person: Leia Organa");
}

#[tokio::test]
async fn test_empty_collection() {
    let server = MockServer::start().await;
    mount_end(&server, "people", 1).await;
    let client = client_for(&server);

    let records = query::all(&client, ResourceKind::Person)
        .collect_all()
        .await
        .unwrap();
    assert!(records.is_empty());
}
