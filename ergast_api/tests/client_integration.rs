use ergast_api::{Client, Error, FilterKey, FormatOptions, QueryKind, QueryParams};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn execute_race_results_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("results.json");

    Mock::given(method("GET"))
        .and(path("/api/f1/2021/2/results.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&format!("{}/api/f1", mock_server.uri()));
    let query = QueryParams::new()
        .with_season(2021)
        .with_race(2)
        .build(QueryKind::RaceResults)
        .unwrap();
    let records = client.execute(&query).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["Driver"]["familyName"], "Hamilton");
}

#[tokio::test]
async fn execute_places_filters_before_resource() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("seasons.json");

    Mock::given(method("GET"))
        .and(path("/drivers/alonso/results/1/seasons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new()
        .with_filter(FilterKey::Drivers, "alonso")
        .with_filter(FilterKey::Results, 1)
        .build(QueryKind::SeasonList)
        .unwrap();
    let records = client
        .execute_with(&query, FormatOptions::default().with_keep_urls(true))
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert!(records[0].contains_key("url"));
}

#[tokio::test]
async fn execute_keeps_reserved_filter_characters_in_their_segment() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("seasons.json");

    Mock::given(method("GET"))
        .and(path("/drivers/alonso%3Flimit%3D1/seasons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new()
        .with_filter(FilterKey::Drivers, "alonso?limit=1")
        .build(QueryKind::SeasonList)
        .unwrap();
    let records = client.execute(&query).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn execute_server_error_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new()
        .with_season("current")
        .build(QueryKind::RaceSchedule)
        .unwrap();
    match client.execute(&query).await {
        Err(Error::Transport { status, message }) => {
            assert_eq!(status, Some(503));
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn execute_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new().build(QueryKind::SeasonList).unwrap();
    let result = client.execute(&query).await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn execute_unpublished_race_is_malformed() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("empty_races.json");

    Mock::given(method("GET"))
        .and(path("/current/23/results.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new()
        .with_season("current")
        .with_race(23)
        .build(QueryKind::RaceResults)
        .unwrap();
    let result = client.execute(&query).await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn fetch_returns_raw_document() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("laps.json");

    Mock::given(method("GET"))
        .and(path("/2011/5/laps/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QueryParams::new()
        .with_season(2011)
        .with_race(5)
        .with_lap(1)
        .build(QueryKind::LapTimes)
        .unwrap();
    let document = client.fetch(&query).await.unwrap();
    assert_eq!(document["MRData"]["RaceTable"]["lap"], "1");
}

#[tokio::test]
async fn execute_unreachable_host_has_no_status() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = Client::with_base_url(&uri);
    let query = QueryParams::new().build(QueryKind::SeasonList).unwrap();
    let result = client.execute(&query).await;
    assert!(matches!(result, Err(Error::Transport { status: None, .. })));
}
