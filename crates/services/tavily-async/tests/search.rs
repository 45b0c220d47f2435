use serial_test::serial;
use tavily_async::test_support::EnvGuard;
use tavily_async::types::common::{SearchDepth, Topic};
use tavily_async::types::search::SearchRequest;
use tavily_async::{Client, TavilyConfig, TavilyError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<TavilyConfig> {
    let config = TavilyConfig::new()
        .with_api_base(server.uri())
        .with_api_key("tvly-test-key");
    Client::with_config(config).unwrap()
}

fn no_retry() -> backon::ExponentialBuilder {
    backon::ExponentialBuilder::default()
        .with_min_delay(std::time::Duration::from_millis(10))
        .with_max_delay(std::time::Duration::from_millis(50))
        .with_max_times(1)
}

fn mock_search_response() -> serde_json::Value {
    serde_json::json!({
        "query": "Acme Corp funding",
        "answer": "Acme Corp raised a Series B in 2025.",
        "images": [],
        "results": [
            {
                "title": "Acme Corp closes Series B",
                "url": "https://news.example.com/acme-series-b",
                "content": "Acme Corp announced a $40M Series B led by Example Ventures.",
                "score": 0.93,
                "raw_content": null,
                "published_date": "2025-03-02"
            }
        ],
        "follow_up_questions": null,
        "response_time": 1.27
    })
}

#[tokio::test]
async fn search_success_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("authorization", "Bearer tvly-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = SearchRequest::new("Acme Corp funding").with_include_answer(true);
    let resp = client.search().create(req).await.unwrap();

    assert_eq!(resp.query, "Acme Corp funding");
    assert_eq!(
        resp.answer.as_deref(),
        Some("Acme Corp raised a Series B in 2025.")
    );
    assert_eq!(resp.results.len(), 1);
    let hit = &resp.results[0];
    assert_eq!(hit.url, "https://news.example.com/acme-series-b");
    assert_eq!(hit.title, "Acme Corp closes Series B");
    assert!((hit.score - 0.93).abs() < f64::EPSILON);
    assert!(hit.raw_content.is_none());
    assert_eq!(hit.published_date.as_deref(), Some("2025-03-02"));
    assert!((resp.response_time.unwrap() - 1.27).abs() < 1e-12);
}

#[tokio::test]
async fn search_request_body_is_sent_as_built() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(serde_json::json!({
            "query": "acme",
            "search_depth": "advanced",
            "topic": "news",
            "max_results": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": "acme",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = SearchRequest::new("acme")
        .with_search_depth(SearchDepth::Advanced)
        .with_topic(Topic::News)
        .with_max_results(5);

    let resp = client.search().create(req).await.unwrap();
    assert!(resp.results.is_empty());
}

#[test]
#[serial(env)]
fn missing_api_key_fails_construction() {
    let _guard = EnvGuard::remove("TAVILY_API_KEY");

    let result = Client::with_config(TavilyConfig::new().with_api_base("http://localhost:1234"));

    match result {
        Err(TavilyError::Config(msg)) => assert!(msg.contains("TAVILY_API_KEY")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
#[serial(env)]
fn client_new_reads_env_key() {
    let _key = EnvGuard::set("TAVILY_API_KEY", "tvly-from-env");
    let _base = EnvGuard::remove("TAVILY_BASE_URL");

    let client = Client::new().unwrap();
    assert_eq!(client.config().api_base(), "https://api.tavily.com");
}

#[tokio::test]
async fn unauthorized_is_terminal_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": {"error": "Unauthorized: missing or invalid API key."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .search()
        .create(SearchRequest::new("acme"))
        .await
        .unwrap_err();

    assert!(!err.is_retryable());
    match err {
        TavilyError::Api(obj) => {
            assert_eq!(obj.status_code, Some(401));
            assert_eq!(obj.message, "Unauthorized: missing or invalid API key.");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_500_plain_text_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1..)
        .mount(&server)
        .await;

    let client = test_client(&server).with_backoff(no_retry());
    let err = client
        .search()
        .create(SearchRequest::new("acme"))
        .await
        .unwrap_err();

    match err {
        TavilyError::Api(obj) => {
            assert_eq!(obj.status_code, Some(500));
            assert_eq!(obj.message, "Internal Server Error");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_serde_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .search()
        .create(SearchRequest::new("acme"))
        .await
        .unwrap_err();

    match err {
        TavilyError::Serde(msg) => assert!(msg.contains("not json")),
        other => panic!("Expected Serde error, got {other:?}"),
    }
}

#[tokio::test]
async fn over_long_query_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_search_response()))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search()
        .create(SearchRequest::new("a".repeat(401)))
        .await
        .unwrap_err();

    match err {
        TavilyError::InvalidRequest(msg) => assert!(msg.contains("401 characters")),
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }
}
