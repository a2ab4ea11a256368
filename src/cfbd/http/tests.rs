//! Unit tests for HTTP client functionality

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn roster_url(server: &MockServer) -> String {
        format!("{}/roster", server.uri())
    }

    #[tokio::test]
    async fn test_fetch_season_sends_auth_and_year() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/roster"))
            .and(query_param("year", "2019"))
            .and(query_param_is_missing("team"))
            .and(header("authorization", "Bearer secret-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"firstName": "Jane", "lastName": "Doe", "team": "Utah",
                 "homeCity": "Provo", "homeState": "UT"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(roster_url(&mock_server), "secret-key").unwrap();
        let outcome = client
            .fetch(&RosterQuery::season(Season::new(2019)))
            .await;

        match outcome {
            FetchOutcome::Success(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].identity(), "Jane Doe");
                assert_eq!(records[0].home_city(), "Provo");
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_team_season_sends_team_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/roster"))
            .and(query_param("year", "2018"))
            .and(query_param("team", "Texas A&M"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(roster_url(&mock_server), "k").unwrap();
        let outcome = client
            .fetch(&RosterQuery::team_season(Team::new("Texas A&M"), Season::new(2018)))
            .await;

        assert_eq!(outcome, FetchOutcome::Success(vec![]));
    }

    #[tokio::test]
    async fn test_fetch_classifies_status_codes() {
        let cases = [
            (401, FetchOutcome::Unauthorized),
            (403, FetchOutcome::Unauthorized),
            (429, FetchOutcome::RateLimited),
            (500, FetchOutcome::HttpStatus(500)),
            (404, FetchOutcome::HttpStatus(404)),
        ];

        for (status, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let client = RosterClient::new(roster_url(&mock_server), "k").unwrap();
            let outcome = client
                .fetch(&RosterQuery::season(Season::new(2020)))
                .await;

            assert_eq!(outcome, expected, "status {status}");
        }
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(roster_url(&mock_server), "k").unwrap();
        let outcome = client
            .fetch(&RosterQuery::season(Season::new(2020)))
            .await;

        assert!(matches!(outcome, FetchOutcome::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        // Nothing listens on port 9 locally.
        let client = RosterClient::new("http://127.0.0.1:9/roster", "k").unwrap();
        let outcome = client
            .fetch(&RosterQuery::season(Season::new(2020)))
            .await;

        assert!(matches!(outcome, FetchOutcome::Transport(_)));
    }

    #[test]
    fn test_classify_object_body_is_malformed() {
        let outcome = classify(StatusCode::OK, r#"{"message":"ok"}"#);
        assert!(matches!(outcome, FetchOutcome::MalformedPayload(_)));
    }

    #[test]
    fn test_auth_header_map() {
        let headers = auth_header_map(" token \n").unwrap();

        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer token");
        assert!(headers.get("authorization").unwrap().is_sensitive());
    }

    #[test]
    fn test_auth_header_map_rejects_control_characters() {
        assert!(auth_header_map("bad\u{7}key").is_err());
    }

    #[test]
    fn test_query_params_and_display() {
        let bulk = RosterQuery::season(Season::new(2016));
        assert_eq!(bulk.params(), vec![("year", "2016".to_string())]);
        assert_eq!(bulk.to_string(), "2016");

        let single = RosterQuery::team_season(Team::new("Utah"), Season::new(2017));
        assert_eq!(
            single.params(),
            vec![("year", "2017".to_string()), ("team", "Utah".to_string())]
        );
        assert_eq!(single.to_string(), "Utah 2017");
    }

    #[test]
    fn test_default_base_url_constant() {
        assert_eq!(
            DEFAULT_BASE_URL,
            "https://apinext.collegefootballdata.com/roster"
        );
    }
}
