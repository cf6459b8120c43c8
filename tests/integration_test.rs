//! Integration tests for the Hubstaff tool client
//!
//! All HTTP traffic goes to a local wiremock server; no API token needed.

use hubstaff_tools::tools::Tool;
use hubstaff_tools::{
    batch, catalog, Args, CallError, CallRequest, Credentials, HubstaffClient, ToolRegistry,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(value: Value) -> Args {
    value.as_object().cloned().unwrap()
}

fn client(server: &MockServer) -> HubstaffClient {
    HubstaffClient::new(server.uri(), Credentials::new("test-token")).unwrap()
}

#[tokio::test]
async fn test_missing_path_param_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    for descriptor in catalog::all().iter().filter(|d| !d.path_params.is_empty()) {
        let err = client.execute(descriptor, &Args::new()).await.unwrap_err();
        assert!(err.is_validation(), "{} should fail validation", descriptor.name);

        let mut empty = Args::new();
        for param in descriptor.path_params {
            empty.insert(param.name.to_string(), json!(""));
        }
        let err = client.execute(descriptor, &empty).await.unwrap_err();
        assert!(err.is_validation());
    }

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_success_passes_body_through() {
    let mock_server = MockServer::start().await;
    let body = json!({"projects": [{"id": 3, "name": "Apollo"}]});

    Mock::given(method("GET"))
        .and(path("/v2/organizations/7/projects"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .call("retrieve_projects", &args(json!({"organization_id": "7"})))
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_query_params_reach_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/7/activities"))
        .and(query_param("page_limit", "50"))
        .and(query_param("page_start_id", "abc"))
        .and(query_param("time_slot[start]", "2024-05-01T00:00:00Z"))
        .and(query_param("user_ids", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"activities": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .call(
            "retrieve_activities",
            &args(json!({
                "organization_id": "7",
                "page_limit": 50,
                "page_start_id": "abc",
                "time_slot_start": "2024-05-01T00:00:00Z",
                "user_ids": ["1", "2"],
                "time_zone": ""
            })),
        )
        .await;

    assert!(result.is_ok());

    let requests = mock_server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["page_start_id", "page_limit", "time_slot[start]", "user_ids"]);
}

#[tokio::test]
async fn test_not_found_is_http_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .call("retrieve_user", &args(json!({"user_id": "99"})))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("not found"));
    match err {
        CallError::Http { message, .. } => assert_eq!(message, "not found"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .call("retrieve_client", &args(json!({"client_id": "5"})))
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locations": []})))
        .mount(&mock_server)
        .await;

    let client = HubstaffClient::new(mock_server.uri(), Credentials::none()).unwrap();
    client
        .call("retrieve_locations", &args(json!({"organization_id": "1"})))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).with_timeout(Duration::from_millis(100));
    let err = client
        .call("retrieve_attendance_shifts", &args(json!({"organization_id": "1"})))
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Timeout));
    assert_eq!(err.to_string(), "timeout");
}

#[tokio::test]
async fn test_caller_cancellation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let descriptor = catalog::find("retrieve_time_off_requests").unwrap();
    let err = client(&mock_server)
        .execute_until(
            descriptor,
            &args(json!({"organization_id": "1"})),
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Cancelled));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = HubstaffClient::new("http://127.0.0.1:1", Credentials::none()).unwrap();
    let err = client
        .call("retrieve_user", &args(json!({"user_id": "1"})))
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_concurrent_calls_do_not_interfere() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/1/members"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"members": ["one"]}))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/2/clients"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let members_args = args(json!({"project_id": "1"}));
    let clients_args = args(json!({"organization_id": "2"}));
    let (members, clients) = tokio::join!(
        client.call("retrieve_project_members", &members_args),
        client.call("retrieve_clients", &clients_args),
    );

    assert_eq!(members.unwrap(), json!({"members": ["one"]}));
    assert_eq!(clients.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_batch_preserves_request_order() {
    let mock_server = MockServer::start().await;

    for org in 1..=3 {
        Mock::given(method("GET"))
            .and(path(format!("/v2/organizations/{}/attendance_schedules", org)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"org": org}))
                    .set_delay(Duration::from_millis(30 * (4 - org))),
            )
            .mount(&mock_server)
            .await;
    }

    let mut requests: Vec<CallRequest> = (1..=3)
        .map(|org| {
            CallRequest::new(
                "retrieve_attendance_schedules",
                args(json!({"organization_id": org.to_string()})),
            )
        })
        .collect();
    requests.insert(1, CallRequest::new("retrieve_attendance_schedules", Args::new()));

    let results = batch::execute_all(&client(&mock_server), requests, 4).await;

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap()["org"], 1);
    assert!(results[1].as_ref().unwrap_err().is_validation());
    assert_eq!(results[2].as_ref().unwrap()["org"], 2);
    assert_eq!(results[3].as_ref().unwrap()["org"], 3);
}

#[tokio::test]
async fn test_fan_out_projects_per_organization() {
    let mock_server = MockServer::start().await;

    for org in [11, 12] {
        Mock::given(method("GET"))
            .and(path(format!("/v2/organizations/{}/projects", org)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": [{"organization_id": org}]})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/v2/organizations/13/projects"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Forbidden"})))
        .mount(&mock_server)
        .await;

    let arg_sets = [11, 12, 13]
        .iter()
        .map(|org| args(json!({"organization_id": org})))
        .collect();
    let results = batch::fan_out(&client(&mock_server), "retrieve_projects", arg_sets, 2).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["projects"][0]["organization_id"], 11);
    assert_eq!(results[1].as_ref().unwrap()["projects"][0]["organization_id"], 12);
    assert_eq!(results[2].as_ref().unwrap_err().status(), Some(403));
}

#[tokio::test]
async fn test_registry_tool_execution() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/8/last_activities"))
        .and(query_param("include_removed", "true"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&mock_server)
        .await;

    let registry = ToolRegistry::hubstaff(client(&mock_server));
    assert_eq!(registry.len(), 22);

    let tool = registry.get("retrieve_project_last_activities").unwrap();
    let result = tool
        .execute(json!({"project_id": "8", "include_removed": true}))
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.status, Some(403));
    assert_eq!(result.output["status"], 403);
    assert!(result.output["error"].as_str().unwrap().contains("forbidden"));
}
