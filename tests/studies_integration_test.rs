use opencga_client::{BearerAuth, OpencgaClient, OpencgaError, QueryOptions};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REST: &str = "/webservices/rest/v2";

/// Helper to create a client pointed at the mock server
fn create_test_client(server: &MockServer) -> OpencgaClient {
    OpencgaClient::new(server.uri(), BearerAuth::new("test-token"))
        .expect("Failed to create client")
}

/// Minimal response envelope holding the given results
fn envelope(results: Value) -> Value {
    json!({
        "apiVersion": "v2",
        "time": 5,
        "events": [],
        "responses": [{"time": 1, "numResults": 1, "results": results}]
    })
}

/// POST with entity as query parameter and the rule as body
#[tokio::test]
async fn test_update_permission_rules() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/studies/proj:study1/permissionRules/update", REST)))
        .and(query_param("entity", "SAMPLE"))
        .and(body_json(json!({"rule": "x"})))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": "rule1"}]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .studies()
        .update_permission_rules("proj:study1", "SAMPLE", Some(&json!({"rule": "x"})), QueryOptions::new())
        .await
        .expect("Failed to update permission rules");

    assert_eq!(response.first_result(), Some(&json!({"id": "rule1"})));

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<_> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("entity".to_string(), "SAMPLE".to_string())]);
}

/// Nested group endpoint uses both identifiers
#[tokio::test]
async fn test_update_users_of_group() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/studies/p:s1/groups/@members/users/update", REST)))
        .and(query_param("action", "ADD"))
        .and(body_json(json!({"users": ["alice", "bob"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let body = serde_json::to_value(opencga_client::GroupUpdateParams {
        id: None,
        users: vec!["alice".to_string(), "bob".to_string()],
    })
    .unwrap();

    client
        .studies()
        .update_users("p:s1", "@members", Some(&body), QueryOptions::new().set("action", "ADD"))
        .await
        .expect("Failed to update users");
}

/// GET endpoints never send a body, even with body-shaped options
#[tokio::test]
async fn test_groups_sends_no_body() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/studies/p:s1/groups", REST)))
        .and(query_param("id", "@admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": "@admins"}]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::new()
        .set("id", "@admins")
        .set("data", r#"{"users":["x"]}"#);
    client.studies().groups("p:s1", options).await.expect("Failed to fetch groups");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty(), "GET must not carry a body");
    assert_eq!(requests[0].url.query_pairs().count(), 2);
}

/// Variable set variables endpoint
#[tokio::test]
async fn test_update_variables() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/studies/p:s1/variableSets/vs1/variables/update", REST)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .studies()
        .update_variables("p:s1", "vs1", Some(&json!({"id": "age"})), QueryOptions::new().set("action", "REMOVE"))
        .await
        .expect("Failed to update variables");
}

/// Search puts the required project in the query string
#[tokio::test]
async fn test_search_studies() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/studies/search", REST)))
        .and(query_param("project", "user@proj"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": "s1"}, {"id": "s2"}]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .studies()
        .search("user@proj", QueryOptions::new().set("limit", 5))
        .await
        .expect("Failed to search studies");

    assert_eq!(response.all_results_size(), 2);
}

/// ACL update goes through the acl subcategory
#[tokio::test]
async fn test_update_acl() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/studies/acl/alice,bob/update", REST)))
        .and(body_json(json!({"study": "p:s1", "template": "analyst", "permissions": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let body = serde_json::to_value(opencga_client::AclUpdateParams {
        study: Some("p:s1".to_string()),
        template: Some("analyst".to_string()),
        ..Default::default()
    })
    .unwrap();

    client
        .studies()
        .update_acl("alice,bob", Some(&body), QueryOptions::new())
        .await
        .expect("Failed to update ACLs");
}

/// Info and POST without data: no body at all
#[tokio::test]
async fn test_info_and_update_without_body() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/studies/p:s1,p:s2/info", REST)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": "s1"}]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{}/studies/p:s1/update", REST)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.studies().info("p:s1,p:s2", QueryOptions::new()).await.expect("Failed to get info");
    client.studies().update("p:s1", None, QueryOptions::new()).await.expect("Failed to update");

    let requests = server.received_requests().await.unwrap();
    let post = requests.iter().find(|r| r.method.as_str() == "POST").unwrap();
    assert!(post.body.is_empty(), "POST without data must not carry a body");
    assert!(post.headers.get("content-type").is_none());
}

/// Required identifiers are checked before anything is sent
#[tokio::test]
async fn test_missing_required_arguments_fail_fast() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let result = client.studies().info("", QueryOptions::new()).await;
    assert!(matches!(result, Err(OpencgaError::MissingArgument(ref name)) if name == "studies"));

    let result = client
        .studies()
        .permission_rules("p:s1", " ", QueryOptions::new())
        .await;
    assert!(matches!(result, Err(OpencgaError::MissingArgument(ref name)) if name == "entity"));

    assert!(server.received_requests().await.unwrap().is_empty());
}
