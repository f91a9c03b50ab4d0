use opencga_client::{BearerAuth, OpencgaClient, OpencgaError, QueryOptions};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REST: &str = "/webservices/rest/v2";

fn create_test_client(server: &MockServer) -> OpencgaClient {
    OpencgaClient::new(server.uri(), BearerAuth::new("test-token"))
        .expect("Failed to create client")
}

fn envelope(results: Value) -> Value {
    json!({"apiVersion": "v2", "responses": [{"numResults": 1, "results": results}]})
}

/// Download returns the raw payload untouched
#[tokio::test]
async fn test_download_file() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/files/data:a.vcf/download", REST)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"##fileformat=VCFv4.2\n".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let bytes = client
        .files()
        .download("data:a.vcf", QueryOptions::new())
        .await
        .expect("Failed to download file");

    assert_eq!(&bytes[..], b"##fileformat=VCFv4.2\n");
}

/// Download errors map like any other call
#[tokio::test]
async fn test_download_missing_file() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/files/data:missing.vcf/download", REST)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "events": [{"type": "ERROR", "message": "File data:missing.vcf not found"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.files().download("data:missing.vcf", QueryOptions::new()).await;

    match result {
        Err(OpencgaError::ObjectNotFound(message)) => assert!(message.contains("not found")),
        other => panic!("Unexpected result: {:?}", other.map(|b| b.len())),
    }
}

/// Link jobs use the link/postlink subcategories
#[tokio::test]
async fn test_link_jobs() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    for sub in ["link", "postlink"] {
        Mock::given(method("POST"))
            .and(path(format!("{}/files/{}/run", REST, sub)))
            .and(body_json(json!({"files": ["a.vcf"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": "job"}]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server);
    let body = json!({"files": ["a.vcf"]});
    client.files().run_link(Some(&body), QueryOptions::new()).await.expect("link");
    client.files().run_postlink(Some(&body), QueryOptions::new()).await.expect("postlink");
}

/// Folder listing and content inspection endpoints
#[tokio::test]
async fn test_folder_and_content_endpoints() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    for (folder_or_file, resource) in [
        ("data:", "list"),
        ("data:", "tree"),
        ("data:a.vcf", "head"),
        ("data:a.vcf", "tail"),
        ("data:a.vcf", "grep"),
        ("data:a.vcf", "refresh"),
        ("data:a.png", "image"),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("{}/files/{}/{}", REST, folder_or_file, resource)))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server);
    let files = client.files();
    files.list("data:", QueryOptions::new()).await.expect("list");
    files.tree("data:", QueryOptions::new().set("maxDepth", 2)).await.expect("tree");
    files.head("data:a.vcf", QueryOptions::new().set("lines", 5)).await.expect("head");
    files.tail("data:a.vcf", QueryOptions::new()).await.expect("tail");
    files.grep("data:a.vcf", QueryOptions::new().set("pattern", "PASS")).await.expect("grep");
    files.refresh("data:a.vcf", QueryOptions::new()).await.expect("refresh");
    files.image("data:a.png", QueryOptions::new()).await.expect("image");
}

/// Catalog level endpoints without identifiers
#[tokio::test]
async fn test_catalog_endpoints() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    for resource in ["bioformats", "formats", "search", "aggregationStats"] {
        Mock::given(method("GET"))
            .and(path(format!("{}/files/{}", REST, resource)))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(format!("{}/files/distinct", REST)))
        .and(query_param("field", "format"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(["VCF", "BAM"]))))
        .expect(1)
        .mount(&server)
        .await;
    for resource in ["create", "fetch", "link", "upload"] {
        Mock::given(method("POST"))
            .and(path(format!("{}/files/{}", REST, resource)))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server);
    let files = client.files();
    let body = json!({"path": "data/"});

    files.bioformats().await.expect("bioformats");
    files.formats().await.expect("formats");
    files.search(QueryOptions::new().set("format", "VCF")).await.expect("search");
    files.aggregation_stats(QueryOptions::new()).await.expect("stats");
    files.distinct("format", QueryOptions::new()).await.expect("distinct");
    files.create(Some(&body), QueryOptions::new()).await.expect("create");
    files.fetch(Some(&body), QueryOptions::new()).await.expect("fetch");
    files.link(Some(&body), QueryOptions::new()).await.expect("link");
    files.upload(QueryOptions::new().set("fileName", "a.vcf")).await.expect("upload");
}

/// Identified endpoints, including the ACL and annotation slots
#[tokio::test]
async fn test_identified_endpoints() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    let mocks = [
        ("GET", "files/data:a.vcf/info"),
        ("GET", "files/data:a.vcf/acl"),
        ("POST", "files/data:a.vcf/update"),
        ("DELETE", "files/data:a.vcf/delete"),
        ("DELETE", "files/data:a.vcf/unlink"),
        ("POST", "files/acl/alice/update"),
        ("POST", "files/annotationSets/load"),
        ("POST", "files/data:a.vcf/annotationSets/as1/annotations/update"),
    ];
    for (verb, route) in mocks {
        Mock::given(method(verb))
            .and(path(format!("{}/{}", REST, route)))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server);
    let files = client.files();
    let body = json!({"description": "d"});

    files.info("data:a.vcf", QueryOptions::new()).await.expect("info");
    files.acl("data:a.vcf", QueryOptions::new()).await.expect("acl");
    files.update("data:a.vcf", Some(&body), QueryOptions::new()).await.expect("update");
    files.delete("data:a.vcf", QueryOptions::new()).await.expect("delete");
    files.unlink("data:a.vcf", QueryOptions::new()).await.expect("unlink");
    files.update_acl("alice", "ADD", Some(&body), QueryOptions::new()).await.expect("acl update");
    files
        .load_annotation_sets("vs1", "data:a.tsv", None, QueryOptions::new())
        .await
        .expect("load annotation sets");
    files
        .update_annotations("data:a.vcf", "as1", Some(&body), QueryOptions::new())
        .await
        .expect("update annotations");
}
