//! Pagination walker tests against a mock server.

use futures_util::TryStreamExt;
use opsmngr::services::Cluster;
use opsmngr::{CancellationToken, Client, HyperTransport, ListOptions};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLUSTERS_PATH: &str = "/api/public/v1.0/groups/g1/clusters";

fn client_for(server: &MockServer) -> Client {
    Client::builder(HyperTransport::new())
        .base_url(server.uri())
        .build()
        .expect("client")
}

fn first_page_options() -> ListOptions {
    ListOptions {
        page_num: Some(1),
        items_per_page: Some(1),
    }
}

fn cluster(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "groupId": "g1",
        "clusterName": format!("cluster-{id}"),
        "typeName": "REPLICA_SET"
    })
}

fn page_body(uri: &str, page: u32, last: bool) -> serde_json::Value {
    let mut links = vec![serde_json::json!({
        "rel": "self",
        "href": format!("{uri}{CLUSTERS_PATH}?pageNum={page}")
    })];
    if !last {
        links.push(serde_json::json!({
            "rel": "next",
            "href": format!("{uri}{CLUSTERS_PATH}?pageNum={}", page + 1)
        }));
    }
    serde_json::json!({
        "links": links,
        "results": [cluster(&format!("c{page}"))],
        "totalCount": 3
    })
}

async fn mount_page(server: &MockServer, page: u32, last: bool) {
    Mock::given(method("GET"))
        .and(path(CLUSTERS_PATH))
        .and(query_param("pageNum", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), page, last)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn walker_yields_three_pages_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, 1, false).await;
    mount_page(&server, 2, false).await;
    mount_page(&server, 3, true).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let mut walker = client
        .clusters()
        .walk(&cancel, "g1", Some(&first_page_options()))
        .expect("walker");

    let mut ids = Vec::new();
    while let Some(page) = walker.try_next().await.expect("page") {
        ids.extend(page.results.into_iter().map(|cluster| cluster.id));
    }

    assert_eq!(ids, ["c1", "c2", "c3"]);
    assert!(walker.try_next().await.expect("finished").is_none());
}

#[tokio::test]
async fn page_without_next_link_ends_the_walk() {
    let server = MockServer::start().await;
    // expect(1) verifies no second fetch is attempted.
    mount_page(&server, 1, true).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let mut walker = client
        .clusters()
        .walk(&cancel, "g1", Some(&first_page_options()))
        .expect("walker");

    let page = walker.try_next().await.expect("page").expect("some");
    assert_eq!(page.results.len(), 1);
    assert!(walker.try_next().await.expect("finished").is_none());
}

#[tokio::test]
async fn failed_page_fetch_surfaces_the_api_error() {
    let server = MockServer::start().await;
    mount_page(&server, 1, false).await;

    Mock::given(method("GET"))
        .and(path(CLUSTERS_PATH))
        .and(query_param("pageNum", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": "SERVICE_UNAVAILABLE",
            "detail": "maintenance window",
            "errorCode": 503
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let mut walker = client
        .clusters()
        .walk(&cancel, "g1", Some(&first_page_options()))
        .expect("walker");

    // The page yielded before the failure stays valid.
    let first = walker.try_next().await.expect("page").expect("some");
    assert_eq!(first.results.first().map(|c| c.id.as_str()), Some("c1"));

    let err = walker.try_next().await.expect_err("failure");
    let api = err.api_error().expect("api error");
    assert_eq!(api.code, 503);
    assert_eq!(api.reason, "SERVICE_UNAVAILABLE");

    // The walk is over; nothing is retried.
    assert!(walker.try_next().await.expect("finished").is_none());
}

#[tokio::test]
async fn items_flattens_every_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, false).await;
    mount_page(&server, 2, true).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let walker = client
        .clusters()
        .walk(&cancel, "g1", Some(&first_page_options()))
        .expect("walker");

    let clusters = walker.items().await.expect("items");
    let ids: Vec<&str> = clusters.iter().map(|cluster| cluster.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2"]);
}

#[tokio::test]
async fn stream_adapter_walks_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, false).await;
    mount_page(&server, 2, true).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let walker = client
        .clusters()
        .walk(&cancel, "g1", Some(&first_page_options()))
        .expect("walker");

    let pages: Vec<opsmngr::Page<Cluster>> = walker
        .into_stream()
        .try_collect()
        .await
        .expect("pages");
    assert_eq!(pages.len(), 2);
    assert!(pages.first().is_some_and(opsmngr::Page::has_next));
    assert!(pages.last().is_some_and(|page| !page.has_next()));
}

#[tokio::test]
async fn walk_from_continues_after_a_fetched_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, false).await;
    mount_page(&server, 2, true).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let first = client
        .clusters()
        .list(&cancel, "g1", Some(&first_page_options()))
        .await
        .expect("first page");

    let mut walker = client.walk_from(&cancel, first);

    let replay = walker.try_next().await.expect("page").expect("some");
    assert_eq!(replay.results.first().map(|c| c.id.as_str()), Some("c1"));

    let second = walker.try_next().await.expect("page").expect("some");
    assert_eq!(second.results.first().map(|c| c.id.as_str()), Some("c2"));

    assert!(walker.try_next().await.expect("finished").is_none());
}
