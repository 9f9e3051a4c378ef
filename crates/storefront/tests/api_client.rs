mod common;

use common::{Upstream, api_config, fake_api, spawn};
use opentelemetry::Context;
use serde_json::{Value, json};
use shared::errors::ClientError;
use std::sync::{Arc, atomic::Ordering};
use storefront::service::HttpApiClient;

async fn client_with_retries(max_retries: usize) -> (HttpApiClient, Arc<Upstream>) {
    let upstream = Arc::new(Upstream::default());
    let addr = spawn(fake_api(upstream.clone())).await;

    let mut config = api_config(addr);
    config.max_retries = max_retries;

    (HttpApiClient::new(&config).unwrap(), upstream)
}

#[tokio::test]
async fn transient_read_failures_are_retried() {
    let (client, upstream) = client_with_retries(2).await;

    let data: Vec<u32> = client.get(&Context::new(), "flaky", &[]).await.unwrap();

    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(upstream.flaky_gets.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn reads_give_up_after_the_retry_budget() {
    let (client, upstream) = client_with_retries(1).await;

    let err = client
        .get::<Vec<u32>>(&Context::new(), "flaky", &[])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Http {
            status: 503,
            message: "try again".into()
        }
    );
    assert_eq!(upstream.flaky_gets.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn mutations_are_never_retried() {
    let (client, upstream) = client_with_retries(3).await;

    let err = client
        .post::<_, Value>(&Context::new(), "flaky", &json!({}))
        .await
        .unwrap_err();

    assert!(err.should_retry());
    assert_eq!(upstream.flaky_posts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpApiClient::new(&api_config(addr)).unwrap();
    let err = client
        .get::<Value>(&Context::new(), "products", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
}
