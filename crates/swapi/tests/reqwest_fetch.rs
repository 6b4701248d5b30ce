use sundry_swapi::{Fetch, ReqwestFetch, SwapiClient, SwapiConfig, SwapiError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Minimal HTTP server answering every request with the same JSON body.
struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, handle }
    }

    fn client(&self) -> SwapiClient<ReqwestFetch> {
        SwapiClient::with_config(
            ReqwestFetch::new(),
            SwapiConfig::default().with_base_url(self.base_url.clone()),
        )
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

const PLANETS: &str = r#"{"count":1,"next":null,"previous":null,"results":[{"name":"Alderaan","climate":"temperate"}]}"#;

#[tokio::test]
async fn reqwest_fetch_reads_status_and_body() {
    let server = TestServer::spawn(PLANETS).await;

    let response = ReqwestFetch::new()
        .get(&format!("{}/planets", server.base_url))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, PLANETS.as_bytes());
}

#[tokio::test]
async fn client_parses_planets_over_http() {
    let server = TestServer::spawn(PLANETS).await;

    let page = server.client().planets().await.unwrap();

    assert_eq!(page.count(), Some(1));
    let results = page.results();
    assert_eq!(results[0].name, "Alderaan");
    assert_eq!(results[0].attribute("climate"), Some("temperate"));
}

#[tokio::test]
async fn empty_http_body_is_unable_to_make_request() {
    let server = TestServer::spawn("").await;

    let err = server.client().planets().await.unwrap_err();

    assert!(matches!(err, SwapiError::EmptyBody));
    assert_eq!(err.to_string(), "unable to make request");
}

#[tokio::test]
async fn refused_connection_is_unable_to_make_request() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SwapiClient::with_config(
        ReqwestFetch::new(),
        SwapiConfig::default().with_base_url(format!("http://{}/api", addr)),
    );
    let err = client.planets().await.unwrap_err();

    assert!(matches!(err, SwapiError::Transport(_)));
    assert_eq!(err.to_string(), "unable to make request");
}
