//! VIES client tests against a local HTTP responder. No real network access.

#![cfg(feature = "vies")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use eurovat::CountryCode;
use eurovat::vies::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP response, returning the endpoint URL and a handle
/// that resolves to the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/check", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (url, handle)
}

/// Read headers plus a `Content-Length` body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

fn client(url: &str) -> ViesClient {
    ViesClient::new(
        ViesConfig::default()
            .with_endpoint(url)
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

/// Registry stand-in that counts lookups.
#[derive(Default)]
struct CountingRegistry {
    calls: AtomicUsize,
}

impl RegistryLookup for CountingRegistry {
    async fn lookup(
        &self,
        _country: CountryCode,
        _vat_number: &str,
    ) -> Result<ActivityStatus, ViesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ActivityStatus {
            active: true,
            name: None,
            address: None,
            request_date: None,
        })
    }
}

// ---------------------------------------------------------------------------
// ViesClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn active_number() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"countryCode":"DE","vatNumber":"136695976","requestDate":"2024-03-01T09:00:00.000Z","valid":true,"name":"ACME GMBH","address":"---"}"#,
    )
    .await;

    let status = client(&url)
        .check(CountryCode::DE, "136695976")
        .await
        .unwrap();
    assert!(status.active);
    assert_eq!(status.name.as_deref(), Some("ACME GMBH"));
    assert_eq!(status.address, None);
    assert_eq!(
        status.request_date,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
    );

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /check"));
    assert!(request.contains(r#""countryCode":"DE""#));
    assert!(request.contains(r#""vatNumber":"136695976""#));
    assert!(request.to_ascii_lowercase().contains("user-agent: eurovat/"));
}

#[tokio::test]
async fn inactive_number() {
    let (url, _server) = serve_once("200 OK", r#"{"valid":false,"userError":"INVALID"}"#).await;
    let status = client(&url)
        .check(CountryCode::NL, "123456789B13")
        .await
        .unwrap();
    assert!(!status.active);
}

#[tokio::test]
async fn member_state_unavailable_is_transient() {
    let (url, _server) = serve_once(
        "500 Internal Server Error",
        r#"{"actionSucceed":false,"errorWrappers":[{"error":"MS_UNAVAILABLE","message":"member state down"}]}"#,
    )
    .await;
    let err = client(&url)
        .check(CountryCode::FR, "40303265045")
        .await
        .unwrap_err();
    assert!(matches!(err, ViesError::ApiError { ref code, .. } if code == "MS_UNAVAILABLE"));
    assert!(err.is_transient());
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/check", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&url)
        .check(CountryCode::DE, "136695976")
        .await
        .unwrap_err();
    assert!(matches!(err, ViesError::Network(_)), "{err:?}");
    assert!(err.is_transient());
}

#[tokio::test]
async fn slow_registry_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/check", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = ViesClient::new(
        ViesConfig::default()
            .with_endpoint(&url)
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();
    let err = client.check(CountryCode::DE, "136695976").await.unwrap_err();
    assert_eq!(err, ViesError::Timeout);
}

// ---------------------------------------------------------------------------
// check_active
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_number_never_reaches_registry() {
    let registry = CountingRegistry::default();
    for raw in ["", "XX123456789", "DE12345678", "DE123456789"] {
        let err = check_active(&registry, raw).await.unwrap_err();
        assert!(matches!(err, ActiveCheckError::Invalid(_)), "{raw}: {err:?}");
    }
    assert_eq!(registry.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_number_is_looked_up_once() {
    let registry = CountingRegistry::default();
    let status = check_active(&registry, "de 136 695 976").await.unwrap();
    assert!(status.active);
    assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn check_active_sends_canonical_body() {
    let (url, server) = serve_once("200 OK", r#"{"valid":true}"#).await;
    let status = check_active(&client(&url), "GR 094-259-216").await.unwrap();
    assert!(status.active);

    let request = server.await.unwrap();
    assert!(request.contains(r#""countryCode":"EL""#));
    assert!(request.contains(r#""vatNumber":"094259216""#));
}

#[tokio::test]
async fn registry_failure_is_wrapped() {
    let (url, _server) = serve_once("503 Service Unavailable", "<html>down</html>").await;
    let err = check_active(&client(&url), "ATU13585627").await.unwrap_err();
    match err {
        ActiveCheckError::Registry(e) => {
            assert!(matches!(e, ViesError::Http { status: 503, .. }));
            assert!(e.is_transient());
        }
        other => panic!("expected registry error, got {other:?}"),
    }
}
