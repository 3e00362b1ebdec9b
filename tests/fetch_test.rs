//! Fetch-path tests against loopback stub servers.

use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use sitepeek::{extract_with_options, Error, Options};

/// Serve a router on an ephemeral loopback port, returning its base URL.
async fn serve(app: Router) -> String {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) => panic!("bind loopback listener: {err}"),
    };
    let addr = match listener.local_addr() {
        Ok(addr) => addr,
        Err(err) => panic!("listener address: {err}"),
    };

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

fn options() -> Options {
    Options {
        timeout: Duration::from_secs(2),
        ..Options::default()
    }
}

#[tokio::test]
async fn extracts_record_end_to_end() {
    let app = Router::new().route(
        "/",
        get(|| async {
            Html(
                r#"<html>
                  <head>
                    <meta property="og:title" content="Acme Design Tool" />
                    <meta property="og:description" content="Design faster." />
                    <meta property="og:image" content="/card.png" />
                  </head>
                  <body><img src="/a.png" /><img src="/a.png" /></body>
                </html>"#,
            )
        }),
    );
    let base = serve(app).await;

    let metadata = match extract_with_options(&base, &options()).await {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(metadata.name, "Acme Design Tool");
    assert_eq!(metadata.description, "Design faster.");
    assert_eq!(metadata.logo, format!("{base}/card.png"));
    assert_eq!(metadata.images, vec![format!("{base}/a.png")]);
}

#[tokio::test]
async fn bare_document_yields_host_fallbacks() {
    let app = Router::new().route("/", get(|| async { Html("<html><body></body></html>") }));
    let base = serve(app).await;

    let metadata = match extract_with_options(&base, &options()).await {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    // Loopback host is 127.0.0.1: the pre-dot label and favicon fallbacks
    assert_eq!(metadata.name, "127");
    assert_eq!(metadata.logo, "https://127.0.0.1/favicon.ico");
}

#[tokio::test]
async fn declared_charset_is_decoded() {
    let app = Router::new().route(
        "/",
        get(|| async {
            let body: &[u8] =
                b"<html><head><meta property=\"og:title\" content=\"Caf\xE9 Tools\"></head></html>";
            (
                [(header::CONTENT_TYPE, "text/html; charset=ISO-8859-1")],
                body,
            )
        }),
    );
    let base = serve(app).await;

    let metadata = match extract_with_options(&base, &options()).await {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(metadata.name, "Café Tools");
}

#[tokio::test]
async fn non_success_status_is_terminal() {
    let app = Router::new().route("/", get(|| async { StatusCode::NOT_FOUND }));
    let base = serve(app).await;

    let result = extract_with_options(&base, &options()).await;
    match result {
        Err(Error::HttpStatus(status)) => {
            assert_eq!(status, 404);
            assert_eq!(
                Error::HttpStatus(status).to_string(),
                "HTTP error! status: 404"
            );
        }
        other => panic!("expected Err(HttpStatus), got {other:?}"),
    }
}

#[tokio::test]
async fn silent_target_times_out() {
    // Accepts connections and never responds
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) => panic!("bind loopback listener: {err}"),
    };
    let addr = match listener.local_addr() {
        Ok(addr) => addr,
        Err(err) => panic!("listener address: {err}"),
    };

    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let _hold = socket;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });

    let opts = Options {
        timeout: Duration::from_millis(200),
        ..Options::default()
    };

    let result = extract_with_options(&format!("http://{addr}"), &opts).await;
    match result {
        Err(Error::Fetch(msg)) => assert!(msg.contains("timed out"), "got message {msg:?}"),
        other => panic!("expected Err(Fetch), got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_fetch_error() {
    // Bind then drop to obtain a port with no listener behind it
    let addr = {
        let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
            Ok(listener) => listener,
            Err(err) => panic!("bind loopback listener: {err}"),
        };
        match listener.local_addr() {
            Ok(addr) => addr,
            Err(err) => panic!("listener address: {err}"),
        }
    };

    let result = extract_with_options(&format!("http://{addr}"), &options()).await;
    match result {
        Err(Error::Fetch(_)) => {}
        other => panic!("expected Err(Fetch), got {other:?}"),
    }
}
