//! Local endpoints for exercising transport failures and TLS handling.

use std::sync::Arc;

use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Self-signed certificate for `localhost` / `127.0.0.1`
const CERT_DER: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/localhost.cert.der"
));
const KEY_DER: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/localhost.key.der"
));

/// Minimal successful listing response
pub(crate) const EMPTY_LIST_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: application/json\r\n\
Content-Length: 2\r\n\
Connection: close\r\n\r\n[]";

/// URL of a local port with nothing listening on it.
pub(crate) fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Serve `response` verbatim to the first connection, then close it.
pub(crate) async fn serve_raw_once(response: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            read_request_head(&mut stream).await;
            let _ = stream.write_all(response).await;
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

/// Serve `response` over TLS with a self-signed certificate.
pub(crate) async fn serve_tls(response: &'static [u8]) -> String {
    crate::tls::install_crypto_provider();
    let cert = CertificateDer::from(CERT_DER.to_vec());
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(KEY_DER.to_vec()));
    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(vec![cert], key)
        .expect("server certificate");
    let acceptor = tokio_rustls::TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // Handshake fails when the client rejects the certificate
                if let Ok(mut tls) = acceptor.accept(stream).await {
                    read_request_head(&mut tls).await;
                    let _ = tls.write_all(response).await;
                    let _ = tls.shutdown().await;
                }
            });
        }
    });
    format!("https://127.0.0.1:{}", addr.port())
}

async fn read_request_head<S: AsyncRead + Unpin>(stream: &mut S) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}
