#![allow(dead_code, missing_docs, clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use mercadopago::{
    Config, HttpClient, HttpClientError, HttpRequest, HttpResponse, MercadoPagoClient,
};

type Handler = Box<dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync>;

/// Backend that records every request and answers from a handler.
pub struct StubHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    handler: Handler,
}

impl StubHttpClient {
    pub fn new(handler: impl Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    /// Always answer `status` with `body`.
    pub fn replying(status: u16, body: &'static str) -> Self {
        Self::new(move |_| json_response(status, body))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for StubHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }
}

pub fn json_response(status: u16, body: impl Into<Bytes>) -> HttpResponse {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", "application/json".parse().unwrap());
    HttpResponse {
        status: StatusCode::from_u16(status).unwrap(),
        headers,
        body: body.into(),
    }
}

pub const TEST_TOKEN: &str = "TEST-4849723703374061-053108";

pub fn client(stub: StubHttpClient) -> MercadoPagoClient<StubHttpClient> {
    MercadoPagoClient::with_http_client(Config::new(TEST_TOKEN).unwrap(), stub)
}

/// The request the client sent, parsed for assertions.
pub fn sent(client: &MercadoPagoClient<StubHttpClient>) -> HttpRequest {
    client.transport().http_client().last_request()
}

/// Decoded JSON body of a request.
pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_ref().unwrap()).unwrap()
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// A listener that accepts connections into its backlog but never answers.
pub fn silent_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Answer exactly one HTTP request with `status` and a JSON `body`, then close.
pub fn serve_once(status: u16, body: &'static str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut byte = [0_u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            if stream.read(&mut byte).unwrap() == 0 {
                break;
            }
            head.push(byte[0]);
        }
        let reason = StatusCode::from_u16(status)
            .unwrap()
            .canonical_reason()
            .unwrap_or("");
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });
    port
}
