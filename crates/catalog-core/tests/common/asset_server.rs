//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of paths, each with its own status, content type and
//! body. Unknown paths get 404. An asset may require a User-Agent prefix and
//! answers 403 to any other client.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Asset {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// If set, requests whose User-Agent does not start with this get 403.
    pub user_agent_prefix: Option<&'static str>,
}

impl Asset {
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
            user_agent_prefix: None,
        }
    }

    /// Serve only to clients whose User-Agent starts with `prefix`.
    pub fn requiring_user_agent(mut self, prefix: &'static str) -> Self {
        self.user_agent_prefix = Some(prefix);
        self
    }
}

/// Starts a server in a background thread serving `assets` keyed by request path
/// (e.g. "/icon.png"). Returns the base URL without trailing slash
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(assets: Vec<(&'static str, Asset)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let assets: Arc<HashMap<&'static str, Asset>> = Arc::new(assets.into_iter().collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let assets = Arc::clone(&assets);
            thread::spawn(move || handle(stream, &assets));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, assets: &HashMap<&'static str, Asset>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);

    let (status, content_type, body): (u16, &str, &[u8]) = match assets.get(path) {
        Some(asset) => match asset.user_agent_prefix {
            Some(prefix) if !user_agent.is_some_and(|ua| ua.starts_with(prefix)) => {
                (403, "text/plain", b"forbidden")
            }
            _ => (asset.status, asset.content_type, &asset.body),
        },
        None => (404, "text/plain", b"not found"),
    };
    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (request path, optional User-Agent header value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let user_agent = lines
        .take_while(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim());
    (path, user_agent)
}
