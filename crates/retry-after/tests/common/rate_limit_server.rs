//! Minimal HTTP/1.1 server that rate limits its first requests, for integration tests.
//!
//! The first `throttle` requests get `429 Too Many Requests` (with `Retry-After`
//! when configured); later ones get `200 OK` whose body echoes the request
//! method and body as `"<METHOD> <body>"`.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RateLimitOptions {
    /// Number of leading requests answered with 429.
    pub throttle: usize,
    /// `Retry-After` value sent with each 429; `None` omits the header.
    pub retry_after: Option<String>,
}

impl Default for RateLimitOptions {
    fn default() -> Self {
        Self {
            throttle: 1,
            retry_after: Some("5".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub body: Vec<u8>,
}

pub struct RateLimitServer {
    pub url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl RateLimitServer {
    /// Requests received so far, in arrival order.
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start(opts: RateLimitOptions) -> RateLimitServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let server_seen = Arc::clone(&seen);
    thread::spawn(move || {
        // Sequential on purpose: request order decides who gets throttled.
        for stream in listener.incoming().flatten() {
            handle(stream, &server_seen, &opts);
        }
    });
    RateLimitServer {
        url: format!("http://127.0.0.1:{}/", port),
        seen,
    }
}

fn handle(mut stream: TcpStream, seen: &Mutex<Vec<SeenRequest>>, opts: &RateLimitOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };

    let index = {
        let mut seen = seen.lock().unwrap();
        seen.push(request.clone());
        seen.len()
    };

    let response = if index <= opts.throttle {
        let retry_after = opts
            .retry_after
            .as_deref()
            .map(|v| format!("Retry-After: {}\r\n", v))
            .unwrap_or_default();
        format!(
            "HTTP/1.1 429 Too Many Requests\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
            retry_after
        )
        .into_bytes()
    } else {
        let mut body = format!("{} ", request.method).into_bytes();
        body.extend_from_slice(&request.body);
        let mut out = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        out.extend_from_slice(&body);
        out
    };
    let _ = stream.write_all(&response);
}

/// Reads the request head plus `Content-Length` bytes of body.
fn read_request(stream: &mut TcpStream) -> Option<SeenRequest> {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    let head_end = loop {
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    };

    let head = std::str::from_utf8(&data[..head_end]).ok()?.to_string();
    let mut lines = head.lines();
    let method = lines.next()?.split_whitespace().next()?.to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < head_end + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    let body_end = (head_end + content_length).min(data.len());
    Some(SeenRequest {
        method,
        body: data[head_end..body_end].to_vec(),
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
