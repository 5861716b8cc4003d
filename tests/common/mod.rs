#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

use gwosc::urls::catalog_event_url;
use gwosc::{Error, JsonFetcher, Result};
use serde_json::{json, Value};

pub const HOST: &str = "http://gwosc.test";

/// What the scripted fetcher answers for one URL.
pub enum Reply {
    Json(Value),
    Status(u16),
    Unreachable,
    Garbage(&'static str),
}

/// In-memory fetcher that answers from a script and records every URL asked for.
///
/// URLs without a scripted reply answer with a 404.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases `1..=count` of `event` exist on `HOST`.
    pub fn with_releases(event: &str, count: u32) -> Self {
        let mut fetcher = Self::new();
        for version in 1..=count {
            fetcher = fetcher.reply(
                &catalog_event_url(HOST, event, version),
                Reply::Json(release_record(event, version)),
            );
        }
        fetcher
    }

    pub fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl JsonFetcher for ScriptedFetcher {
    fn fetch(&self, url: &str) -> Result<Value> {
        self.calls.borrow_mut().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(code)) => Err(status_error(url, *code)),
            Some(Reply::Unreachable) => Err(Error::Transport {
                url: url.to_string(),
                status: None,
                message: "connection refused".to_string(),
            }),
            Some(Reply::Garbage(body)) => Err(Error::MalformedResponse {
                url: url.to_string(),
                source: serde_json::from_str::<Value>(body)
                    .expect_err("garbage reply must not parse"),
            }),
            None => Err(status_error(url, 404)),
        }
    }
}

fn status_error(url: &str, code: u16) -> Error {
    Error::Transport {
        url: url.to_string(),
        status: Some(code),
        message: format!("server returned status {code}"),
    }
}

pub fn release_record(event: &str, version: u32) -> Value {
    json!({
        "release": format!("{event}-v{version}"),
        "commonName": event,
        "version": version,
    })
}

/// Catalog event URLs for `versions` on `HOST`.
pub fn probe_urls(event: &str, versions: impl IntoIterator<Item = u32>) -> Vec<String> {
    versions
        .into_iter()
        .map(|v| catalog_event_url(HOST, event, v))
        .collect()
}

/// Minimal blocking HTTP server that answers canned responses by path and
/// records the request paths it served.
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Vec<(&str, u16, &[u8])> = routes
            .iter()
            .map(|(path, status, body)| (*path, *status, body.as_bytes()))
            .collect();
        Self::start_bytes(&routes)
    }

    /// Like [`MockServer::start`], for bodies that are not valid UTF-8.
    pub fn start_bytes(routes: &[(&str, u16, &[u8])]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let routes: Vec<(String, u16, Vec<u8>)> = routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), *status, body.to_vec()))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    break;
                };
                let path = read_request_path(&mut stream);
                log.lock().unwrap().push(path.clone());

                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|(_, status, body)| (*status, body.as_slice()))
                    .unwrap_or((404, b"not found".as_slice()));
                let head = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    reason(status),
                    body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(body);
                let _ = stream.flush();
            }
        });

        Self { addr, requests }
    }

    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.host(), path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request_path(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        410 => "Gone",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A host on which nothing is listening.
pub fn unreachable_host() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
