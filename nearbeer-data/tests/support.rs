//! Shared helpers for the HTTP adapter behaviour tests.
//!
//! [`StubServer`] answers exactly one request on a loopback port with a
//! canned response and records the request line it received.

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// A single-shot HTTP server on `127.0.0.1`.
pub struct StubServer {
    base_url: String,
    requests: Receiver<String>,
}

impl StubServer {
    /// Reply to the first request with `status` and a JSON `body`.
    pub fn respond(status: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        Self::spawn(Some(response))
    }

    /// Accept the first request and never reply.
    pub fn silent() -> Self {
        Self::spawn(None)
    }

    fn spawn(response: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let address = listener.local_addr().expect("listener address");
        let (sender, requests) = mpsc::channel();
        thread::spawn(move || serve_once(&listener, response.as_deref(), &sender));
        Self {
            base_url: format!("http://{address}"),
            requests,
        }
    }

    /// Root URL of the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request line of the request served, e.g. `GET /search?q=x HTTP/1.1`.
    pub fn request_line(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server should have received a request")
    }
}

fn serve_once(
    listener: &TcpListener,
    response: Option<&str>,
    sender: &Sender<String>,
) -> io::Result<()> {
    let (mut stream, _) = listener.accept()?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" {
            break;
        }
    }
    sender
        .send(request_line.trim_end().to_owned())
        .map_err(io::Error::other)?;
    match response {
        Some(text) => {
            stream.write_all(text.as_bytes())?;
            stream.flush()
        }
        // Hold the connection open past any client timeout.
        None => {
            thread::sleep(Duration::from_secs(5));
            Ok(())
        }
    }
}

/// Directory containing on-disk fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
