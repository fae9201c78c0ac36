//! Static file server for the SolutPag site
//!
//! Serves the Trunk build from dist/ on port 8080. Unknown paths fall back to index.html so
//! client-side routes like /dashboard/sale survive a reload.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = match TcpListener::bind(ADDR) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", ADDR, e);
            return;
        }
    };

    println!("SolutPag site running at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

    let file = resolve(path);
    let (status, content_type, body) = match fs::read(&file) {
        Ok(contents) => ("200 OK", content_type(&file), contents),
        Err(_) => match fs::read(index_path()) {
            Ok(contents) => ("200 OK", "text/html; charset=utf-8", contents),
            Err(e) => {
                eprintln!("index.html not readable: {}", e);
                (
                    "404 NOT FOUND",
                    "text/html; charset=utf-8",
                    b"<!DOCTYPE html><html><body><h1>Build not found. Run trunk build first.</h1></body></html>"
                        .to_vec(),
                )
            }
        },
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

fn index_path() -> PathBuf {
    Path::new(DIST).join("index.html")
}

/// Map a request path into dist/, refusing parent traversal. Directories and missing files
/// resolve to index.html.
fn resolve(path: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    if relative.is_empty() || relative.split('/').any(|part| part == "..") {
        return index_path();
    }

    let candidate = Path::new(DIST).join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index_path()
    }
}

fn content_type(file: &Path) -> &'static str {
    let ext = file.extension().and_then(|s| s.to_str());
    match ext {
        Some("html") | None => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
