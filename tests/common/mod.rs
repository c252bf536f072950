#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Cursor, Write},
    net::TcpListener,
    path::Path,
    thread,
    time::Duration,
};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use lessonart_lib::{
    core::config::ProvisionerConfig,
    provisioner::{AssetProducer, Provisioner},
};

#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    pub fn png(body: Vec<u8>) -> Self {
        Self::ok("image/png", body)
    }
}

/// One-connection-at-a-time HTTP/1.1 server on an ephemeral localhost port.
/// Unknown paths answer 404.
pub struct TestServer {
    base: String,
}

impl TestServer {
    pub fn start(routes: HashMap<String, Route>) -> Self {
        // Keep loopback traffic off any proxy configured in the environment.
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        std::env::set_var("no_proxy", "127.0.0.1,localhost");

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                let Ok(read_half) = stream.try_clone() else {
                    continue;
                };
                let mut reader = BufReader::new(read_half);
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                    }
                }

                let target = request_line.split_whitespace().nth(1).unwrap_or("/");
                let path = target.split('?').next().unwrap_or(target);
                let route = routes.get(path).cloned().unwrap_or(Route {
                    status: 404,
                    content_type: "text/plain",
                    body: b"not found".to_vec(),
                });
                let reason = match route.status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Error",
                };
                let head = format!(
                    "HTTP/1.1 {} {reason}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    route.status,
                    route.content_type,
                    route.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&route.body);
                let _ = stream.flush();
            }
        });
        Self {
            base: format!("http://{addr}"),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Value for `ProvisionerConfig::commons_file_path_base`.
    pub fn file_path_base(&self) -> String {
        self.url("/wiki/Special:FilePath/")
    }
}

/// A localhost URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/missing.png")
}

pub fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn test_config(output_dir: &Path, commons_base: Option<String>) -> ProvisionerConfig {
    let mut config = ProvisionerConfig {
        output_dir: output_dir.to_path_buf(),
        fetch_delay: Duration::ZERO,
        request_timeout: Duration::from_secs(5),
        ..ProvisionerConfig::default()
    };
    if let Some(base) = commons_base {
        config.commons_file_path_base = base;
    }
    config
}

pub fn provisioner(config: &ProvisionerConfig) -> Provisioner<AssetProducer> {
    let producer = AssetProducer::from_config(config).expect("producer should build");
    Provisioner::new(producer, config.output_dir.clone(), config.fetch_delay)
}

pub fn read_sources(dir: &Path) -> serde_json::Map<String, serde_json::Value> {
    let raw = std::fs::read_to_string(dir.join("sources.json")).expect("sources.json should exist");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("sources.json should be JSON");
    value.as_object().cloned().expect("sources.json should be an object")
}

pub fn assert_record_shape(record: &serde_json::Value) {
    let object = record.as_object().expect("record should be an object");
    assert_eq!(object.len(), 4, "unexpected fields: {object:?}");
    for key in ["source", "license", "description"] {
        assert!(object.get(key).and_then(|v| v.as_str()).is_some(), "{key} should be a string");
    }
    let size = object
        .get("size_kb")
        .and_then(|v| v.as_f64())
        .expect("size_kb should be a number");
    assert!(size >= 0.0);
}
