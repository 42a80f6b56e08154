//! Dymaxion conversion service.
//!
//! A thin TCP wrapper around [`xs_dymax::DymaxConverter`]: one JSON request
//! per line, one JSON response per line. Malformed payloads and rejected
//! coordinates come back as error responses; the process never crashes on
//! input.
//!
//! # Protocol
//!
//! Request:  `{"lng": -77.0367, "lat": 38.8951, "include_lcd": true}`
//! Response: `{"x": 3.3032683375782588, "y": 1.5338148735451902, "lcd": 3}`
//! Error:    `{"error": "latitude or longitude argument was outside of acceptable range"}`
//!
//! # Example
//!
//! ```bash
//! xs-dymax-serve --listen 0.0.0.0:4242
//! ```

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};
use xs_dymax::{DymaxConverter, GeometryTable};

/// Dymaxion projection TCP service
#[derive(Parser, Debug)]
#[command(name = "xs-dymax-serve")]
#[command(about = "TCP service exposing the Dymaxion map conversion")]
struct Args {
  /// Listen address
  #[arg(long, default_value = "0.0.0.0:4242", env = "XS_DYMAX_LISTEN")]
  listen: SocketAddr,
}

/// One conversion request.
#[derive(Debug, Deserialize)]
struct ConvertRequest {
  /// Longitude in degrees.
  lng: f64,
  /// Latitude in degrees.
  lat: f64,
  /// Include the LCD sub-triangle index in the response.
  #[serde(default)]
  include_lcd: bool,
}

/// One conversion response: a planar point, or an error message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ConvertResponse {
  Point {
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    lcd: Option<usize>,
  },
  Error {
    error: String,
  },
}

/// Parses one request line and runs it through the converter. All failure
/// modes become error responses.
fn handle_request(converter: &DymaxConverter, line: &str) -> ConvertResponse {
  let request: ConvertRequest = match serde_json::from_str(line) {
    Ok(request) => request,
    Err(e) => {
      return ConvertResponse::Error {
        error: format!("malformed request: {e}"),
      }
    }
  };

  match converter.try_convert(request.lng, request.lat) {
    Ok((point, lcd)) => ConvertResponse::Point {
      x: point.x,
      y: point.y,
      lcd: request.include_lcd.then_some(lcd),
    },
    Err(e) => ConvertResponse::Error { error: e.to_string() },
  }
}

async fn handle_connection(converter: Arc<DymaxConverter>, stream: TcpStream, peer: SocketAddr) {
  let (read_half, mut write_half) = stream.into_split();
  let mut lines = BufReader::new(read_half).lines();

  loop {
    match lines.next_line().await {
      Ok(Some(line)) => {
        if line.trim().is_empty() {
          continue;
        }
        let response = handle_request(&converter, &line);
        // Serializing these response shapes cannot fail; fall back to a
        // fixed error document to keep the contract line-oriented anyway.
        let mut payload = serde_json::to_string(&response)
          .unwrap_or_else(|_| r#"{"error":"internal serialization failure"}"#.to_owned());
        payload.push('\n');
        if let Err(e) = write_half.write_all(payload.as_bytes()).await {
          debug!(%peer, error = %e, "write failed, closing connection");
          return;
        }
      }
      Ok(None) => {
        debug!(%peer, "connection closed by client");
        return;
      }
      Err(e) => {
        warn!(%peer, error = %e, "read failed, closing connection");
        return;
      }
    }
  }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
  let filter =
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = Args::parse();

  // Build the geometry tables before accepting the first request.
  let _ = GeometryTable::get();
  let converter = Arc::new(DymaxConverter::new());

  let listener = TcpListener::bind(args.listen).await?;
  info!(addr = %args.listen, "dymax conversion service listening");

  loop {
    let (stream, peer) = listener.accept().await?;
    debug!(%peer, "accepted connection");
    let converter = Arc::clone(&converter);
    tokio::spawn(handle_connection(converter, stream, peer));
  }
}
