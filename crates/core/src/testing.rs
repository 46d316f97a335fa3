//! Test doubles: scripted sources, a manual clock, a recording canvas and a
//! one-shot loopback HTTP server.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::error::{DisplayError, FetchError};
use crate::render::{Canvas, DrawCommand};
use crate::sources::DataSource;
use crate::uptime::Uptime;

/// Uptime counter set by hand. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ManualUptime {
    now: Arc<AtomicU32>,
}

impl ManualUptime {
    pub fn set(&self, millis: u32) {
        self.now.store(millis, Ordering::Relaxed);
    }
}

impl Uptime for ManualUptime {
    fn millis(&self) -> u32 {
        self.now.load(Ordering::Relaxed)
    }
}

/// Source that replays queued outcomes, then fails once the queue is empty.
pub struct ScriptedSource<V> {
    name: &'static str,
    outcomes: Mutex<VecDeque<Result<V, FetchError>>>,
    calls: AtomicUsize,
}

impl<V> ScriptedSource<V> {
    pub fn new(name: &'static str, outcomes: Vec<Result<V, FetchError>>) -> Self {
        Self {
            name,
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<V: Send> DataSource for ScriptedSource<V> {
    type Value = V;

    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self) -> Result<V, FetchError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("connection refused".to_string())))
    }
}

/// Canvas that records every successful primitive.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    broken: bool,
}

impl RecordingCanvas {
    /// A canvas whose every primitive fails.
    pub fn failing() -> Self {
        Self {
            commands: Vec::new(),
            broken: true,
        }
    }

    pub fn count(&self, command: &DrawCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }

    pub fn last_print(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Print(text) => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), DisplayError> {
        if self.broken {
            return Err(DisplayError::Communication);
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.record(DrawCommand::Clear)
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        self.record(DrawCommand::SetCursor { x, y })
    }

    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError> {
        self.record(DrawCommand::SetTextSize(size))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.record(DrawCommand::Print(text.to_string()))
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.record(DrawCommand::Present)
    }
}

/// Answer a single HTTP request on loopback with `status` and `body`.
///
/// Returns the URL to request. `status` is the full status text, e.g.
/// `"503 Service Unavailable"`.
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        // Drain the request head before answering.
        let mut request: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });

    format!("http://{}/", addr)
}
