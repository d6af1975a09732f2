//! Server-sent event decoding for streaming chat completions
//!
//! Upstream bytes arrive in arbitrary pieces: a read may end inside a line or
//! inside a multi-byte character. [`LineDecoder`] carries both kinds of
//! remainder between reads, and [`decode_stream`] runs it inside a spawned
//! task that forwards each text delta over a bounded channel as soon as its
//! line is complete.

use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::error::LlmError;
use crate::protocol::together::delta_content;
use crate::types::TextStream;

/// Prefix of every inspected SSE line
pub const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of an upstream stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// Incremental UTF-8 line splitter
#[derive(Debug, Default)]
pub struct LineDecoder {
    /// Undecoded bytes, at most one incomplete character
    pending: Vec<u8>,
    /// Decoded text after the last newline
    partial: String,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one read worth of bytes, returning every line it completed
    ///
    /// Returned lines exclude the terminator (`\n` or `\r\n`). Text after
    /// the last newline stays buffered for the next call.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(bytes);

        // `partial` holds no newline between calls, only new text needs a scan
        let scanned = self.partial.len();
        self.decode_pending();

        let Some(end) = self.partial[scanned..].rfind('\n').map(|i| scanned + i) else {
            return Vec::new();
        };

        let rest = self.partial.split_off(end + 1);
        let complete = std::mem::replace(&mut self.partial, rest);

        complete.lines().map(str::to_owned).collect()
    }

    /// Flush whatever is left once the upstream has finished
    ///
    /// A dangling incomplete character becomes U+FFFD.
    pub fn finish(mut self) -> Option<String> {
        if !self.pending.is_empty() {
            self.partial.push_str(&String::from_utf8_lossy(&self.pending));
        }

        let rest = self.partial.trim_end_matches('\r');
        (!rest.is_empty()).then(|| rest.to_owned())
    }

    fn decode_pending(&mut self) {
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    self.partial.push_str(text);
                    self.pending.clear();
                    return;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    self.partial.push_str(&String::from_utf8_lossy(&self.pending[..valid]));

                    match e.error_len() {
                        // Character split across reads, wait for the rest
                        None => {
                            self.pending.drain(..valid);
                            return;
                        }
                        Some(len) => {
                            self.partial.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                    }
                }
            }
        }
    }
}

/// Meaning of one complete SSE line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Text to forward downstream
    Delta(String),
    /// Upstream completion sentinel
    Done,
    /// Not a data line, or a data line carrying no text
    Ignored,
}

/// Classify a single SSE line
///
/// # Errors
///
/// Returns the JSON error for a data line whose payload does not parse.
pub fn parse_line(line: &str) -> Result<Frame, serde_json::Error> {
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Ok(Frame::Ignored);
    };

    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return Ok(Frame::Done);
    }

    let chunk: serde_json::Value = serde_json::from_str(payload)?;

    Ok(delta_content(&chunk)
        .filter(|content| !content.is_empty())
        .map_or(Frame::Ignored, |content| Frame::Delta(content.to_owned())))
}

/// Spawn a decode task turning an SSE byte stream into a [`TextStream`]
///
/// At most `capacity` decoded chunks are buffered; beyond that the task
/// waits for the consumer. Dropping the returned stream stops the task and
/// releases the upstream body. Must be called within a Tokio runtime.
pub fn decode_stream<S, B, E>(upstream: S, capacity: usize) -> TextStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));

    tokio::spawn(pump(upstream, tx));

    Box::pin(futures_util::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|item| (item, rx))
    }))
}

async fn pump<S, B, E>(upstream: S, tx: mpsc::Sender<Result<String, LlmError>>)
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut upstream = std::pin::pin!(upstream);
    let mut decoder = LineDecoder::new();

    loop {
        let next = tokio::select! {
            biased;
            () = tx.closed() => {
                tracing::debug!("stream consumer went away, dropping upstream connection");
                return;
            }
            next = upstream.next() => next,
        };

        match next {
            Some(Ok(bytes)) => {
                for line in decoder.push(bytes.as_ref()) {
                    if !forward_line(&tx, &line).await {
                        return;
                    }
                }
            }
            Some(Err(e)) => {
                tracing::error!(error = %e, "stream processing failed");
                // Receiver may already be gone; nothing left to notify
                let _ = tx.send(Err(LlmError::Stream(e.to_string()))).await;
                return;
            }
            None => break,
        }
    }

    if let Some(line) = decoder.finish() {
        forward_line(&tx, &line).await;
    }
}

/// Decode one line and forward its text; `false` once the consumer is gone
async fn forward_line(tx: &mpsc::Sender<Result<String, LlmError>>, line: &str) -> bool {
    match parse_line(line) {
        Ok(Frame::Delta(text)) => tx.send(Ok(text)).await.is_ok(),
        Ok(Frame::Done) => {
            tracing::trace!("upstream signalled completion");
            true
        }
        Ok(Frame::Ignored) => true,
        Err(e) => {
            tracing::warn!(error = %e, line = %line, "skipping unparseable SSE chunk");
            true
        }
    }
}
