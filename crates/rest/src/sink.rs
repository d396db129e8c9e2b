//! Transport seam
//!
//! The HTTP library that owns connections sits behind [`TransportSink`]. A
//! response is allocated from a body, decorated with headers, queued with a
//! status, and released. [`MemorySink`] is an in-process implementation.

use ctxbroker_core::HttpStatus;
use thiserror::Error;

use crate::config::DEFAULT_MAX_RESPONSE_SIZE;

/// Transport failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("cannot allocate response of {size} bytes (limit {limit})")]
    AllocationRefused { size: usize, limit: usize },
}

/// Where composed replies go
pub trait TransportSink {
    /// An allocated, not yet released response
    type Handle;

    fn allocate(&mut self, body: &str) -> Result<Self::Handle, SinkError>;

    fn add_header(&mut self, handle: &mut Self::Handle, name: &str, value: &str);

    fn queue(&mut self, handle: &mut Self::Handle, status: HttpStatus);

    fn release(&mut self, handle: Self::Handle);
}

/// A response as it was handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedResponse {
    pub status: HttpStatus,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl QueuedResponse {
    /// First value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response under construction in a [`MemorySink`]
#[derive(Debug)]
pub struct MemoryHandle {
    headers: Vec<(String, String)>,
    body: String,
}

/// Records queued responses in memory
#[derive(Debug)]
pub struct MemorySink {
    max_response_size: usize,
    queued: Vec<QueuedResponse>,
    allocated: usize,
    released: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_max_response_size(DEFAULT_MAX_RESPONSE_SIZE)
    }

    /// Refuse bodies longer than `max_response_size` bytes
    pub fn with_max_response_size(max_response_size: usize) -> Self {
        Self {
            max_response_size,
            queued: Vec::new(),
            allocated: 0,
            released: 0,
        }
    }

    pub fn queued(&self) -> &[QueuedResponse] {
        &self.queued
    }

    pub fn last(&self) -> Option<&QueuedResponse> {
        self.queued.last()
    }

    /// Handles allocated and not yet released
    pub fn outstanding(&self) -> usize {
        self.allocated - self.released
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Forget recorded responses; handle counts are kept
    pub fn clear(&mut self) {
        self.queued.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportSink for MemorySink {
    type Handle = MemoryHandle;

    fn allocate(&mut self, body: &str) -> Result<MemoryHandle, SinkError> {
        if body.len() > self.max_response_size {
            return Err(SinkError::AllocationRefused {
                size: body.len(),
                limit: self.max_response_size,
            });
        }
        self.allocated += 1;
        Ok(MemoryHandle {
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn add_header(&mut self, handle: &mut MemoryHandle, name: &str, value: &str) {
        handle.headers.push((name.to_string(), value.to_string()));
    }

    fn queue(&mut self, handle: &mut MemoryHandle, status: HttpStatus) {
        self.queued.push(QueuedResponse {
            status,
            headers: handle.headers.clone(),
            body: handle.body.clone(),
        });
    }

    fn release(&mut self, _handle: MemoryHandle) {
        self.released += 1;
    }
}

/// Releases the handle it holds when dropped
pub(crate) struct ResponseGuard<'s, S: TransportSink> {
    sink: &'s mut S,
    handle: Option<S::Handle>,
}

impl<'s, S: TransportSink> ResponseGuard<'s, S> {
    pub(crate) fn allocate(sink: &'s mut S, body: &str) -> Result<Self, SinkError> {
        let handle = sink.allocate(body)?;
        Ok(Self {
            sink,
            handle: Some(handle),
        })
    }

    pub(crate) fn add_header(&mut self, name: &str, value: &str) {
        if let Some(handle) = self.handle.as_mut() {
            self.sink.add_header(handle, name, value);
        }
    }

    pub(crate) fn queue(&mut self, status: HttpStatus) {
        if let Some(handle) = self.handle.as_mut() {
            self.sink.queue(handle, status);
        }
    }
}

impl<S: TransportSink> Drop for ResponseGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.release(handle);
        }
    }
}
