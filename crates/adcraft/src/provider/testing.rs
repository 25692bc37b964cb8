//! In-memory collaborators for exercising the generator without a gateway.

use std::sync::{Arc, Mutex};

use adcraft_core::campaign::{ApiKey, UpstreamError};

use super::{CopyWriter, ImageGenerator};

/// Copy writer that replays a canned answer and records its prompts.
pub struct FakeWriter {
    answer: Result<String, UpstreamError>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeWriter {
    pub fn new(answer: Result<String, UpstreamError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl CopyWriter for FakeWriter {
    async fn write_copy(
        &self,
        _key: &ApiKey,
        system: String,
        user: String,
    ) -> Result<String, UpstreamError> {
        self.calls.lock().unwrap().push((system, user));
        self.answer.clone()
    }
}

pub struct FakeImages {
    answer: Result<Option<String>, UpstreamError>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn new(answer: Result<Option<String>, UpstreamError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_image(
        &self,
        _key: &ApiKey,
        prompt: String,
    ) -> Result<Option<String>, UpstreamError> {
        self.prompts.lock().unwrap().push(prompt);
        self.answer.clone()
    }
}
