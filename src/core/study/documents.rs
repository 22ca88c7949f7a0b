//! Document library
//!
//! Accepts uploads after checking subject, size and extension. Only the
//! document metadata is kept.

use super::types::UploadedDocument;
use crate::config::StudyConfig;
use crate::utils::error::{ErrorField, Result, StudyGeniusError};
use crate::utils::latency::{Operation, SimulatedLatency};
use crate::utils::{format_bytes, generate_id};
use chrono::Utc;
use parking_lot::RwLock;
use std::path::Path;
use tracing::{debug, info};

/// Uploaded document metadata store
#[derive(Debug)]
pub struct DocumentLibrary {
    documents: RwLock<Vec<UploadedDocument>>,
    config: StudyConfig,
    latency: SimulatedLatency,
}

impl DocumentLibrary {
    pub fn new(config: StudyConfig, latency: SimulatedLatency) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            config,
            latency,
        }
    }

    /// Accept a document for `owner_id`
    pub async fn upload(
        &self,
        owner_id: &str,
        file_name: &str,
        subject: &str,
        size: u64,
    ) -> Result<UploadedDocument> {
        self.check_upload(file_name, subject, size)?;
        self.latency.wait(Operation::Upload).await;

        let document = UploadedDocument {
            id: generate_id("doc-", 9),
            file_name: file_name.to_string(),
            subject: subject.trim().to_string(),
            content_type: detect_content_type(file_name),
            size,
            uploaded_at: Utc::now(),
            owner_id: owner_id.to_string(),
        };
        self.documents.write().push(document.clone());

        info!(
            document_id = %document.id,
            owner_id = %owner_id,
            subject = %document.subject,
            size = %format_bytes(size),
            "document uploaded"
        );
        Ok(document)
    }

    fn check_upload(&self, file_name: &str, subject: &str, size: u64) -> Result<()> {
        if file_name.trim().is_empty() || subject.trim().is_empty() {
            return Err(StudyGeniusError::validation(
                ErrorField::File,
                "Please select a file and subject before uploading.",
            ));
        }

        if size > self.config.max_upload_bytes() {
            return Err(StudyGeniusError::validation(
                ErrorField::File,
                format!(
                    "File is too large. Maximum size is {}MB.",
                    self.config.max_upload_mb
                ),
            ));
        }

        let extension = file_extension(file_name);
        if !self
            .config
            .accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(&extension))
        {
            debug!(file_name = %file_name, "rejected upload extension");
            return Err(StudyGeniusError::validation(
                ErrorField::File,
                format!(
                    "Invalid file type. Accepted types: {}",
                    self.config.accepted_extensions.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Documents owned by `owner_id`, oldest first
    pub fn list(&self, owner_id: &str) -> Vec<UploadedDocument> {
        self.documents
            .read()
            .iter()
            .filter(|doc| doc.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn get(&self, document_id: &str) -> Option<UploadedDocument> {
        self.documents
            .read()
            .iter()
            .find(|doc| doc.id == document_id)
            .cloned()
    }

    pub fn snapshot(&self) -> Vec<UploadedDocument> {
        self.documents.read().clone()
    }

    pub fn restore(&self, documents: Vec<UploadedDocument>) {
        *self.documents.write() = documents;
    }
}

/// Lowercased extension with its leading dot, empty when there is none
fn file_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

/// MIME type guessed from the file extension
pub(crate) fn detect_content_type(file_name: &str) -> String {
    match file_extension(file_name).as_str() {
        ".pdf" => "application/pdf".to_string(),
        ".doc" => "application/msword".to_string(),
        ".docx" => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string()
        }
        ".txt" => "text/plain".to_string(),
        ".md" => "text/markdown".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}
