//! Canned study-material generator and assistant replies

use super::documents::DocumentLibrary;
use super::types::{ContentKind, GeneratedContent, UploadedDocument};
use crate::utils::error::{Result, StudyGeniusError};
use crate::utils::latency::{Operation, SimulatedLatency};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

const SUMMARY: &str = "This is a comprehensive summary of the uploaded document, highlighting \
the key concepts and important information from the content.";

const NOTES: &str = "• Point 1: Important concept from the material\n\
• Point 2: Key formula or definition\n\
• Point 3: Critical historical date or event\n\
• Point 4: Main themes or arguments\n\
• Point 5: Connections between different topics";

const QUESTIONS: &str = "1. What is the significance of X in relation to Y?\n\
2. How does concept A influence outcome B?\n\
3. Compare and contrast theories C and D.\n\
4. Explain the process of E and its importance.\n\
5. What would happen if variable F was changed?";

const PREDICTIONS: &str = "Based on the course material and recent exam patterns, the following \
topics are likely to appear on the final exam:\n\n\
1. Topic A - High probability\n\
2. Topic B - Medium probability\n\
3. Topic C - High probability\n\
4. Topic D - Medium probability\n\
5. Application questions related to Topic A and C";

const ASSISTANT_REPLY: &str = "I'm your AI study assistant. Please upload a document to get \
started with generating summaries, notes, practice questions, or exam predictions.";

/// Study material generator
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    library: Arc<DocumentLibrary>,
    latency: SimulatedLatency,
}

impl ContentGenerator {
    pub fn new(library: Arc<DocumentLibrary>, latency: SimulatedLatency) -> Self {
        Self { library, latency }
    }

    /// Generate material of `kind` for a document `owner_id` uploaded
    ///
    /// Another account's document is reported as not found.
    pub async fn generate(
        &self,
        owner_id: &str,
        document_id: &str,
        kind: ContentKind,
        additional_info: &str,
    ) -> Result<GeneratedContent> {
        let document = self
            .library
            .get(document_id)
            .filter(|document| document.owner_id == owner_id)
            .ok_or_else(|| {
                StudyGeniusError::not_found(format!("Document {} not found", document_id))
            })?;

        debug!(
            document_id = %document.id,
            kind = %kind,
            additional_info = %additional_info,
            "generating study material"
        );
        self.latency.wait(Operation::Generation).await;

        info!(document_id = %document.id, kind = %kind, "study material generated");
        Ok(GeneratedContent {
            document_id: document.id,
            kind,
            content: canned_content(kind).to_string(),
            generated_at: Utc::now(),
        })
    }

    /// Assistant reply to a free-form chat message
    pub async fn reply(&self, message: &str) -> String {
        debug!(length = message.len(), "chat message received");
        self.latency.wait(Operation::Chat).await;
        ASSISTANT_REPLY.to_string()
    }

    /// Opening message once a document is selected
    pub fn greeting(document: &UploadedDocument) -> String {
        format!(
            "I'm ready to help you with {}. What would you like me to generate?",
            document.file_name
        )
    }
}

fn canned_content(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Summary => SUMMARY,
        ContentKind::Notes => NOTES,
        ContentKind::Questions => QUESTIONS,
        ContentKind::Predictions => PREDICTIONS,
    }
}
