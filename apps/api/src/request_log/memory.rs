use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::notes::models::{GeneratedDocument, GenerationRequest};
use crate::request_log::{RequestLog, RequestLogError, StoredRequest};

/// Process-local request log. Entries are kept in write order; when a capacity is set
/// the oldest entries are evicted first.
pub struct InMemoryRequestLog {
    entries: RwLock<VecDeque<StoredRequest>>,
    capacity: Option<usize>,
}

impl InMemoryRequestLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity,
        }
    }
}

#[async_trait]
impl RequestLog for InMemoryRequestLog {
    async fn record(
        &self,
        request: &GenerationRequest,
        document: &GeneratedDocument,
    ) -> Result<StoredRequest, RequestLogError> {
        let mut entries = self.entries.write().await;

        // Timestamp under the lock so write order and created_at agree.
        let stored = StoredRequest::new(request, document, Utc::now());
        entries.push_back(stored.clone());

        if let Some(capacity) = self.capacity {
            while entries.len() > capacity {
                entries.pop_front();
            }
        }

        Ok(stored)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredRequest>, RequestLogError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<StoredRequest, RequestLogError> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(RequestLogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::notes::generator::generate_template_notes;
    use crate::notes::models::Language;

    fn request(chapter: &str) -> GenerationRequest {
        GenerationRequest {
            class_level: 9,
            subject: "History".to_string(),
            chapter_title: Some(chapter.to_string()),
            source_document: None,
            language: Language::English,
        }
    }

    async fn record(log: &InMemoryRequestLog, chapter: &str) -> StoredRequest {
        let req = request(chapter);
        let doc = generate_template_notes(&req);
        log.record(&req, &doc).await.unwrap()
    }

    #[tokio::test]
    async fn test_list_recent_returns_min_of_n_and_k_newest_first() {
        let log = InMemoryRequestLog::new(None);
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(record(&log, &format!("Chapter {i}")).await.id);
        }

        let recent = log.list_recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        let got: Vec<Uuid> = recent.iter().map(|e| e.id).collect();
        assert_eq!(got, vec![ids[4], ids[3], ids[2]]);
        assert!(recent
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));

        assert_eq!(log.list_recent(10).await.unwrap().len(), 5);
        assert!(log.list_recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_round_trips_request_fields() {
        let log = InMemoryRequestLog::new(None);
        let stored = record(&log, "The French Revolution").await;

        let fetched = log.get_by_id(stored.id).await.unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.chapter_title.as_deref(), Some("The French Revolution"));
        assert_eq!(fetched.notes.title, "The French Revolution");
    }

    #[tokio::test]
    async fn test_get_by_unknown_id_is_not_found() {
        let log = InMemoryRequestLog::new(None);
        let id = Uuid::new_v4();
        assert!(matches!(
            log.get_by_id(id).await,
            Err(RequestLogError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest_entries() {
        let log = InMemoryRequestLog::new(Some(2));
        let first = record(&log, "One").await;
        record(&log, "Two").await;
        let third = record(&log, "Three").await;

        let recent = log.list_recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, third.id);
        assert!(matches!(
            log.get_by_id(first.id).await,
            Err(RequestLogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_records_get_unique_ids() {
        let log = Arc::new(InMemoryRequestLog::new(None));
        let mut handles = Vec::new();
        for i in 0..20 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                let req = request(&format!("Chapter {i}"));
                let doc = generate_template_notes(&req);
                log.record(&req, &doc).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(log.list_recent(100).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_uploaded_bytes_are_not_retained() {
        use crate::notes::models::SourceDocument;
        use bytes::Bytes;

        let log = InMemoryRequestLog::new(None);
        let req = GenerationRequest {
            chapter_title: None,
            source_document: Some(SourceDocument {
                file_name: "chapter-3.pdf".to_string(),
                content_type: None,
                bytes: Bytes::from_static(b"%PDF"),
            }),
            ..request("unused")
        };
        let doc = generate_template_notes(&req);
        let stored = log.record(&req, &doc).await.unwrap();

        assert_eq!(stored.source_file_name.as_deref(), Some("chapter-3.pdf"));
        assert!(stored.chapter_title.is_none());
        let json = serde_json::to_string(&stored).unwrap();
        assert!(!json.contains("%PDF"));
    }
}
