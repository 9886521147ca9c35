#![allow(dead_code)]

use async_trait::async_trait;
use cascade_dns_application::ports::{
    AnswerCachePort, CacheStatsSnapshot, RecordRepository, UpstreamResolver,
};
use cascade_dns_domain::{
    Answer, AuthoritativeRecord, DnsQuery, DomainError, RecordFilter, RecordType,
    UpstreamResult,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Cache double without expiry; counts reads and writes.
#[derive(Default)]
pub struct MockAnswerCache {
    entries: RwLock<HashMap<(String, RecordType), Vec<Answer>>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl MockAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, domain: &str, record_type: RecordType, answers: Vec<Answer>) {
        self.entries
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), answers);
    }

    pub fn contains(&self, domain: &str, record_type: RecordType) -> bool {
        self.entries
            .read()
            .unwrap()
            .contains_key(&(domain.to_string(), record_type))
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl AnswerCachePort for MockAnswerCache {
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Vec<Answer>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .read()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
    }

    fn put(&self, domain: &str, record_type: RecordType, answers: &[Answer]) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if answers.is_empty() {
            return;
        }
        self.entries
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), answers.to_vec());
    }

    fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            entries: self.entries.read().unwrap().len(),
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub struct MockRecordRepository {
    records: RwLock<Vec<AuthoritativeRecord>>,
    next_id: AtomicUsize,
    finds: AtomicUsize,
    fail_with: RwLock<Option<DomainError>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AuthoritativeRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.insert(record);
        }
        repo
    }

    pub fn insert(&self, mut record: AuthoritativeRecord) -> AuthoritativeRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        record.id = Some(id);
        self.records.write().unwrap().push(record.clone());
        record
    }

    pub fn fail_with(&self, error: DomainError) {
        *self.fail_with.write().unwrap() = Some(error);
    }

    pub fn find_count(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match self.fail_with.read().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.domain == domain && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        self.check_failure()?;
        let mut records: Vec<AuthoritativeRecord> = self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| filter.domain.as_ref().map_or(true, |d| &r.domain == d))
            .filter(|r| filter.record_type.map_or(true, |t| r.record_type == t))
            .filter(|r| filter.value.as_ref().map_or(true, |v| &r.value == v))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.domain.cmp(&b.domain));
        Ok(records)
    }

    async fn create(
        &self,
        record: AuthoritativeRecord,
    ) -> Result<AuthoritativeRecord, DomainError> {
        self.check_failure()?;
        let exists = self.records.read().unwrap().iter().any(|r| {
            r.domain == record.domain
                && r.record_type == record.record_type
                && r.value == record.value
        });
        if exists {
            return Err(DomainError::RecordConflict(format!(
                "{} {} {}",
                record.domain, record.record_type, record.value
            )));
        }
        Ok(self.insert(record))
    }

    async fn delete_by_domain(&self, domain: &str) -> Result<u64, DomainError> {
        self.check_failure()?;
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|r| r.domain != domain);
        Ok((before - records.len()) as u64)
    }
}

/// Upstream double returning scripted results; unscripted queries get a
/// name error.
#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), UpstreamResult>>>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, record_type: RecordType, result: UpstreamResult) {
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), result);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn query(&self, query: &DnsQuery) -> UpstreamResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .unwrap_or_else(UpstreamResult::name_error)
    }
}
