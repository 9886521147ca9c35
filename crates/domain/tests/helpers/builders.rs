#![allow(dead_code)]
use cascade_dns_domain::{AuthoritativeRecord, RecordType};

pub struct RecordBuilder {
    domain: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
    priority: Option<u16>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            value: "93.184.216.34".to_string(),
            ttl: 300,
            priority: None,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> AuthoritativeRecord {
        let mut record = AuthoritativeRecord::new(self.domain, self.record_type, self.value)
            .with_ttl(self.ttl);
        record.priority = self.priority;
        record
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
