use cascade_dns_domain::RecordType;
use compact_str::CompactString;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Eq)]
pub struct CacheKey {
    pub domain: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: CompactString::from(domain),
            record_type,
        }
    }
}

impl Hash for CacheKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.as_str().hash(state);
        self.record_type.hash(state);
    }
}

impl PartialEq for CacheKey {
    #[inline]
    fn eq(&self, other: &CacheKey) -> bool {
        self.record_type == other.record_type && self.domain == other.domain
    }
}
