use super::{DnsServices, Repositories};
use cascade_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordsUseCase, GetCacheStatsUseCase, GetRecordsUseCase,
    ResolveQueryUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub delete_records: Arc<DeleteRecordsUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, dns: &DnsServices) -> Self {
        Self {
            resolve_query: Arc::new(ResolveQueryUseCase::new(
                dns.cache.clone(),
                repos.records.clone(),
                dns.upstream.clone(),
            )),
            create_record: Arc::new(CreateRecordUseCase::new(repos.records.clone())),
            get_records: Arc::new(GetRecordsUseCase::new(repos.records.clone())),
            delete_records: Arc::new(DeleteRecordsUseCase::new(repos.records.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(dns.cache.clone())),
        }
    }
}
