use cascade_dns_application::ports::DnsMessageHandler;
use cascade_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordsUseCase, GetCacheStatsUseCase, GetRecordsUseCase,
    ResolveQueryUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub dns_handler: Arc<dyn DnsMessageHandler>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub delete_records: Arc<DeleteRecordsUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}
