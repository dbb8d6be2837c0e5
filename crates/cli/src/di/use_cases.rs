use super::Services;
use sidestep_application::use_cases::{
    GetToggleStateUseCase, HandleNetworkErrorUseCase, ListRecordsUseCase, ObserveRedirectUseCase,
    PrepareHeadersUseCase, ReblockChannelUseCase, RewriteRequestUseCase, SetDomainEnabledUseCase,
    ToggleChannelUseCase, UnblockChannelUseCase,
};
use std::sync::Arc;

/// Engine hooks plus the operator use cases. Redirect and error hooks have
/// no event source in the binary; they are wired for embedders.
#[allow(dead_code)]
pub struct UseCases {
    pub rewrite_request: Arc<RewriteRequestUseCase>,
    pub prepare_headers: Arc<PrepareHeadersUseCase>,
    pub observe_redirect: Arc<ObserveRedirectUseCase>,
    pub handle_network_error: Arc<HandleNetworkErrorUseCase>,
    pub unblock: Arc<UnblockChannelUseCase>,
    pub reblock: Arc<ReblockChannelUseCase>,
    pub toggle: Arc<ToggleChannelUseCase>,
    pub toggle_state: Arc<GetToggleStateUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub set_domain_enabled: Arc<SetDomainEnabledUseCase>,
}

impl UseCases {
    pub fn new(services: &Services) -> Self {
        let store = services.store.clone();

        let unblock = Arc::new(UnblockChannelUseCase::new(
            store.clone(),
            services.tracker.clone(),
            services.resolver.clone(),
        ));
        let reblock = Arc::new(ReblockChannelUseCase::new(store.clone()));

        Self {
            rewrite_request: Arc::new(RewriteRequestUseCase::new(store.clone())),
            prepare_headers: Arc::new(PrepareHeadersUseCase::new(store.clone())),
            observe_redirect: Arc::new(ObserveRedirectUseCase::new(
                store.clone(),
                services.tracker.clone(),
            )),
            handle_network_error: Arc::new(HandleNetworkErrorUseCase::new(
                services.retry_cooldown.clone(),
                services.clock.clone(),
            )),
            toggle: Arc::new(ToggleChannelUseCase::new(unblock.clone(), reblock.clone())),
            toggle_state: Arc::new(GetToggleStateUseCase::new(store.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(store.clone())),
            set_domain_enabled: Arc::new(SetDomainEnabledUseCase::new(store)),
            unblock,
            reblock,
        }
    }
}
