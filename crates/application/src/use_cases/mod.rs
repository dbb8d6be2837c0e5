pub mod channel;
pub mod records;
pub mod rewrite;

pub use channel::{
    GetToggleStateUseCase, ReblockChannelUseCase, ToggleChannelUseCase, UnblockChannelUseCase,
    UnblockTrigger,
};
pub use records::{ListRecordsUseCase, SetDomainEnabledUseCase};
pub use rewrite::{
    HandleNetworkErrorUseCase, ObserveRedirectUseCase, PrepareHeadersUseCase,
    RewriteRequestUseCase,
};
