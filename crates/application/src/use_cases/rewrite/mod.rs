mod handle_network_error;
mod observe_redirect;
mod prepare_headers;
mod rewrite_request;

pub use handle_network_error::HandleNetworkErrorUseCase;
pub use observe_redirect::ObserveRedirectUseCase;
pub use prepare_headers::PrepareHeadersUseCase;
pub use rewrite_request::RewriteRequestUseCase;
