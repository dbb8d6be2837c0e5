mod get_toggle_state;
mod reblock_channel;
mod toggle_channel;
mod unblock_channel;

pub use get_toggle_state::GetToggleStateUseCase;
pub use reblock_channel::ReblockChannelUseCase;
pub use toggle_channel::ToggleChannelUseCase;
pub use unblock_channel::{UnblockChannelUseCase, UnblockTrigger};
