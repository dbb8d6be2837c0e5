use crate::di::UseCases;
use sidestep_domain::{ChannelId, Directive, OutboundRequest};

/// Operator commands act on a single pseudo channel.
const CLI_CHANNEL: ChannelId = ChannelId(0);

/// Prints what the engine would do with a request, and the headers it would
/// send once the request is addressed by IP.
pub fn rewrite(use_cases: &UseCases, url: &str, main_frame: bool) {
    let request = if main_frame {
        OutboundRequest::main_frame(CLI_CHANNEL, url)
    } else {
        OutboundRequest::sub_resource(CLI_CHANNEL, url)
    };

    let directive = use_cases.rewrite_request.execute(&request);
    println!("{}", directive);

    let addressed = match &directive {
        Directive::Redirect { url } => url.as_str(),
        _ => url,
    };
    let headers = use_cases.prepare_headers.execute(addressed, Vec::new());
    if !headers.is_noop() {
        println!("{}", headers);
    }
}

pub fn state(use_cases: &UseCases, url: &str) {
    let state = use_cases.toggle_state.execute(url);
    println!("{} ({})", state, state.title());
}

pub async fn toggle(use_cases: &UseCases, url: &str) -> anyhow::Result<()> {
    let directive = use_cases.toggle.execute(CLI_CHANNEL, url).await?;
    println!("{}", directive);
    Ok(())
}
