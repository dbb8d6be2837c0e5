use std::fmt;

/// Identity of a browsing channel (a tab, in browser terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChannelId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Top-level navigation of a channel.
    MainFrame,
    SubResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub channel: ChannelId,
    pub url: String,
    pub kind: ResourceKind,
}

impl OutboundRequest {
    pub fn new(channel: impl Into<ChannelId>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            channel: channel.into(),
            url: url.into(),
            kind,
        }
    }

    pub fn main_frame(channel: impl Into<ChannelId>, url: impl Into<String>) -> Self {
        Self::new(channel, url, ResourceKind::MainFrame)
    }

    pub fn sub_resource(channel: impl Into<ChannelId>, url: impl Into<String>) -> Self {
        Self::new(channel, url, ResourceKind::SubResource)
    }

    pub fn is_main_frame(&self) -> bool {
        self.kind == ResourceKind::MainFrame
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// What the engine hands back to the event source for an interception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Replace the in-flight request with this URL.
    Redirect { url: String },
    /// Send the request with this full header list.
    ModifyHeaders { headers: Vec<Header> },
    /// Load this URL in the given channel.
    Navigate { channel: ChannelId, url: String },
    NoOp,
}

impl Directive {
    pub fn redirect(url: impl Into<String>) -> Self {
        Self::Redirect { url: url.into() }
    }

    pub fn navigate(channel: ChannelId, url: impl Into<String>) -> Self {
        Self::Navigate {
            channel,
            url: url.into(),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Directive::NoOp)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Redirect { url } => write!(f, "redirect -> {url}"),
            Directive::ModifyHeaders { headers } => {
                write!(f, "modify-headers [")?;
                for (i, header) in headers.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", header.name, header.value)?;
                }
                write!(f, "]")
            }
            Directive::Navigate { channel, url } => write!(f, "navigate channel {channel} -> {url}"),
            Directive::NoOp => write!(f, "no-op"),
        }
    }
}
