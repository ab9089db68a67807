//! Handler chain result types.

/// Outbound reply payload: the text plus whether the transport should render
/// it as Markdown. Weather reports and the help text are Markdown; error
/// replies are plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub text: String,
    pub markdown: bool,
}

impl Outbound {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to the next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and deliver the reply.
    Reply(Outbound),
}
