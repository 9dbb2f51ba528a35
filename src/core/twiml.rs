//! TwiML call-control documents
//!
//! The telephony provider drives a call by fetching one of these documents from
//! each webhook and executing its verbs in order. Only the verbs the screening
//! flow needs are modelled; the serialization matches the provider's wire format
//! (self-closing empty elements, `callerId` attribute spelling, UTF-8 prolog).

use std::fmt;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Content type the provider expects on every webhook reply
pub const TWIML_CONTENT_TYPE: &str = "text/xml";

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Collects the caller's speech and submits the transcription to `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gather {
    pub action: String,
    pub method: &'static str,
    /// Seconds of silence before the gather gives up
    pub timeout: u32,
    /// Text spoken while waiting for input
    pub prompts: Vec<String>,
}

impl Gather {
    pub fn speech(action: impl Into<String>, timeout: u32) -> Self {
        Self {
            action: action.into(),
            method: "POST",
            timeout,
            prompts: Vec::new(),
        }
    }

    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.prompts.push(text.into());
        self
    }
}

/// Bridges the call to another number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    pub caller_id: Option<String>,
    pub number: String,
}

/// A single TwiML verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Reject,
    Say(String),
    Gather(Gather),
    Pause { length: u32 },
    Dial(Dial),
    Hangup,
}

/// An ordered `<Response>` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(mut self) -> Self {
        self.verbs.push(Verb::Reject);
        self
    }

    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say(text.into()));
        self
    }

    pub fn gather(mut self, gather: Gather) -> Self {
        self.verbs.push(Verb::Gather(gather));
        self
    }

    pub fn pause(mut self, length: u32) -> Self {
        self.verbs.push(Verb::Pause { length });
        self
    }

    pub fn dial(mut self, number: impl Into<String>, caller_id: Option<String>) -> Self {
        self.verbs.push(Verb::Dial(Dial {
            caller_id,
            number: number.into(),
        }));
        self
    }

    pub fn hangup(mut self) -> Self {
        self.verbs.push(Verb::Hangup);
        self
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// True when the document does nothing but refuse the call.
    pub fn is_reject_only(&self) -> bool {
        matches!(self.verbs.as_slice(), [Verb::Reject])
    }

    /// Returns the first `<Gather>` in the document, if any.
    pub fn find_gather(&self) -> Option<&Gather> {
        self.verbs.iter().find_map(|verb| match verb {
            Verb::Gather(gather) => Some(gather),
            _ => None,
        })
    }
}

/// Escapes text for use in XML/HTML element content and quoted attributes.
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Reject => f.write_str("<Reject />"),
            Verb::Say(text) => write!(f, "<Say>{}</Say>", escape_xml(text)),
            Verb::Gather(gather) => {
                write!(
                    f,
                    r#"<Gather action="{}" input="speech" method="{}" timeout="{}""#,
                    escape_xml(&gather.action),
                    gather.method,
                    gather.timeout
                )?;
                if gather.prompts.is_empty() {
                    return f.write_str(" />");
                }
                f.write_str(">")?;
                for prompt in &gather.prompts {
                    write!(f, "<Say>{}</Say>", escape_xml(prompt))?;
                }
                f.write_str("</Gather>")
            }
            Verb::Pause { length } => write!(f, r#"<Pause length="{}" />"#, length),
            Verb::Dial(dial) => {
                f.write_str("<Dial")?;
                if let Some(caller_id) = &dial.caller_id {
                    write!(f, r#" callerId="{}""#, escape_xml(caller_id))?;
                }
                write!(f, "><Number>{}</Number></Dial>", escape_xml(&dial.number))
            }
            Verb::Hangup => f.write_str("<Hangup />"),
        }
    }
}

impl fmt::Display for VoiceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_PROLOG)?;
        if self.verbs.is_empty() {
            return f.write_str("<Response />");
        }
        f.write_str("<Response>")?;
        for verb in &self.verbs {
            write!(f, "{verb}")?;
        }
        f.write_str("</Response>")
    }
}

impl IntoResponse for VoiceResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)], self.to_string()).into_response()
    }
}
