//! Hosted Tokenization
//!
//! One-shot setup of the Moneris hosted tokenization widget, independent of
//! the checkout flow. Results are written to a text log shown under the
//! tokenizer container.

use serde::Serialize;
use serde_json::json;

use crate::error::TokenizationError;
use crate::widget::MethodProbe;

/// Value shipped in the page template until a merchant fills it in
pub const PLACEHOLDER_PROFILE_ID: &str = "REPLACE_WITH_PROFILE_ID";

/// Container attribute holding the tokenization profile id
pub const PROFILE_ATTRIBUTE: &str = "data-moneris-tokenization-id";

/// Global paths where the library may live, in lookup order
pub const LIBRARY_LOCATIONS: [&[&str]; 4] = [
    &["Moneris", "hostedTokenization"],
    &["Moneris", "HostedTokenization"],
    &["hostedTokenization"],
    &["MonerisHostedTokenization"],
];

/// Validate the profile id read from the container
pub fn profile_id(raw: Option<&str>) -> Result<&str, TokenizationError> {
    match raw {
        Some(id) if !id.is_empty() && id != PLACEHOLDER_PROFILE_ID => Ok(id),
        _ => Err(TokenizationError::MissingProfile),
    }
}

/// Options passed to `setup`; the callbacks are attached by the library
/// adapter
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationOptions {
    pub container_id: String,
    pub tokenization_id: String,
}

/// Method used to show the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMethod {
    Start,
    Show,
    Open,
}

impl StartMethod {
    pub fn method_name(self) -> &'static str {
        match self {
            StartMethod::Start => "start",
            StartMethod::Show => "show",
            StartMethod::Open => "open",
        }
    }

    pub fn probe(library: &impl MethodProbe) -> Option<Self> {
        [StartMethod::Start, StartMethod::Show, StartMethod::Open]
            .into_iter()
            .find(|m| library.has_method(m.method_name()))
    }
}

/// One line (or block) of tokenizer output
#[derive(Clone, Debug, PartialEq)]
pub enum TokenizerEntry {
    Text(String),
    Tokenize(serde_json::Value),
    Error(serde_json::Value),
    Close,
}

impl TokenizerEntry {
    pub fn render(&self) -> String {
        let value = match self {
            TokenizerEntry::Text(text) => return text.clone(),
            TokenizerEntry::Tokenize(result) => json!({"event": "tokenize", "result": result}),
            TokenizerEntry::Error(error) => json!({"event": "error", "error": error}),
            TokenizerEntry::Close => json!({"event": "close"}),
        };
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}

impl From<TokenizationError> for TokenizerEntry {
    fn from(err: TokenizationError) -> Self {
        TokenizerEntry::Text(err.to_string())
    }
}

/// Tokenizer output, newest first when rendered
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenizerLog {
    entries: Vec<TokenizerEntry>,
}

impl TokenizerLog {
    pub fn push(&mut self, entry: TokenizerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TokenizerEntry] {
        &self.entries
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(|e| format!("{}\n", e.render()))
            .collect()
    }
}

/// Where tokenizer output goes
pub trait TokenizerSink: Clone + 'static {
    fn write(&self, entry: TokenizerEntry);
}

/// A located hosted tokenization library
pub trait HostedLibrary: MethodProbe {
    /// Call `setup(options)` with callbacks writing to `sink`
    fn setup<S: TokenizerSink>(
        &mut self,
        options: &TokenizationOptions,
        sink: S,
    ) -> Result<(), TokenizationError>;

    fn start(&mut self, method: StartMethod) -> Result<(), TokenizationError>;
}

/// Run the tokenization setup
///
/// `locate` is only consulted once the profile id is known to be usable.
/// The returned library owns the callbacks handed to `setup` and must be
/// kept alive for as long as the widget may call them.
pub fn start_tokenization<L, S>(
    profile: Option<&str>,
    container_id: &str,
    locate: impl FnOnce() -> Option<L>,
    sink: &S,
) -> Option<L>
where
    L: HostedLibrary,
    S: TokenizerSink,
{
    let tokenization_id = match profile_id(profile) {
        Ok(id) => id,
        Err(err) => {
            sink.write(err.into());
            return None;
        }
    };

    let Some(mut library) = locate() else {
        sink.write(TokenizationError::LibraryUnavailable.into());
        return None;
    };

    let options = TokenizationOptions {
        container_id: container_id.to_string(),
        tokenization_id: tokenization_id.to_string(),
    };
    if let Err(err) = run(&mut library, &options, sink) {
        tracing::warn!(error = %err, "hosted tokenization failed to start");
        sink.write(err.into());
    }
    Some(library)
}

/// Every library started on the page
///
/// A second load hands the widget fresh callbacks while the first widget
/// may still fire its own, so earlier libraries are never dropped.
#[derive(Debug)]
pub struct StartedLibraries<L> {
    libraries: Vec<L>,
}

impl<L> Default for StartedLibraries<L> {
    fn default() -> Self {
        Self {
            libraries: Vec::new(),
        }
    }
}

impl<L: HostedLibrary> StartedLibraries<L> {
    /// Run `start_tokenization` and keep whatever library it returns
    pub fn load<S: TokenizerSink>(
        &mut self,
        profile: Option<&str>,
        container_id: &str,
        locate: impl FnOnce() -> Option<L>,
        sink: &S,
    ) {
        if let Some(library) = start_tokenization(profile, container_id, locate, sink) {
            self.libraries.push(library);
        }
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

fn run<L: HostedLibrary, S: TokenizerSink>(
    library: &mut L,
    options: &TokenizationOptions,
    sink: &S,
) -> Result<(), TokenizationError> {
    if library.has_method("setup") {
        library.setup(options, sink.clone())?;
    }
    let method = StartMethod::probe(library).ok_or(TokenizationError::NoStartMethod)?;
    library.start(method)
}
