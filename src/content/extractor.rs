use crate::content::body::read_body;
use crate::content::charset::{
    charset_from_body, charset_from_content_type, clean_charset, resolve_encoding,
};
use encoding_rs::{Encoding, UTF_8};
use futures_util::TryStreamExt;
use reqwest::header::CONTENT_TYPE;
use std::io;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;

/// Decoded body of a crawled page
///
/// `bytes` is always the full body as read from the wire, whether or not
/// decoding went cleanly; `text` is empty only when there was nothing to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Raw body bytes
    pub bytes: Vec<u8>,

    /// Charset label found in the header or a meta tag, after alias cleanup
    pub charset: Option<String>,

    /// Encoding the label resolved to (UTF-8 when unknown)
    pub encoding: &'static Encoding,

    /// Decoded text
    pub text: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            bytes: Vec::new(),
            charset: None,
            encoding: UTF_8,
            text: String::new(),
        }
    }
}

/// Produces `PageContent` from HTTP responses
///
/// Stateless; one instance can serve any number of concurrent extractions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebContentExtractor;

impl WebContentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Reads and decodes the body of a completed response
    pub async fn get_content(&self, response: reqwest::Response) -> PageContent {
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let stream = Box::pin(response.bytes_stream().map_err(io::Error::other));
        self.extract(&url, content_type.as_deref(), StreamReader::new(stream))
            .await
    }

    /// Reads `body` to the end and decodes it
    ///
    /// # Arguments
    ///
    /// * `url` - Source of the body, used only for logging
    /// * `content_type` - Content-Type header value, if any
    /// * `body` - The response body stream
    ///
    /// A stream failure is logged and the bytes read so far are decoded as if
    /// they were the whole body.
    pub async fn extract<R>(&self, url: &str, content_type: Option<&str>, body: R) -> PageContent
    where
        R: AsyncRead + Unpin,
    {
        let read = read_body(body).await;
        if let Some(err) = &read.error {
            tracing::warn!(
                "Error occurred while downloading content of {} after {} bytes: {}",
                url,
                read.bytes.len(),
                err
            );
        }

        decode_body(url, read.bytes, content_type)
    }
}

/// Runs the charset cascade over a fully buffered body and decodes it
fn decode_body(url: &str, bytes: Vec<u8>, content_type: Option<&str>) -> PageContent {
    let charset = match content_type.and_then(charset_from_content_type) {
        Some(label) => Some(label),
        None => charset_from_body(&bytes),
    };
    let charset = clean_charset(charset);
    let encoding = resolve_encoding(charset.as_deref());

    // A byte-order mark overrides the resolved encoding for the text itself
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::debug!(
            "Malformed {} sequences in {}; replaced with U+FFFD",
            used.name(),
            url
        );
    }
    let text = text.into_owned();

    PageContent {
        bytes,
        charset,
        encoding,
        text,
    }
}
