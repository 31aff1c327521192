//! Content extraction: turns an HTTP response body into decoded text
//!
//! The charset cascade is: Content-Type header charset, then an in-body
//! `<meta>` charset declaration, then UTF-8. Extraction never fails; a broken
//! stream yields the bytes read so far and an unknown charset yields UTF-8.

mod body;
mod charset;
mod extractor;

pub use body::{read_body, BodyRead, READ_CHUNK_SIZE};
pub use charset::{charset_from_body, charset_from_content_type, clean_charset, resolve_encoding};
pub use extractor::{PageContent, WebContentExtractor};
