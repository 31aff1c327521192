use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Size of each bounded read from the body stream
pub const READ_CHUNK_SIZE: usize = 1024;

/// Outcome of draining a body stream
///
/// `bytes` holds everything read before the stream ended or failed; `error` is
/// set when the stream failed part-way.
#[derive(Debug)]
pub struct BodyRead {
    pub bytes: Vec<u8>,
    pub error: Option<io::Error>,
}

impl BodyRead {
    /// Returns true if the stream was read to its end
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Reads a body stream to exhaustion in `READ_CHUNK_SIZE` chunks
///
/// The reader is consumed and released on every exit path. A read failure stops
/// the loop and is returned alongside the partial buffer instead of propagating.
pub async fn read_body<R>(mut reader: R) -> BodyRead
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => return BodyRead { bytes, error: None },
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(err) => {
                return BodyRead {
                    bytes,
                    error: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_reads_whole_stream() {
        let reader = Builder::new().read(b"<html>").read(b"</html>").build();
        let body = read_body(reader).await;

        assert!(body.is_complete());
        assert_eq!(body.bytes, b"<html></html>");
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let body = read_body(Builder::new().build()).await;
        assert!(body.is_complete());
        assert!(body.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_body_larger_than_chunk() {
        let data = vec![b'a'; READ_CHUNK_SIZE * 3 + 17];
        let body = read_body(&data[..]).await;

        assert!(body.is_complete());
        assert_eq!(body.bytes.len(), data.len());
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_bytes() {
        let reader = Builder::new()
            .read(b"first chunk ")
            .read(b"second chunk")
            .read_error(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer"))
            .build();

        let body = read_body(reader).await;

        assert!(!body.is_complete());
        assert_eq!(body.bytes, b"first chunk second chunk");
        assert_eq!(
            body.error.unwrap().kind(),
            io::ErrorKind::ConnectionReset
        );
    }

    #[tokio::test]
    async fn test_failure_before_any_bytes() {
        let reader = Builder::new()
            .read_error(io::Error::new(io::ErrorKind::TimedOut, "stalled"))
            .build();

        let body = read_body(reader).await;
        assert!(body.bytes.is_empty());
        assert!(body.error.is_some());
    }
}
