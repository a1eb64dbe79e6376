use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhotoError {
    #[error("photo must be an image, got '{0}'")]
    NotAnImage(String),

    #[error("photo is empty")]
    Empty,

    #[error("photo is {size} bytes; the limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

/// Encodes an uploaded image as an embeddable `data:` URI.
pub fn to_data_uri(content_type: &str, bytes: &[u8], limit: usize) -> Result<String, PhotoError> {
    let mime = content_type.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(PhotoError::NotAnImage(content_type.to_string()));
    }
    if bytes.is_empty() {
        return Err(PhotoError::Empty);
    }
    if bytes.len() > limit {
        return Err(PhotoError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_becomes_data_uri() {
        let uri = to_data_uri("image/png", b"\x89PNG", 1024).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_non_image_is_rejected() {
        assert_eq!(
            to_data_uri("application/pdf", b"%PDF", 1024),
            Err(PhotoError::NotAnImage("application/pdf".to_string()))
        );
    }

    #[test]
    fn test_limit_is_enforced() {
        let err = to_data_uri("image/jpeg", &[0u8; 10], 4).unwrap_err();
        assert_eq!(err, PhotoError::TooLarge { size: 10, limit: 4 });
    }
}
