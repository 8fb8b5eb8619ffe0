use encoding_rs::Encoding;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("bytes are not valid {encoding}")]
    DecodeFailure { encoding: String },
    #[error("unknown encoding label {0:?}")]
    UnknownEncoding(String),
}

/// Resolve a WHATWG encoding label such as `utf-8` or `latin1`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, DecodeError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DecodeError::UnknownEncoding(label.to_string()))
}

/// Strictly decode `bytes` as `encoding`. A leading BOM is decoded like any other
/// character; any malformed sequence fails instead of being replaced.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}
