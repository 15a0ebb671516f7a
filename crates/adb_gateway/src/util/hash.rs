//! Hash helpers

use crate::config::TextEncoding;
use crate::error::Result;
use md5::{Digest, Md5};

/// Lowercase hex MD5 of `text` encoded as `encoding`
pub fn md5_string(text: &str, encoding: TextEncoding) -> Result<String> {
    let bytes = encoding.encode(text)?;
    let digest = Md5::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}
