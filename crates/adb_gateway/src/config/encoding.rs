//! Text encoding used to decode tool output and to read/write/hash text

use crate::error::{Error, Result};
use encoding_rs::Encoding;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A named character encoding backed by `encoding_rs`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub fn utf_8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    pub fn gbk() -> Self {
        Self(encoding_rs::GBK)
    }

    pub fn gb18030() -> Self {
        Self(encoding_rs::GB18030)
    }

    /// Resolve a WHATWG label such as `utf-8`, `gbk`, `gb18030` or `latin1`.
    ///
    /// `ansi` is accepted as an alias for GBK, the Windows code page on the
    /// hosts this tool was first written for.
    pub fn for_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("ansi") {
            return Ok(Self::gbk());
        }
        Encoding::for_label(trimmed.as_bytes())
            .map(TextEncoding)
            .ok_or_else(|| Error::UnknownEncoding {
                label: label.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode bytes, replacing malformed sequences with U+FFFD
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let (text, _had_errors) = self.0.decode_with_bom_removal(bytes);
        text
    }

    /// Decode bytes, failing on any malformed sequence. No BOM is stripped.
    pub fn decode_strict<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| Error::Malformed {
                encoding: self.name().to_string(),
            })
    }

    /// Encode text, failing if any character has no mapping in this encoding
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        if self.0 == encoding_rs::UTF_16LE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            ));
        }
        if self.0 == encoding_rs::UTF_16BE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            ));
        }
        // encoding_rs substitutes UTF-8 for decode-only encodings
        if self.0.output_encoding() != self.0 {
            return Err(Error::Unmappable {
                encoding: self.name().to_string(),
            });
        }
        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            return Err(Error::Unmappable {
                encoding: self.name().to_string(),
            });
        }
        Ok(bytes)
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf_8()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TextEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
