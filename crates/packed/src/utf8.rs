//! UTF-16 to UTF-8 conversion.
//!
//! Text values are encoded code unit by code unit so that malformed surrogate pairs surface as
//! [`Error::InvalidEncoding`] instead of being replaced or dropped.

use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// Unicode normalization form applied before encoding.
///
/// Only [`NormalizationForm::Current`], which leaves the text untouched, is implemented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    #[default]
    Current,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    /// Returns the conventional name of the form, empty for [`NormalizationForm::Current`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "",
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "" => Ok(Self::Current),
            "NFC" => Ok(Self::Nfc),
            "NFD" => Ok(Self::Nfd),
            "NFKC" => Ok(Self::Nfkc),
            "NFKD" => Ok(Self::Nfkd),
            _ => Err(Error::unsupported(format!("unknown normalization form {s:?}"))),
        }
    }
}

/// Encodes a string as UTF-8 through its UTF-16 code units.
///
/// For any `&str` this equals `s.as_bytes()`.
pub fn to_utf8_bytes(s: &str) -> Result<Vec<u8>> {
    encode_utf16(s.encode_utf16(), NormalizationForm::Current)
}

/// Encodes a sequence of UTF-16 code units as UTF-8.
///
/// A high surrogate must be immediately followed by a low surrogate. A lone low surrogate is
/// encoded as a 3-byte sequence, like any other unit in the basic multilingual plane.
pub fn encode_utf16<I>(units: I, form: NormalizationForm) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = u16>,
{
    if form != NormalizationForm::Current {
        return Err(Error::unsupported(format!("unicode normalization ({form})")));
    }

    let units = units.into_iter();
    let mut out = Vec::with_capacity(units.size_hint().0);
    let mut units = units.enumerate();
    while let Some((position, unit)) = units.next() {
        let c = u32::from(unit);
        if c < 0x80 {
            out.push(c as u8);
        } else if c < 0x800 {
            out.push((c >> 6) as u8 | 0xc0);
            out.push((c & 0x3f) as u8 | 0x80);
        } else if c & 0xfc00 == 0xd800 {
            let low = match units.next() {
                Some((_, low)) if low & 0xfc00 == 0xdc00 => u32::from(low),
                _ => return Err(Error::InvalidEncoding { position, unit }),
            };
            let pair = 0x10000 + ((c & 0x03ff) << 10) + (low & 0x03ff);
            out.push((pair >> 18) as u8 | 0xf0);
            out.push(((pair >> 12) & 0x3f) as u8 | 0x80);
            out.push(((pair >> 6) & 0x3f) as u8 | 0x80);
            out.push((pair & 0x3f) as u8 | 0x80);
        } else {
            out.push((c >> 12) as u8 | 0xe0);
            out.push(((c >> 6) & 0x3f) as u8 | 0x80);
            out.push((c & 0x3f) as u8 | 0x80);
        }
    }
    Ok(out)
}
