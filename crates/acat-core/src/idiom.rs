//! Device idiom (the device class a color variant is scoped to).

/// Device class a catalog color variant targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    /// Applies to every device class (`"universal"`).
    Unspecified,
    /// Phone-class devices (`"iphone"`).
    Phone,
    /// Tablet-class devices (`"ipad"`).
    Pad,
    /// Television (`"tv"`).
    Tv,
}

impl Idiom {
    /// Looks up an idiom from its raw catalog token.
    ///
    /// Exact-match, case-sensitive. Unknown tokens yield `None` rather
    /// than an error; a catalog scoped to a device class this library
    /// does not model still decodes.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "universal" => Some(Self::Unspecified),
            "iphone" => Some(Self::Phone),
            "ipad" => Some(Self::Pad),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }

    /// Returns the catalog token for this idiom.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "universal",
            Self::Phone => "iphone",
            Self::Pad => "ipad",
            Self::Tv => "tv",
        }
    }
}
