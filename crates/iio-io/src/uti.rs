//! Uniform type identifiers.
//!
//! The engine names container formats by reverse-DNS type identifiers
//! (`public.png`, `com.compuserve.gif`). [`TypeIdentifier`] is a thin
//! owned wrapper that compares equal to plain strings in both directions.

use std::borrow::Cow;
use std::fmt;

/// Container type identifier.
///
/// ```rust
/// use iio_io::TypeIdentifier;
///
/// assert_eq!(TypeIdentifier::GIF, "com.compuserve.gif");
/// assert_eq!("public.png", TypeIdentifier::PNG);
/// assert_eq!(TypeIdentifier::from("a"), TypeIdentifier::from(String::from("a")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentifier(Cow<'static, str>);

impl TypeIdentifier {
    /// Portable Network Graphics.
    pub const PNG: TypeIdentifier = TypeIdentifier::from_static("public.png");
    /// JPEG.
    pub const JPEG: TypeIdentifier = TypeIdentifier::from_static("public.jpeg");
    /// GIF.
    pub const GIF: TypeIdentifier = TypeIdentifier::from_static("com.compuserve.gif");
    /// TIFF.
    pub const TIFF: TypeIdentifier = TypeIdentifier::from_static("public.tiff");
    /// HEIC.
    pub const HEIC: TypeIdentifier = TypeIdentifier::from_static("public.heic");

    /// Wraps a static identifier without allocating.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Returns the identifier string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeIdentifier {
    fn from(id: &str) -> Self {
        Self(Cow::Owned(id.to_string()))
    }
}

impl From<String> for TypeIdentifier {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl PartialEq<str> for TypeIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for TypeIdentifier {
    fn eq(&self, other: &String) -> bool {
        self.0 == other.as_str()
    }
}

impl PartialEq<TypeIdentifier> for str {
    fn eq(&self, other: &TypeIdentifier) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<TypeIdentifier> for &str {
    fn eq(&self, other: &TypeIdentifier) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<TypeIdentifier> for String {
    fn eq(&self, other: &TypeIdentifier) -> bool {
        self.as_str() == other.as_str()
    }
}
