//! Traits shared by the wrappers.

use std::any::Any;

/// Read access to a wrapped payload.
pub trait HasValue {
    type Target: ?Sized;

    fn get(&self) -> &Self::Target;
}

/// String helpers for anything holding an optional string.
///
/// Implementors only provide [`string_value`](Self::string_value); enums
/// with a string per variant can use the helpers too.
pub trait HasStringValue {
    fn string_value(&self) -> Option<&str>;

    /// Number of characters, or zero when absent.
    fn length(&self) -> usize {
        self.string_value().map_or(0, |s| s.chars().count())
    }

    /// True when absent or of zero length.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// True when absent or made only of whitespace.
    ///
    /// Whitespace here is the Unicode space, line and paragraph separators
    /// plus the ASCII control separators. Non-breaking spaces (U+00A0,
    /// U+2007, U+202F) and NEL (U+0085) are not whitespace, so a string of
    /// them is not blank.
    fn is_blank(&self) -> bool {
        self.string_value()
            .map_or(true, |s| s.chars().all(is_separator_whitespace))
    }
}

fn is_separator_whitespace(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Equality against a value of unknown type.
///
/// Only values of exactly the same type can be equal; a different type is
/// never equal, even when it holds an identical payload.
pub trait ExactTypeEq: Any {
    fn eq_exact(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any> ExactTypeEq for T {
    fn eq_exact(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}
