// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub trait IdentifierMarkerName {
    const NAME: &'static str;
}

/// A typed wrapper around an inner id value. Shift ids and volunteer names
/// are opaque strings supplied by the caller, so this is `Clone` rather
/// than `Copy`.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier<I, U>(I, core::marker::PhantomData<U>);

impl<I, U> Identifier<I, U> {
    #[inline]
    pub fn new(id: impl Into<I>) -> Self {
        Self(id.into(), core::marker::PhantomData)
    }

    #[inline]
    pub fn value(&self) -> &I {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<U> Identifier<String, U> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<I, U> std::fmt::Display for Identifier<I, U>
where
    I: std::fmt::Display,
    U: IdentifierMarkerName,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

/// An opaque calendar-day key. Two shifts are on the same day exactly when
/// their keys are equal; no other structure is assumed.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct TestMarker;

    impl IdentifierMarkerName for TestMarker {
        const NAME: &'static str = "TestId";
    }

    #[test]
    fn test_identifier_display_and_value() {
        let id: Identifier<String, TestMarker> = Identifier::new("early-gate");
        assert_eq!(format!("{}", id), "TestId(early-gate)");
        assert_eq!(id.as_str(), "early-gate");
        assert_eq!(id.clone().into_inner(), "early-gate".to_string());
    }

    #[test]
    fn test_identifier_equality_is_by_value() {
        let a: Identifier<String, TestMarker> = Identifier::new("x");
        let b: Identifier<String, TestMarker> = Identifier::new("x");
        let c: Identifier<String, TestMarker> = Identifier::new("y");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_day_key_equality_only() {
        let d1 = DayKey::new("2026-06-06");
        let d2 = DayKey::new("2026-06-06");
        let d3 = DayKey::new("2026-06-07");
        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
        assert_eq!(d1.as_str(), "2026-06-06");
    }
}
