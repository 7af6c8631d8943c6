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

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

pub trait MarkerName {
    const NAME_POINT: &'static str;
    const NAME_DELTA: &'static str;
}

/// An absolute position on an affine axis. Only deltas may be added to it;
/// subtracting two points yields a delta.
#[repr(transparent)]
#[must_use]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T, U>(T, core::marker::PhantomData<U>);

impl<T: Clone, U> Clone for Point<T, U> {
    #[inline]
    fn clone(&self) -> Self {
        Point(self.0.clone(), core::marker::PhantomData)
    }
}

impl<T: Copy, U> Copy for Point<T, U> {}

impl<T, U> Point<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Point(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Point::new(T::zero())
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn checked_add(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedAdd,
    {
        self.0.checked_add(&d.0).map(Point::new)
    }

    #[inline]
    pub fn checked_sub(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedSub<Output = T>,
    {
        self.0.checked_sub(&d.0).map(Point::new)
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Point<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_POINT, self.0)
    }
}

impl<T, U> Default for Point<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Point::new(T::zero())
    }
}

impl<T, U> Add<Delta<T, U>> for Point<T, U>
where
    T: CheckedAdd,
{
    type Output = Point<T, U>;

    #[inline]
    fn add(self, rhs: Delta<T, U>) -> Self::Output {
        Point::new(self.0.checked_add(&rhs.0).expect("error in Point + Delta"))
    }
}

impl<T, U> Sub<Delta<T, U>> for Point<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Point<T, U>;

    fn sub(self, rhs: Delta<T, U>) -> Self::Output {
        Point::new(self.0.checked_sub(&rhs.0).expect("error in Point - Delta"))
    }
}

impl<T, U> Sub<Point<T, U>> for Point<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Delta<T, U>;

    fn sub(self, rhs: Point<T, U>) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Point - Point"))
    }
}

/// A signed distance between two points on the same axis.
#[repr(transparent)]
#[must_use]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta<T, U>(T, core::marker::PhantomData<U>);

impl<T: Clone, U> Clone for Delta<T, U> {
    #[inline]
    fn clone(&self) -> Self {
        Delta(self.0.clone(), core::marker::PhantomData)
    }
}

impl<T: Copy, U> Copy for Delta<T, U> {}

impl<T, U> Delta<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Delta(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Delta::new(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool
    where
        T: Zero + PartialOrd,
    {
        self.0 < T::zero()
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Delta<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_DELTA, self.0)
    }
}

impl<T, U> Zero for Delta<T, U>
where
    T: Zero + CheckedAdd,
{
    #[inline]
    fn zero() -> Self {
        Delta::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T, U> Default for Delta<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Delta::new(T::zero())
    }
}

impl<T, U> From<T> for Delta<T, U> {
    #[inline]
    fn from(v: T) -> Self {
        Delta::new(v)
    }
}

impl<T, U> Add for Delta<T, U>
where
    T: CheckedAdd,
{
    type Output = Delta<T, U>;

    fn add(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_add(&rhs.0).expect("error in Delta + Delta"))
    }
}

impl<T, U> AddAssign for Delta<T, U>
where
    T: CheckedAdd,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_add(&rhs.0).expect("error in Delta += Delta");
    }
}

impl<T, U> Sub for Delta<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Delta<T, U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Delta - Delta"))
    }
}

impl<T, U> SubAssign for Delta<T, U>
where
    T: CheckedSub<Output = T>,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_sub(&rhs.0).expect("error in Delta -= Delta");
    }
}

impl<T, U> Mul<T> for Delta<T, U>
where
    T: CheckedMul,
{
    type Output = Delta<T, U>;

    fn mul(self, rhs: T) -> Self::Output {
        Delta::new(self.0.checked_mul(&rhs).expect("error in Delta * scalar"))
    }
}

impl<T, U> Sum for Delta<T, U>
where
    T: Zero + CheckedAdd,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    fn tp(v: i64) -> Point<i64, ()> {
        Point::new(v)
    }
    fn dt(v: i64) -> Delta<i64, ()> {
        Delta::new(v)
    }

    #[test]
    fn test_size_and_repr_transparent() {
        assert_eq!(mem::size_of::<Point<i64, ()>>(), mem::size_of::<i64>());
        assert_eq!(mem::size_of::<Delta<i64, ()>>(), mem::size_of::<i64>());
    }

    #[test]
    fn test_display_uses_marker_names() {
        struct MyMarker;
        impl MarkerName for MyMarker {
            const NAME_POINT: &'static str = "MyPoint";
            const NAME_DELTA: &'static str = "MyDelta";
        }

        let p: Point<i64, MyMarker> = Point::new(42);
        let d: Delta<i64, MyMarker> = Delta::new(7);

        assert_eq!(format!("{}", p), "MyPoint(42)");
        assert_eq!(format!("{}", d), "MyDelta(7)");
    }

    #[test]
    fn test_point_plus_minus_delta() {
        let p = tp(10);
        let d = dt(5);
        assert_eq!((p + d).value(), 15);
        assert_eq!((p - d).value(), 5);
    }

    #[test]
    fn test_point_minus_point_is_delta() {
        assert_eq!((tp(20) - tp(5)).value(), 15);
        assert_eq!((tp(5) - tp(20)).value(), -15);
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(tp(i64::MAX).checked_add(dt(1)), None);
        assert_eq!(tp(10).checked_sub(dt(3)).unwrap().value(), 7);
    }

    #[test]
    fn test_delta_arith_and_sign() {
        let mut a = dt(7);
        a += dt(3);
        assert_eq!(a.value(), 10);
        a -= dt(4);
        assert_eq!(a.value(), 6);
        assert_eq!((a * 10).value(), 60);
        assert!(dt(-1).is_negative());
        assert!(!dt(0).is_negative());
    }

    #[test]
    fn test_delta_sum() {
        let v = vec![dt(1), dt(2), dt(3), dt(4)];
        let sum: Delta<i64, ()> = v.into_iter().sum();
        assert_eq!(sum.value(), 10);
    }

    #[test]
    #[should_panic(expected = "error in Point + Delta")]
    fn test_panic_point_add_overflow() {
        let _ = tp(i64::MAX) + dt(1);
    }

    #[test]
    #[should_panic(expected = "error in Delta - Delta")]
    fn test_panic_delta_sub_underflow() {
        let _ = Delta::<i64, ()>::new(i64::MIN) - dt(1);
    }
}
