//! Dropping absent values from a sequence of optionals.

/// A value that is either present, carrying a `Wrapped`, or absent.
pub trait OptionLike {
    /// The type carried when present.
    type Wrapped;

    /// Unwrap into a plain `Option`.
    fn into_option(self) -> Option<Self::Wrapped>;
}

impl<T> OptionLike for Option<T> {
    type Wrapped = T;

    fn into_option(self) -> Option<T> {
        return self;
    }
}

impl<'a, T> OptionLike for &'a Option<T> {
    type Wrapped = &'a T;

    fn into_option(self) -> Option<&'a T> {
        return self.as_ref();
    }
}

/// Keep the value of every present element, in order, and drop the absent ones.
///
/// Borrowing a slice yields references, consuming a vector yields owned values.
///
/// ```
/// use seqtools::compact::compact;
///
/// let items = vec![Some(1), None, Some(3), None];
/// assert_eq!(compact(&items), vec![&1, &3]);
/// assert_eq!(compact(items), vec![1, 3]);
/// ```
pub fn compact<I>(items: I) -> Vec<<I::Item as OptionLike>::Wrapped>
where
    I: IntoIterator,
    I::Item: OptionLike,
{
    let mut result = Vec::new();
    for item in items {
        if let Some(value) = item.into_option() {
            result.push(value);
        }
    }
    return result;
}
