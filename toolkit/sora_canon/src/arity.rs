//! Exact-arity sequence matchers.
//!
//! Each matcher returns the elements as a tuple iff the sequence has
//! exactly the expected length; a length mismatch is `None`, never a
//! partial result. Arity 1 is [`destructure_single`], named distinctly so
//! "the single element" is never confused with "a one-element grouping".

/// Matches the empty sequence.
pub fn destructure0<I: IntoIterator>(items: I) -> Option<()> {
    let mut iter = items.into_iter();
    if iter.next().is_some() {
        return None;
    }
    Some(())
}

/// Matches a one-element sequence, yielding the element itself.
pub fn destructure_single<I: IntoIterator>(items: I) -> Option<I::Item> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some(first)
}

/// Matches a two-element sequence.
pub fn destructure2<I: IntoIterator>(items: I) -> Option<(I::Item, I::Item)> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Matches a three-element sequence.
pub fn destructure3<I: IntoIterator>(items: I) -> Option<(I::Item, I::Item, I::Item)> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;
    let third = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

/// Matches a four-element sequence.
pub fn destructure4<I: IntoIterator>(
    items: I,
) -> Option<(I::Item, I::Item, I::Item, I::Item)> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;
    let third = iter.next()?;
    let fourth = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some((first, second, third, fourth))
}

/// Matches a five-element sequence.
pub fn destructure5<I: IntoIterator>(
    items: I,
) -> Option<(I::Item, I::Item, I::Item, I::Item, I::Item)> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;
    let third = iter.next()?;
    let fourth = iter.next()?;
    let fifth = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some((first, second, third, fourth, fifth))
}

/// Matches a six-element sequence.
pub fn destructure6<I: IntoIterator>(
    items: I,
) -> Option<(I::Item, I::Item, I::Item, I::Item, I::Item, I::Item)> {
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;
    let third = iter.next()?;
    let fourth = iter.next()?;
    let fifth = iter.next()?;
    let sixth = iter.next()?;
    if iter.next().is_some() {
        return None;
    }
    Some((first, second, third, fourth, fifth, sixth))
}

#[cfg(test)]
mod tests;
