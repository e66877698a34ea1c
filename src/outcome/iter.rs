use crate::outcome::core::Outcome;

/// Borrowing iterator over the success payload of an [`Outcome`].
pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Mutable iterator over the success payload of an [`Outcome`].
pub struct IterMut<'a, S> {
    inner: Option<&'a mut S>,
}

impl<'a, S> Iterator for IterMut<'a, S> {
    type Item = &'a mut S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success payload of an [`Outcome`].
pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<F, S> IntoIterator for Outcome<F, S> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, F, S> IntoIterator for &'a Outcome<F, S> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, F, S> IntoIterator for &'a mut Outcome<F, S> {
    type Item = &'a mut S;
    type IntoIter = IterMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<F, S> Outcome<F, S> {
    /// Iterates over the success payload, yielding it at most once.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<&str, i32> = Outcome::succeed(3);
    /// assert_eq!(outcome.iter().sum::<i32>(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, S> {
        Iter { inner: self.success() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, S> {
        match self {
            Self::Successful(success) => IterMut { inner: Some(success) },
            Self::Failed(_) => IterMut { inner: None },
        }
    }

    /// Iterates over the failure payload, yielding it at most once.
    pub fn iter_failure(&self) -> Iter<'_, F> {
        Iter { inner: self.failure() }
    }
}

/// Collects outcomes into a single outcome, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<&str, Vec<i32>> =
///     vec![Outcome::succeed(1), Outcome::succeed(2)].into_iter().collect();
/// assert_eq!(all, Outcome::succeed(vec![1, 2]));
///
/// let first_failure: Outcome<&str, Vec<i32>> =
///     vec![Outcome::succeed(1), Outcome::fail("a"), Outcome::fail("b")].into_iter().collect();
/// assert_eq!(first_failure, Outcome::fail("a"));
/// ```
impl<F, S, V> FromIterator<Outcome<F, S>> for Outcome<F, V>
where
    V: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<F, S>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, F>>()
            .into()
    }
}
