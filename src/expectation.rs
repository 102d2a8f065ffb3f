//! Sequence matching for captured emissions.

use std::fmt;

enum Kind<V> {
    Exact(Vec<V>),
    Satisfies {
        label: String,
        check: Box<dyn Fn(&[V]) -> bool>,
    },
}

/// A matcher for the captured emission buffer.
///
/// `Expectation` can match the buffer by:
/// - Exact sequence (element-wise equality, same length and order)
/// - Custom predicate over the whole buffer slice
///
/// Expectations are produced lazily: [`Harness::expect_emissions`] takes a
/// zero-argument thunk evaluated only after the action ran, so the expected
/// values may reference state the action created.
///
/// # Example
///
/// ```ignore
/// use emissary::Expectation;
///
/// // Exact sequence — plain collections convert directly
/// .expect_emissions(|| [1, 2, 3])
/// .expect_emissions(|| vec![state_a, state_b])
///
/// // Custom predicate with a label for the failure message
/// .expect_emissions(|| Expectation::satisfies("ends settled", |buf| {
///     matches!(buf.last(), Some(State::Settled(_)))
/// }))
/// ```
///
/// [`Harness::expect_emissions`]: crate::Harness::expect_emissions
pub struct Expectation<V> {
    kind: Kind<V>,
}

impl<V> fmt::Debug for Expectation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation").finish_non_exhaustive()
    }
}

impl<V: Clone + fmt::Debug + PartialEq + 'static> Expectation<V> {
    /// Match the buffer against an exact expected sequence.
    pub fn exact(expected: impl IntoIterator<Item = V>) -> Self {
        Self {
            kind: Kind::Exact(expected.into_iter().collect()),
        }
    }

    /// Match the buffer with a custom predicate.
    ///
    /// The label stands in for the expected rendering in failure messages,
    /// so pick one that reads as a description of the sequence.
    pub fn satisfies(label: impl Into<String>, check: impl Fn(&[V]) -> bool + 'static) -> Self {
        Self {
            kind: Kind::Satisfies {
                label: label.into(),
                check: Box::new(check),
            },
        }
    }

    /// Returns true if the captured buffer matches this expectation.
    pub(crate) fn matches(&self, actual: &[V]) -> bool {
        match &self.kind {
            Kind::Exact(expected) => expected == actual,
            Kind::Satisfies { check, .. } => check(actual),
        }
    }

    /// Textual rendering of the expected side, used for diffing.
    pub(crate) fn describe(&self) -> String {
        match &self.kind {
            Kind::Exact(expected) => format!("{expected:?}"),
            Kind::Satisfies { label, .. } => format!("<{label}>"),
        }
    }
}

// Allow plain collections to be used directly as exact-sequence matchers
impl<V: Clone + fmt::Debug + PartialEq + 'static> From<Vec<V>> for Expectation<V> {
    fn from(expected: Vec<V>) -> Self {
        Expectation::exact(expected)
    }
}

impl<V: Clone + fmt::Debug + PartialEq + 'static, const N: usize> From<[V; N]> for Expectation<V> {
    fn from(expected: [V; N]) -> Self {
        Expectation::exact(expected)
    }
}

impl<V: Clone + fmt::Debug + PartialEq + 'static> From<&[V]> for Expectation<V> {
    fn from(expected: &[V]) -> Self {
        Expectation::exact(expected.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_same_sequence() {
        let expectation = Expectation::exact([1, 2, 3]);
        assert!(expectation.matches(&[1, 2, 3]));
        assert!(!expectation.matches(&[1, 2]));
        assert!(!expectation.matches(&[1, 3, 2]));
        assert!(!expectation.matches(&[]));
    }

    #[test]
    fn exact_on_empty_sequence() {
        let expectation = Expectation::<i32>::exact([]);
        assert!(expectation.matches(&[]));
        assert!(!expectation.matches(&[0]));
    }

    #[test]
    fn satisfies_uses_predicate() {
        let expectation = Expectation::satisfies("two emissions", |buf: &[i32]| buf.len() == 2);
        assert!(expectation.matches(&[7, 8]));
        assert!(!expectation.matches(&[7]));
    }

    #[test]
    fn from_vec_creates_exact_matcher() {
        let expectation: Expectation<i32> = vec![4, 5].into();
        assert!(expectation.matches(&[4, 5]));
    }

    #[test]
    fn from_array_creates_exact_matcher() {
        let expectation: Expectation<&str> = ["a", "b"].into();
        assert!(expectation.matches(&["a", "b"]));
    }

    #[test]
    fn describe_renders_exact_as_debug_list() {
        let expectation = Expectation::exact([1, 2]);
        assert_eq!(expectation.describe(), "[1, 2]");
    }

    #[test]
    fn describe_renders_predicate_label() {
        let expectation = Expectation::satisfies("ends high", |buf: &[i32]| {
            buf.last().is_some_and(|v| *v > 10)
        });
        assert_eq!(expectation.describe(), "<ends high>");
    }
}
