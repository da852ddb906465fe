//! Three-way difference of two sequences.
//!
//! [`difference`] classifies elements as only in the left sequence, only in
//! the right one, or in both, using value equality. The tagged result keeps
//! input order: both sequences are walked side by side, index by index,
//! and each step emits the left element and then the right one.
//!
//! The walk is positional, not a content-aware diff. With
//! `left = [a, b, c, d, e]` and `right = [a, b, e, f, d]`:
//!
//! | step | left | right | emitted |
//! |---|---|---|---|
//! | 1 | a | a | `InBoth a` (equal, emitted once) |
//! | 2 | b | b | `InBoth b` |
//! | 3 | c | e | `OnlyInLeft c`, `InBoth e` |
//! | 4 | d | f | `InBoth d`, `OnlyInRight f` |
//! | 5 | e | d | `InBoth e`, `InBoth d` |

use std::fmt;

use serde::{Deserialize, Serialize};
use valuekit_objects::{field_list, structural_eq, structural_hash, ToStringStyle};

/// Where an element was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Origin {
    OnlyInLeft,
    InBoth,
    OnlyInRight,
}

/// One element of a [`CollectionDifference`], tagged with its origin.
#[derive(Clone, Serialize, Deserialize)]
pub struct DifferenceElement<T> {
    found_in: Origin,
    object: T,
}

field_list!(DifferenceElement<T> { found_in, object });
structural_eq!(DifferenceElement<T> { found_in, object });
structural_hash!(DifferenceElement<T> { found_in, object });

impl<T: Eq> Eq for DifferenceElement<T> {}

impl<T> DifferenceElement<T> {
    pub fn new(found_in: Origin, object: T) -> Self {
        Self { found_in, object }
    }

    pub fn found_in(&self) -> Origin {
        self.found_in
    }

    pub fn object(&self) -> &T {
        &self.object
    }

    pub fn into_object(self) -> T {
        self.object
    }
}

impl<T: fmt::Debug> fmt::Debug for DifferenceElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ToStringStyle::short_prefix().render(self))
    }
}

/// The ordered, tagged result of [`difference`].
#[derive(Clone, Serialize, Deserialize)]
pub struct CollectionDifference<T> {
    elements: Vec<DifferenceElement<T>>,
}

field_list!(CollectionDifference<T> { elements });
structural_eq!(CollectionDifference<T> { elements });
structural_hash!(CollectionDifference<T> { elements });

impl<T: Eq> Eq for CollectionDifference<T> {}

impl<T> CollectionDifference<T> {
    pub fn new(elements: Vec<DifferenceElement<T>>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DifferenceElement<T>> {
        self.elements.iter()
    }

    /// Elements with the given origin, in result order.
    pub fn found_in(&self, origin: Origin) -> impl Iterator<Item = &DifferenceElement<T>> + '_ {
        self.elements.iter().filter(move |e| e.found_in == origin)
    }

    pub fn only_in_left(&self) -> impl Iterator<Item = &DifferenceElement<T>> + '_ {
        self.found_in(Origin::OnlyInLeft)
    }

    pub fn in_both(&self) -> impl Iterator<Item = &DifferenceElement<T>> + '_ {
        self.found_in(Origin::InBoth)
    }

    pub fn only_in_right(&self) -> impl Iterator<Item = &DifferenceElement<T>> + '_ {
        self.found_in(Origin::OnlyInRight)
    }
}

impl<T: fmt::Debug> fmt::Debug for CollectionDifference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ToStringStyle::short_prefix().render(self))
    }
}

impl<T> IntoIterator for CollectionDifference<T> {
    type Item = DifferenceElement<T>;
    type IntoIter = std::vec::IntoIter<DifferenceElement<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CollectionDifference<T> {
    type Item = &'a DifferenceElement<T>;
    type IntoIter = std::slice::Iter<'a, DifferenceElement<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Compute the tagged difference of `left` and `right`.
///
/// Equality is `PartialEq`, so duplicates are classified by value: every
/// occurrence of an element present in the other sequence is "in both".
pub fn difference<T: PartialEq + Clone>(left: &[T], right: &[T]) -> CollectionDifference<T> {
    // {L-R}, {R-L} and {L-(L-R)}
    let only_in_left: Vec<&T> = left.iter().filter(|&l| !right.contains(l)).collect();
    let only_in_right: Vec<&T> = right.iter().filter(|&r| !left.contains(r)).collect();
    let in_both: Vec<&T> = left.iter().filter(|&l| !only_in_left.contains(&l)).collect();

    let mut elements = Vec::with_capacity(left.len() + right.len());
    for index in 0..left.len().max(right.len()) {
        let from_left = left.get(index);
        let from_right = right.get(index);

        if let Some(l) = from_left {
            if only_in_left.contains(&l) {
                elements.push(DifferenceElement::new(Origin::OnlyInLeft, l.clone()));
            }
            if in_both.contains(&l) {
                elements.push(DifferenceElement::new(Origin::InBoth, l.clone()));
            }
        }
        if let Some(r) = from_right {
            if in_both.contains(&r) && from_left != Some(r) {
                elements.push(DifferenceElement::new(Origin::InBoth, r.clone()));
            }
            if only_in_right.contains(&r) {
                elements.push(DifferenceElement::new(Origin::OnlyInRight, r.clone()));
            }
        }
    }

    tracing::trace!(
        left = left.len(),
        right = right.len(),
        elements = elements.len(),
        "computed collection difference"
    );
    CollectionDifference::new(elements)
}
