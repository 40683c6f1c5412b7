//! Element equality seam.
//!
//! The solver never relies on identity or on a particular memory layout of the
//! elements it merges. Every comparison goes through an [`ElementEq`]
//! predicate, so composite records can be matched on the fields that matter to
//! the caller.
//!
//! Two implementations are provided:
//! - [`StructuralEq`] forwards to [`PartialEq`]; this is what the plain entry
//!   points use.
//! - any closure `Fn(&T, &T) -> bool`.
//!
//! The predicate must behave like an equivalence relation (reflexive,
//! symmetric, transitive) and be stable for the duration of a call. Violations
//! are not detected; results are then unspecified.

/// Equality predicate over sequence elements.
pub trait ElementEq<T: ?Sized> {
    /// Returns true if `a` and `b` denote the same item.
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// Equality via the element type's [`PartialEq`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralEq;

impl<T: PartialEq + ?Sized> ElementEq<T> for StructuralEq {
    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> ElementEq<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Element-wise sequence equality under `eq`.
pub fn sequences_eq<T, E: ElementEq<T> + ?Sized>(a: &[T], b: &[T], eq: &E) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq.eq(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Stop {
        id: u32,
        label: &'static str,
    }

    #[test]
    fn structural_eq_uses_partial_eq() {
        assert!(ElementEq::<i32>::eq(&StructuralEq, &3, &3));
        assert!(!ElementEq::<i32>::eq(&StructuralEq, &3, &4));
        assert!(ElementEq::<str>::eq(&StructuralEq, "a", "a"));
    }

    #[test]
    fn closure_predicate_matches_on_selected_fields() {
        let by_id = |a: &Stop, b: &Stop| a.id == b.id;
        let x = Stop { id: 7, label: "north gate" };
        let y = Stop { id: 7, label: "North Gate" };
        let z = Stop { id: 8, label: "north gate" };
        assert!(by_id.eq(&x, &y));
        assert!(!by_id.eq(&x, &z));
        assert_eq!(x.label, z.label);
    }

    #[test]
    fn sequences_eq_checks_length_and_elements() {
        assert!(sequences_eq::<u8, _>(&[], &[], &StructuralEq));
        assert!(sequences_eq(&[1, 2], &[1, 2], &StructuralEq));
        assert!(!sequences_eq(&[1, 2], &[1, 2, 3], &StructuralEq));
        assert!(!sequences_eq(&[1, 2], &[2, 1], &StructuralEq));
    }
}
