//! The two conversion capabilities bridging concrete values and their
//! structural encodings.

use crate::kind::{Apply, TypeCon};

/// Conversion capability for ordinary types: a bijection between values of
/// `Self` and values of the representation shape `Repr`.
///
/// Both directions are pure and total, and they are inverses:
/// `from_rep(into_rep(x)) == x` and `into_rep(from_rep(r)) == r`. The
/// position parameter `P` is chosen freely per call and never inspected; a
/// `Representable` shape holds no `P` values.
///
/// # Implementing this trait
///
/// An implementation is normally emitted by an external generator, one per
/// datatype, mirroring the datatype's alternatives and fields (a full binding
/// also wraps the root, each alternative, and each field in a
/// [`crate::MetaRep`] layer carrying its tag; elided here):
///
/// ```rust
/// # use genrep::{Apply, ArgOccurrence, FieldRep, Representable, SumRep, UnitRep, PartiallyApplied};
/// #[derive(Debug, PartialEq)]
/// enum Light {
///     Off,
///     On(u8),
/// }
///
/// impl Representable for Light {
///     type Repr = SumRep<
///         UnitRep<PartiallyApplied>,
///         FieldRep<ArgOccurrence, u8, PartiallyApplied>,
///         PartiallyApplied,
///     >;
///
///     fn into_rep<P>(self) -> Apply<Self::Repr, P> {
///         match self {
///             Light::Off => SumRep::Left(UnitRep::new()),
///             Light::On(level) => SumRep::Right(FieldRep::new(level)),
///         }
///     }
///
///     fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
///         match rep {
///             SumRep::Left(_) => Light::Off,
///             SumRep::Right(field) => Light::On(field.value),
///         }
///     }
/// }
///
/// let rep = Light::On(3).into_rep::<()>();
/// assert_eq!(Light::from_rep(rep), Light::On(3));
/// ```
pub trait Representable: Sized {
    /// Token for this type's representation shape.
    type Repr: TypeCon;

    /// Encode a value structurally.
    fn into_rep<P>(self) -> Apply<Self::Repr, P>;

    /// Rebuild a value from its structural encoding.
    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self;
}

/// Conversion capability for type constructors with a distinguished parameter
/// position, implemented on the partially-applied token (eg
/// `List<PartiallyApplied>`).
///
/// Same laws as [`Representable`], but the shape uses
/// [`crate::ParameterRep`] at direct occurrences of the parameter,
/// [`crate::RecursiveRep`] at recursive applications of a constructor to the
/// parameter, and [`crate::CompositionRep`] where the parameter sits under
/// another constructor. A datatype may support [`Representable`], this
/// capability, both, or neither, since the two shapes differ at exactly the
/// positions where the parameter occurs.
pub trait Representable1: TypeCon {
    /// Token for this constructor's representation shape.
    type Repr1: TypeCon;

    /// Encode a value of the applied constructor structurally.
    fn into_rep1<P>(value: Self::Of<P>) -> Apply<Self::Repr1, P>;

    /// Rebuild a value of the applied constructor from its encoding.
    fn from_rep1<P>(rep: Apply<Self::Repr1, P>) -> Self::Of<P>;
}
