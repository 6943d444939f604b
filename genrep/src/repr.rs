//! The representation algebra: a closed set of structural combinators into
//! which any algebraic datatype's shape can be losslessly encoded.
//!
//! Every combinator carries a trailing position parameter `P` so that shapes
//! compose uniformly; the token form of a combinator (`P` =
//! [`PartiallyApplied`]) implements [`TypeCon`], and a whole representation
//! shape is assembled from tokens. No operation here inspects `P`: it is
//! only ever inhabited at [`ParameterRep`] positions, and only when a shape is
//! used through [`crate::Representable1`].
//!
//! A complete binding for a datatype is rooted in a [`MetaRep`] carrying a
//! datatype tag, whose substructure is a [`SumRep`] tree of
//! constructor-tagged alternatives, each a [`ProductRep`] tree of
//! selector-tagged fields. How a binding nests [`SumRep`]/[`ProductRep`] for
//! more than two alternatives or fields is its own business: consumers must
//! work for any nesting.

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::kind::{Apply, PartiallyApplied, TypeCon};

/// Representation of a datatype with zero alternatives.
///
/// No value of this shape exists, so a conversion can never be asked to
/// destructure one; reaching a `VoidRep` at runtime means the binding that
/// produced it does not match its datatype, and [`VoidRep::absurd`] treats
/// that as the fatal condition it is.
pub struct VoidRep<P> {
    never: Infallible,
    _pos: PhantomData<P>,
}

impl<P> VoidRep<P> {
    /// Eliminate an impossible value.
    pub fn absurd(&self) -> ! {
        match self.never {}
    }
}

impl TypeCon for VoidRep<PartiallyApplied> {
    type Of<P> = VoidRep<P>;
}

impl<P> Clone for VoidRep<P> {
    fn clone(&self) -> Self {
        self.absurd()
    }
}

impl<P> Copy for VoidRep<P> {}

impl<P> fmt::Debug for VoidRep<P> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.absurd()
    }
}

impl<P> PartialEq for VoidRep<P> {
    fn eq(&self, _other: &Self) -> bool {
        self.absurd()
    }
}

impl<P> Eq for VoidRep<P> {}

/// Representation of an alternative with zero fields: exactly one inhabitant,
/// carrying no data.
pub struct UnitRep<P> {
    _pos: PhantomData<P>,
}

impl<P> UnitRep<P> {
    pub fn new() -> Self {
        UnitRep { _pos: PhantomData }
    }
}

impl TypeCon for UnitRep<PartiallyApplied> {
    type Of<P> = UnitRep<P>;
}

impl<P> Default for UnitRep<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for UnitRep<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P> Copy for UnitRep<P> {}

impl<P> fmt::Debug for UnitRep<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnitRep")
    }
}

impl<P> PartialEq for UnitRep<P> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<P> Eq for UnitRep<P> {}

/// Role marker for [`FieldRep`]: the field is a recursive occurrence of the
/// datatype being represented.
#[derive(Clone, Copy, Debug)]
pub enum RecOccurrence {}

/// Role marker for [`FieldRep`]: the field is an occurrence of a type
/// unrelated to the distinguished parameter.
#[derive(Clone, Copy, Debug)]
pub enum ArgOccurrence {}

/// Representation of one field's contents: holds exactly one value of the
/// field type `C`.
///
/// `Role` is [`RecOccurrence`] or [`ArgOccurrence`]; the distinction only
/// matters to consumers of [`crate::Representable`] bindings, where recursive
/// positions appear as fields rather than as [`RecursiveRep`].
pub struct FieldRep<Role, C, P> {
    pub value: C,
    _role: PhantomData<(Role, P)>,
}

impl<Role, C, P> FieldRep<Role, C, P> {
    pub fn new(value: C) -> Self {
        FieldRep {
            value,
            _role: PhantomData,
        }
    }
}

impl<Role, C> TypeCon for FieldRep<Role, C, PartiallyApplied> {
    type Of<P> = FieldRep<Role, C, P>;
}

impl<Role, C: Clone, P> Clone for FieldRep<Role, C, P> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Role, C: Copy, P> Copy for FieldRep<Role, C, P> {}

impl<Role, C: fmt::Debug, P> fmt::Debug for FieldRep<Role, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldRep").field(&self.value).finish()
    }
}

impl<Role, C: PartialEq, P> PartialEq for FieldRep<Role, C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Role, C: Eq, P> Eq for FieldRep<Role, C, P> {}

/// Attachment of identity metadata to an enclosed shape.
///
/// `Tag` is a compile-time marker carrying no runtime payload; the metadata
/// itself lives in the [`crate::DatatypeTag`] / [`crate::ConstructorTag`] /
/// [`crate::SelectorTag`] binding for `Tag` and is never recoverable from the
/// wrapped value.
pub struct MetaRep<Tag, F: TypeCon, P> {
    pub shape: Apply<F, P>,
    _tag: PhantomData<Tag>,
}

impl<Tag, F: TypeCon, P> MetaRep<Tag, F, P> {
    pub fn new(shape: Apply<F, P>) -> Self {
        MetaRep {
            shape,
            _tag: PhantomData,
        }
    }
}

impl<Tag, F: TypeCon> TypeCon for MetaRep<Tag, F, PartiallyApplied> {
    type Of<P> = MetaRep<Tag, F, P>;
}

impl<Tag, F: TypeCon, P> Clone for MetaRep<Tag, F, P>
where
    Apply<F, P>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.shape.clone())
    }
}

impl<Tag, F: TypeCon, P> Copy for MetaRep<Tag, F, P> where Apply<F, P>: Copy {}

impl<Tag, F: TypeCon, P> fmt::Debug for MetaRep<Tag, F, P>
where
    Apply<F, P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MetaRep").field(&self.shape).finish()
    }
}

impl<Tag, F: TypeCon, P> PartialEq for MetaRep<Tag, F, P>
where
    Apply<F, P>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl<Tag, F: TypeCon, P> Eq for MetaRep<Tag, F, P> where Apply<F, P>: Eq {}

/// Choice between two sub-shapes.
///
/// An alternative's position in a nested `SumRep` tree is part of its
/// encoding: left at every level is distinguishable from right at every
/// level, however deep the nesting.
pub enum SumRep<F: TypeCon, G: TypeCon, P> {
    Left(Apply<F, P>),
    Right(Apply<G, P>),
}

impl<F: TypeCon, G: TypeCon> TypeCon for SumRep<F, G, PartiallyApplied> {
    type Of<P> = SumRep<F, G, P>;
}

impl<F: TypeCon, G: TypeCon, P> Clone for SumRep<F, G, P>
where
    Apply<F, P>: Clone,
    Apply<G, P>: Clone,
{
    fn clone(&self) -> Self {
        match self {
            SumRep::Left(x) => SumRep::Left(x.clone()),
            SumRep::Right(x) => SumRep::Right(x.clone()),
        }
    }
}

impl<F: TypeCon, G: TypeCon, P> Copy for SumRep<F, G, P>
where
    Apply<F, P>: Copy,
    Apply<G, P>: Copy,
{
}

impl<F: TypeCon, G: TypeCon, P> fmt::Debug for SumRep<F, G, P>
where
    Apply<F, P>: fmt::Debug,
    Apply<G, P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumRep::Left(x) => f.debug_tuple("Left").field(x).finish(),
            SumRep::Right(x) => f.debug_tuple("Right").field(x).finish(),
        }
    }
}

impl<F: TypeCon, G: TypeCon, P> PartialEq for SumRep<F, G, P>
where
    Apply<F, P>: PartialEq,
    Apply<G, P>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SumRep::Left(a), SumRep::Left(b)) => a == b,
            (SumRep::Right(a), SumRep::Right(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: TypeCon, G: TypeCon, P> Eq for SumRep<F, G, P>
where
    Apply<F, P>: Eq,
    Apply<G, P>: Eq,
{
}

/// Conjunction of two sub-shapes: one `F`-shaped value and one `G`-shaped
/// value, in that order.
pub struct ProductRep<F: TypeCon, G: TypeCon, P>(pub Apply<F, P>, pub Apply<G, P>);

impl<F: TypeCon, G: TypeCon> TypeCon for ProductRep<F, G, PartiallyApplied> {
    type Of<P> = ProductRep<F, G, P>;
}

impl<F: TypeCon, G: TypeCon, P> Clone for ProductRep<F, G, P>
where
    Apply<F, P>: Clone,
    Apply<G, P>: Clone,
{
    fn clone(&self) -> Self {
        ProductRep(self.0.clone(), self.1.clone())
    }
}

impl<F: TypeCon, G: TypeCon, P> Copy for ProductRep<F, G, P>
where
    Apply<F, P>: Copy,
    Apply<G, P>: Copy,
{
}

impl<F: TypeCon, G: TypeCon, P> fmt::Debug for ProductRep<F, G, P>
where
    Apply<F, P>: fmt::Debug,
    Apply<G, P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProductRep").field(&self.0).field(&self.1).finish()
    }
}

impl<F: TypeCon, G: TypeCon, P> PartialEq for ProductRep<F, G, P>
where
    Apply<F, P>: PartialEq,
    Apply<G, P>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl<F: TypeCon, G: TypeCon, P> Eq for ProductRep<F, G, P>
where
    Apply<F, P>: Eq,
    Apply<G, P>: Eq,
{
}

/// An outer constructor `F` applied to an inner shape `G`'s occurrence of the
/// parameter: arises when the distinguished parameter sits under another
/// constructor, eg inside a `Vec`.
pub struct CompositionRep<F: TypeCon, G: TypeCon, P> {
    pub inner: Apply<F, Apply<G, P>>,
}

impl<F: TypeCon, G: TypeCon> TypeCon for CompositionRep<F, G, PartiallyApplied> {
    type Of<P> = CompositionRep<F, G, P>;
}

impl<F: TypeCon, G: TypeCon, P> Clone for CompositionRep<F, G, P>
where
    Apply<F, Apply<G, P>>: Clone,
{
    fn clone(&self) -> Self {
        CompositionRep {
            inner: self.inner.clone(),
        }
    }
}

impl<F: TypeCon, G: TypeCon, P> Copy for CompositionRep<F, G, P> where Apply<F, Apply<G, P>>: Copy {}

impl<F: TypeCon, G: TypeCon, P> fmt::Debug for CompositionRep<F, G, P>
where
    Apply<F, Apply<G, P>>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositionRep").field(&self.inner).finish()
    }
}

impl<F: TypeCon, G: TypeCon, P> PartialEq for CompositionRep<F, G, P>
where
    Apply<F, Apply<G, P>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F: TypeCon, G: TypeCon, P> Eq for CompositionRep<F, G, P> where Apply<F, Apply<G, P>>: Eq {}

/// The distinguished parameter's occurrence itself; only meaningful in
/// [`crate::Representable1`] shapes.
pub struct ParameterRep<P> {
    pub value: P,
}

impl TypeCon for ParameterRep<PartiallyApplied> {
    type Of<P> = ParameterRep<P>;
}

impl<P: Clone> Clone for ParameterRep<P> {
    fn clone(&self) -> Self {
        ParameterRep {
            value: self.value.clone(),
        }
    }
}

impl<P: Copy> Copy for ParameterRep<P> {}

impl<P: fmt::Debug> fmt::Debug for ParameterRep<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParameterRep").field(&self.value).finish()
    }
}

impl<P: PartialEq> PartialEq for ParameterRep<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: Eq> Eq for ParameterRep<P> {}

/// A recursive application of the constructor `F` to the parameter; only
/// meaningful in [`crate::Representable1`] shapes.
pub struct RecursiveRep<F: TypeCon, P> {
    pub inner: Apply<F, P>,
}

impl<F: TypeCon> TypeCon for RecursiveRep<F, PartiallyApplied> {
    type Of<P> = RecursiveRep<F, P>;
}

impl<F: TypeCon, P> Clone for RecursiveRep<F, P>
where
    Apply<F, P>: Clone,
{
    fn clone(&self) -> Self {
        RecursiveRep {
            inner: self.inner.clone(),
        }
    }
}

impl<F: TypeCon, P> Copy for RecursiveRep<F, P> where Apply<F, P>: Copy {}

impl<F: TypeCon, P> fmt::Debug for RecursiveRep<F, P>
where
    Apply<F, P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecursiveRep").field(&self.inner).finish()
    }
}

impl<F: TypeCon, P> PartialEq for RecursiveRep<F, P>
where
    Apply<F, P>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F: TypeCon, P> Eq for RecursiveRep<F, P> where Apply<F, P>: Eq {}
