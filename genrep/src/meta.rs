//! Identity, fixity and layering metadata, keyed by the compile-time tags
//! attached to shapes via [`MetaRep`].
//!
//! A tag is a static artifact: an uninhabited marker type bound to constant
//! data through one of the three tag traits. No tag value ever exists at
//! runtime, and every query is a constant lookup: the same tag yields the
//! same answers on every call.

use crate::kind::{Apply, PartiallyApplied, TypeCon};
use crate::repr::MetaRep;

/// Associativity of an infix constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    LeftAssociative,
    RightAssociative,
    NotAssociative,
}

/// How a constructor is written out: ordinary prefix application, or infix at
/// a declared associativity and precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Infix(Associativity, u8),
}

impl Fixity {
    /// Precedence used when deciding parenthesization: prefix application
    /// binds at 10, an infix constructor at its declared level.
    pub const fn precedence(self) -> u8 {
        match self {
            Fixity::Prefix => 10,
            Fixity::Infix(_, n) => n,
        }
    }
}

/// Argument count of a constructor. Part of the metadata vocabulary available
/// to bindings; nothing in this crate consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    NoArity,
    Arity(u32),
}

/// Identity of a datatype, bound to the tag on the outermost [`MetaRep`]
/// layer of its representation.
pub trait DatatypeTag {
    /// The datatype's declared name.
    const NAME: &'static str;
    /// The module the datatype was declared in.
    const MODULE: &'static str;
    /// Whether the datatype is a single-field wrapper.
    const IS_NEWTYPE: bool = false;
}

/// Identity of one alternative, bound to the tag on its [`MetaRep`] layer.
pub trait ConstructorTag {
    /// The constructor's declared name.
    const NAME: &'static str;
    const FIXITY: Fixity = Fixity::Prefix;
    /// Whether the constructor was declared with named fields.
    const IS_RECORD: bool = false;
}

/// Identity of one field, bound to the tag on its [`MetaRep`] layer.
pub trait SelectorTag {
    /// The field's selector name; empty for a positional field.
    const NAME: &'static str;
}

/// Reserved tag for positional fields.
#[derive(Clone, Copy, Debug)]
pub enum NoSelector {}

impl SelectorTag for NoSelector {
    const NAME: &'static str = "";
}

/// Structural view of a datatype-level [`MetaRep`] layer: recovers the tag
/// and the alternatives tree underneath. A consumer generic over some
/// `T: Representable` cannot name the layers of `T::Repr` directly; these
/// layer views are how it peels them.
pub trait DatatypeLayer: TypeCon {
    type Tag: DatatypeTag;
    type Alts: TypeCon;

    fn alternatives<P>(value: Apply<Self, P>) -> Apply<Self::Alts, P>;
    fn alternatives_ref<P>(value: &Apply<Self, P>) -> &Apply<Self::Alts, P>;
}

impl<Tag: DatatypeTag, F: TypeCon> DatatypeLayer for MetaRep<Tag, F, PartiallyApplied> {
    type Tag = Tag;
    type Alts = F;

    fn alternatives<P>(value: MetaRep<Tag, F, P>) -> Apply<F, P> {
        value.shape
    }

    fn alternatives_ref<P>(value: &MetaRep<Tag, F, P>) -> &Apply<F, P> {
        &value.shape
    }
}

/// Structural view of a constructor-level [`MetaRep`] layer.
pub trait ConstructorLayer: TypeCon {
    type Tag: ConstructorTag;
    type Fields: TypeCon;

    fn fields<P>(value: Apply<Self, P>) -> Apply<Self::Fields, P>;
    fn fields_ref<P>(value: &Apply<Self, P>) -> &Apply<Self::Fields, P>;
}

impl<Tag: ConstructorTag, F: TypeCon> ConstructorLayer for MetaRep<Tag, F, PartiallyApplied> {
    type Tag = Tag;
    type Fields = F;

    fn fields<P>(value: MetaRep<Tag, F, P>) -> Apply<F, P> {
        value.shape
    }

    fn fields_ref<P>(value: &MetaRep<Tag, F, P>) -> &Apply<F, P> {
        &value.shape
    }
}

/// Structural view of a selector-level [`MetaRep`] layer.
pub trait SelectorLayer: TypeCon {
    type Tag: SelectorTag;
    type Contents: TypeCon;

    fn contents<P>(value: Apply<Self, P>) -> Apply<Self::Contents, P>;
    fn contents_ref<P>(value: &Apply<Self, P>) -> &Apply<Self::Contents, P>;
}

impl<Tag: SelectorTag, F: TypeCon> SelectorLayer for MetaRep<Tag, F, PartiallyApplied> {
    type Tag = Tag;
    type Contents = F;

    fn contents<P>(value: MetaRep<Tag, F, P>) -> Apply<F, P> {
        value.shape
    }

    fn contents_ref<P>(value: &MetaRep<Tag, F, P>) -> &Apply<F, P> {
        &value.shape
    }
}
