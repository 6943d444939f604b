mod base;
mod generic;
mod kind;
mod meta;
mod repr;

pub use base::{BoolTag, FalseTag, NoneTag, OptionTag, SomeTag, TrueTag};
pub use generic::{Representable, Representable1};
pub use kind::{Apply, PartiallyApplied, TypeCon};
pub use meta::{
    Arity, Associativity, ConstructorLayer, ConstructorTag, DatatypeLayer, DatatypeTag, Fixity,
    NoSelector, SelectorLayer, SelectorTag,
};
pub use repr::{
    ArgOccurrence, CompositionRep, FieldRep, MetaRep, ParameterRep, ProductRep, RecOccurrence,
    RecursiveRep, SumRep, UnitRep, VoidRep,
};
