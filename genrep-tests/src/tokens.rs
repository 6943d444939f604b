//! Short names for token-form combinators, as a derivation step would emit
//! them. A representation shape is a tree of these tokens; the trailing
//! [`PartiallyApplied`] is what makes each combinator usable as a
//! [`genrep::TypeCon`].

use genrep::{
    ArgOccurrence, CompositionRep, FieldRep, MetaRep, ParameterRep, PartiallyApplied, ProductRep,
    RecOccurrence, RecursiveRep, SumRep, UnitRep, VoidRep,
};

pub type Meta<Tag, F> = MetaRep<Tag, F, PartiallyApplied>;
pub type Sum<F, G> = SumRep<F, G, PartiallyApplied>;
pub type Prod<F, G> = ProductRep<F, G, PartiallyApplied>;
pub type Field<C> = FieldRep<ArgOccurrence, C, PartiallyApplied>;
pub type RecField<C> = FieldRep<RecOccurrence, C, PartiallyApplied>;
pub type Unit = UnitRep<PartiallyApplied>;
pub type Void = VoidRep<PartiallyApplied>;
pub type Par = ParameterRep<PartiallyApplied>;
pub type Rec<F> = RecursiveRep<F, PartiallyApplied>;
pub type Comp<F, G> = CompositionRep<F, G, PartiallyApplied>;
