//! Representation bindings for a few base types.

use crate::generic::{Representable, Representable1};
use crate::kind::{Apply, PartiallyApplied as PA};
use crate::meta::{ConstructorTag, DatatypeTag, NoSelector};
use crate::repr::{ArgOccurrence, FieldRep, MetaRep, ParameterRep, SumRep, UnitRep};

pub enum BoolTag {}

impl DatatypeTag for BoolTag {
    const NAME: &'static str = "bool";
    const MODULE: &'static str = "core";
}

pub enum FalseTag {}

impl ConstructorTag for FalseTag {
    const NAME: &'static str = "false";
}

pub enum TrueTag {}

impl ConstructorTag for TrueTag {
    const NAME: &'static str = "true";
}

impl Representable for bool {
    type Repr = MetaRep<
        BoolTag,
        SumRep<MetaRep<FalseTag, UnitRep<PA>, PA>, MetaRep<TrueTag, UnitRep<PA>, PA>, PA>,
        PA,
    >;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(if self {
            SumRep::Right(MetaRep::new(UnitRep::new()))
        } else {
            SumRep::Left(MetaRep::new(UnitRep::new()))
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        matches!(rep.shape, SumRep::Right(_))
    }
}

pub enum OptionTag {}

impl DatatypeTag for OptionTag {
    const NAME: &'static str = "Option";
    const MODULE: &'static str = "core::option";
}

pub enum NoneTag {}

impl ConstructorTag for NoneTag {
    const NAME: &'static str = "None";
}

pub enum SomeTag {}

impl ConstructorTag for SomeTag {
    const NAME: &'static str = "Some";
}

impl<T> Representable for Option<T> {
    type Repr = MetaRep<
        OptionTag,
        SumRep<
            MetaRep<NoneTag, UnitRep<PA>, PA>,
            MetaRep<SomeTag, MetaRep<NoSelector, FieldRep<ArgOccurrence, T, PA>, PA>, PA>,
            PA,
        >,
        PA,
    >;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(match self {
            None => SumRep::Left(MetaRep::new(UnitRep::new())),
            Some(x) => SumRep::Right(MetaRep::new(MetaRep::new(FieldRep::new(x)))),
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        match rep.shape {
            SumRep::Left(_) => None,
            SumRep::Right(some) => Some(some.shape.shape.value),
        }
    }
}

impl Representable1 for Option<PA> {
    type Repr1 = MetaRep<
        OptionTag,
        SumRep<
            MetaRep<NoneTag, UnitRep<PA>, PA>,
            MetaRep<SomeTag, MetaRep<NoSelector, ParameterRep<PA>, PA>, PA>,
            PA,
        >,
        PA,
    >;

    fn into_rep1<P>(value: Option<P>) -> Apply<Self::Repr1, P> {
        MetaRep::new(match value {
            None => SumRep::Left(MetaRep::new(UnitRep::new())),
            Some(x) => SumRep::Right(MetaRep::new(MetaRep::new(ParameterRep { value: x }))),
        })
    }

    fn from_rep1<P>(rep: Apply<Self::Repr1, P>) -> Option<P> {
        match rep.shape {
            SumRep::Left(_) => None,
            SumRep::Right(some) => Some(some.shape.shape.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{Associativity, Fixity};

    #[test]
    fn bool_round_trips() {
        for b in [false, true] {
            assert_eq!(bool::from_rep(b.into_rep::<()>()), b);
        }
    }

    #[test]
    fn option_round_trips_both_capabilities() {
        for x in [None, Some(17)] {
            assert_eq!(Option::from_rep(x.into_rep::<()>()), x);
            assert_eq!(<Option<PA>>::from_rep1(<Option<PA>>::into_rep1(x)), x);
        }
    }

    #[test]
    fn precedence_of_fixities() {
        assert_eq!(Fixity::Prefix.precedence(), 10);
        assert_eq!(
            Fixity::Infix(Associativity::LeftAssociative, 6).precedence(),
            6
        );
    }
}
