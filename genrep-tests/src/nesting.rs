//! The same wide datatypes bound twice with different sum/product nestings.
//! Which nesting a binding picks is implementation-defined, so generic
//! consumers must not be able to tell the two bindings apart.

use genrep::{
    Apply, ConstructorTag, DatatypeTag, FieldRep, MetaRep, ProductRep, Representable, SelectorTag,
    SumRep, UnitRep,
};
use proptest::prelude::*;

use crate::tokens::{Field, Meta, Prod, Sum, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

pub enum CompassTag {}

impl DatatypeTag for CompassTag {
    const NAME: &'static str = "Compass";
    const MODULE: &'static str = "genrep_tests::nesting";
}

pub enum NorthTag {}

impl ConstructorTag for NorthTag {
    const NAME: &'static str = "North";
}

pub enum EastTag {}

impl ConstructorTag for EastTag {
    const NAME: &'static str = "East";
}

pub enum SouthTag {}

impl ConstructorTag for SouthTag {
    const NAME: &'static str = "South";
}

pub enum WestTag {}

impl ConstructorTag for WestTag {
    const NAME: &'static str = "West";
}

type NorthAlt = Meta<NorthTag, Unit>;
type EastAlt = Meta<EastTag, Unit>;
type SouthAlt = Meta<SouthTag, Unit>;
type WestAlt = Meta<WestTag, Unit>;

/// Binding that piles all four alternatives onto the left spine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftNested(pub Compass);

impl Representable for LeftNested {
    type Repr = Meta<CompassTag, Sum<Sum<Sum<NorthAlt, EastAlt>, SouthAlt>, WestAlt>>;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        use SumRep::{Left, Right};
        MetaRep::new(match self.0 {
            Compass::North => Left(Left(Left(MetaRep::new(UnitRep::new())))),
            Compass::East => Left(Left(Right(MetaRep::new(UnitRep::new())))),
            Compass::South => Left(Right(MetaRep::new(UnitRep::new()))),
            Compass::West => Right(MetaRep::new(UnitRep::new())),
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        use SumRep::{Left, Right};
        LeftNested(match rep.shape {
            Left(Left(Left(_))) => Compass::North,
            Left(Left(Right(_))) => Compass::East,
            Left(Right(_)) => Compass::South,
            Right(_) => Compass::West,
        })
    }
}

/// Binding for the same datatype that leans right instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightNested(pub Compass);

impl Representable for RightNested {
    type Repr = Meta<CompassTag, Sum<NorthAlt, Sum<EastAlt, Sum<SouthAlt, WestAlt>>>>;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        use SumRep::{Left, Right};
        MetaRep::new(match self.0 {
            Compass::North => Left(MetaRep::new(UnitRep::new())),
            Compass::East => Right(Left(MetaRep::new(UnitRep::new()))),
            Compass::South => Right(Right(Left(MetaRep::new(UnitRep::new())))),
            Compass::West => Right(Right(Right(MetaRep::new(UnitRep::new())))),
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        use SumRep::{Left, Right};
        RightNested(match rep.shape {
            Left(_) => Compass::North,
            Right(Left(_)) => Compass::East,
            Right(Right(Left(_))) => Compass::South,
            Right(Right(Right(_))) => Compass::West,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub a: u8,
    pub b: u16,
    pub c: u32,
    pub d: u64,
}

pub enum QuadTag {}

impl DatatypeTag for QuadTag {
    const NAME: &'static str = "Quad";
    const MODULE: &'static str = "genrep_tests::nesting";
}

pub enum QuadCtorTag {}

impl ConstructorTag for QuadCtorTag {
    const NAME: &'static str = "Quad";
    const IS_RECORD: bool = true;
}

pub enum ASel {}

impl SelectorTag for ASel {
    const NAME: &'static str = "a";
}

pub enum BSel {}

impl SelectorTag for BSel {
    const NAME: &'static str = "b";
}

pub enum CSel {}

impl SelectorTag for CSel {
    const NAME: &'static str = "c";
}

pub enum DSel {}

impl SelectorTag for DSel {
    const NAME: &'static str = "d";
}

type AField = Meta<ASel, Field<u8>>;
type BField = Meta<BSel, Field<u16>>;
type CField = Meta<CSel, Field<u32>>;
type DField = Meta<DSel, Field<u64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftQuad(pub Quad);

impl Representable for LeftQuad {
    type Repr = Meta<QuadTag, Meta<QuadCtorTag, Prod<Prod<Prod<AField, BField>, CField>, DField>>>;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        let Quad { a, b, c, d } = self.0;
        MetaRep::new(MetaRep::new(ProductRep(
            ProductRep(
                ProductRep(
                    MetaRep::new(FieldRep::new(a)),
                    MetaRep::new(FieldRep::new(b)),
                ),
                MetaRep::new(FieldRep::new(c)),
            ),
            MetaRep::new(FieldRep::new(d)),
        )))
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        let ProductRep(abc, d) = rep.shape.shape;
        let ProductRep(ab, c) = abc;
        let ProductRep(a, b) = ab;
        LeftQuad(Quad {
            a: a.shape.value,
            b: b.shape.value,
            c: c.shape.value,
            d: d.shape.value,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightQuad(pub Quad);

impl Representable for RightQuad {
    type Repr = Meta<QuadTag, Meta<QuadCtorTag, Prod<AField, Prod<BField, Prod<CField, DField>>>>>;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        let Quad { a, b, c, d } = self.0;
        MetaRep::new(MetaRep::new(ProductRep(
            MetaRep::new(FieldRep::new(a)),
            ProductRep(
                MetaRep::new(FieldRep::new(b)),
                ProductRep(
                    MetaRep::new(FieldRep::new(c)),
                    MetaRep::new(FieldRep::new(d)),
                ),
            ),
        )))
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        let ProductRep(a, bcd) = rep.shape.shape;
        let ProductRep(b, cd) = bcd;
        let ProductRep(c, d) = cd;
        RightQuad(Quad {
            a: a.shape.value,
            b: b.shape.value,
            c: c.shape.value,
            d: d.shape.value,
        })
    }
}

pub fn arb_compass() -> impl Strategy<Value = Compass> {
    prop_oneof![
        Just(Compass::North),
        Just(Compass::East),
        Just(Compass::South),
        Just(Compass::West),
    ]
}

pub fn arb_quad() -> impl Strategy<Value = Quad> {
    (any::<u8>(), any::<u16>(), any::<u32>(), any::<u64>())
        .prop_map(|(a, b, c, d)| Quad { a, b, c, d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::{active_constructor, alternatives_of, field_values};
    use proptest::proptest;

    #[test]
    fn alternative_count_ignores_nesting() {
        assert_eq!(alternatives_of::<LeftNested>(), 4);
        assert_eq!(alternatives_of::<RightNested>(), 4);
    }

    #[test]
    fn distinct_alternatives_stay_distinguishable() {
        let dirs = [Compass::North, Compass::East, Compass::South, Compass::West];
        for (i, a) in dirs.iter().enumerate() {
            for (j, b) in dirs.iter().enumerate() {
                assert_eq!(
                    LeftNested(*a).into_rep::<()>() == LeftNested(*b).into_rep::<()>(),
                    i == j
                );
                assert_eq!(
                    RightNested(*a).into_rep::<()>() == RightNested(*b).into_rep::<()>(),
                    i == j
                );
            }
        }
    }

    proptest! {
        #[test]
        fn sum_nesting_is_unobservable(compass in arb_compass()) {
            prop_assert_eq!(
                active_constructor(LeftNested(compass)),
                active_constructor(RightNested(compass))
            );
            prop_assert_eq!(LeftNested::from_rep(LeftNested(compass).into_rep::<()>()), LeftNested(compass));
            prop_assert_eq!(RightNested::from_rep(RightNested(compass).into_rep::<()>()), RightNested(compass));
        }

        #[test]
        fn product_nesting_is_unobservable(quad in arb_quad()) {
            let left = field_values(LeftQuad(quad));
            let right = field_values(RightQuad(quad));
            prop_assert_eq!(&left, &right);
            let names: Vec<_> = left.iter().map(|(name, _)| *name).collect();
            prop_assert_eq!(names, vec!["a", "b", "c", "d"]);
            prop_assert_eq!(left[0].1.clone(), format!("{:?}", quad.a));
            prop_assert_eq!(LeftQuad::from_rep(LeftQuad(quad).into_rep::<()>()), LeftQuad(quad));
            prop_assert_eq!(RightQuad::from_rep(RightQuad(quad).into_rep::<()>()), RightQuad(quad));
        }
    }
}
