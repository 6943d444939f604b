//! Bindings with richer metadata: a record with named selectors, an infix
//! constructor, and a newtype.

use genrep::{
    Apply, Associativity, ConstructorTag, DatatypeTag, FieldRep, Fixity, MetaRep, NoSelector,
    ProductRep, Representable, SelectorTag,
};
use proptest::prelude::*;

use crate::tokens::{Field, Meta, Prod};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub enum PointTag {}

impl DatatypeTag for PointTag {
    const NAME: &'static str = "Point";
    const MODULE: &'static str = "genrep_tests::records";
}

pub enum PointCtorTag {}

impl ConstructorTag for PointCtorTag {
    const NAME: &'static str = "Point";
    const IS_RECORD: bool = true;
}

pub enum XSel {}

impl SelectorTag for XSel {
    const NAME: &'static str = "x";
}

pub enum YSel {}

impl SelectorTag for YSel {
    const NAME: &'static str = "y";
}

pub type PointRepr =
    Meta<PointTag, Meta<PointCtorTag, Prod<Meta<XSel, Field<f64>>, Meta<YSel, Field<f64>>>>>;

impl Representable for Point {
    type Repr = PointRepr;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(MetaRep::new(ProductRep(
            MetaRep::new(FieldRep::new(self.x)),
            MetaRep::new(FieldRep::new(self.y)),
        )))
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        let ProductRep(x, y) = rep.shape.shape;
        Point {
            x: x.shape.value,
            y: y.shape.value,
        }
    }
}

/// Complex number whose single constructor is written infix, `re :+ im`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex(pub f64, pub f64);

pub enum ComplexTag {}

impl DatatypeTag for ComplexTag {
    const NAME: &'static str = "Complex";
    const MODULE: &'static str = "genrep_tests::records";
}

pub enum ComplexCtorTag {}

impl ConstructorTag for ComplexCtorTag {
    const NAME: &'static str = ":+";
    const FIXITY: Fixity = Fixity::Infix(Associativity::LeftAssociative, 6);
}

pub type ComplexRepr = Meta<
    ComplexTag,
    Meta<ComplexCtorTag, Prod<Meta<NoSelector, Field<f64>>, Meta<NoSelector, Field<f64>>>>,
>;

impl Representable for Complex {
    type Repr = ComplexRepr;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(MetaRep::new(ProductRep(
            MetaRep::new(FieldRep::new(self.0)),
            MetaRep::new(FieldRep::new(self.1)),
        )))
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        let ProductRep(re, im) = rep.shape.shape;
        Complex(re.shape.value, im.shape.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meters(pub u32);

pub enum MetersTag {}

impl DatatypeTag for MetersTag {
    const NAME: &'static str = "Meters";
    const MODULE: &'static str = "genrep_tests::records";
    const IS_NEWTYPE: bool = true;
}

pub enum MetersCtorTag {}

impl ConstructorTag for MetersCtorTag {
    const NAME: &'static str = "Meters";
}

pub type MetersRepr = Meta<MetersTag, Meta<MetersCtorTag, Meta<NoSelector, Field<u32>>>>;

impl Representable for Meters {
    type Repr = MetersRepr;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(MetaRep::new(MetaRep::new(FieldRep::new(self.0))))
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        Meters(rep.shape.shape.shape.value)
    }
}

pub fn arb_point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point {
        x: x as f64,
        y: y as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::{constructor_arity, field_values};
    use genrep::{Arity, DatatypeLayer};
    use proptest::proptest;

    #[test]
    fn record_fields_carry_selector_names_in_order() {
        let fields = field_values(Point { x: 1.0, y: 2.0 });
        assert_eq!(
            fields,
            vec![("x", "1.0".to_string()), ("y", "2.0".to_string())]
        );
    }

    #[test]
    fn record_and_newtype_metadata() {
        assert!(PointCtorTag::IS_RECORD);
        assert_eq!(PointCtorTag::FIXITY, Fixity::Prefix);
        assert!(MetersTag::IS_NEWTYPE);
        assert!(!PointTag::IS_NEWTYPE);
    }

    #[test]
    fn infix_metadata_and_precedence() {
        assert_eq!(ComplexCtorTag::NAME, ":+");
        assert_eq!(
            ComplexCtorTag::FIXITY,
            Fixity::Infix(Associativity::LeftAssociative, 6)
        );
        assert_eq!(ComplexCtorTag::FIXITY.precedence(), 6);
        assert_eq!(Fixity::Prefix.precedence(), 10);
    }

    #[test]
    fn metadata_queries_are_constant() {
        let first = (
            PointTag::NAME,
            PointTag::MODULE,
            ComplexCtorTag::FIXITY,
            XSel::NAME,
        );
        let second = (
            PointTag::NAME,
            PointTag::MODULE,
            ComplexCtorTag::FIXITY,
            XSel::NAME,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn arities_follow_the_field_count() {
        assert_eq!(
            constructor_arity::<<PointRepr as DatatypeLayer>::Alts>(),
            Arity::Arity(2)
        );
        assert_eq!(
            constructor_arity::<<MetersRepr as DatatypeLayer>::Alts>(),
            Arity::Arity(1)
        );
    }

    proptest! {
        #[test]
        fn point_round_trips(point in arb_point()) {
            prop_assert_eq!(Point::from_rep(point.into_rep::<()>()), point);
        }

        #[test]
        fn complex_round_trips(re in any::<i32>(), im in any::<i32>()) {
            let c = Complex(re as f64, im as f64);
            prop_assert_eq!(Complex::from_rep(c.into_rep::<()>()), c);
        }

        #[test]
        fn meters_round_trips(n in any::<u32>()) {
            let m = Meters(n);
            prop_assert_eq!(Meters::from_rep(m.into_rep::<()>()), m);
            let rep = m.into_rep::<()>();
            prop_assert_eq!(Meters::from_rep(rep.clone()).into_rep::<()>(), rep);
        }
    }
}
