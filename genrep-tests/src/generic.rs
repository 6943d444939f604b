//! Datatype-generic functions written once against the combinator variants,
//! plus the thin wrappers that apply them to any representable type.
//!
//! Each function is a trait with one implementation per combinator it can
//! meet at its layer of the representation; the wrappers convert via
//! `into_rep`/`into_rep1` and dispatch. Nothing here assumes a particular
//! nesting of sums or products.

use std::fmt::Debug;

use genrep::{
    Apply, Arity, CompositionRep, ConstructorLayer, ConstructorTag, DatatypeLayer, FieldRep,
    MetaRep, ParameterRep, PartiallyApplied, ProductRep, RecursiveRep, Representable,
    Representable1, SelectorTag, SumRep, TypeCon, UnitRep, VoidRep,
};

/// Number of alternatives a shape makes reachable: sums add, products
/// multiply, metadata passes through.
pub trait CountAlts: TypeCon {
    const ALTS: u64;
}

impl CountAlts for VoidRep<PartiallyApplied> {
    const ALTS: u64 = 0;
}

impl CountAlts for UnitRep<PartiallyApplied> {
    const ALTS: u64 = 1;
}

impl<Role, C> CountAlts for FieldRep<Role, C, PartiallyApplied> {
    const ALTS: u64 = 1;
}

impl CountAlts for ParameterRep<PartiallyApplied> {
    const ALTS: u64 = 1;
}

impl<F: TypeCon> CountAlts for RecursiveRep<F, PartiallyApplied> {
    const ALTS: u64 = 1;
}

impl<F: TypeCon, G: TypeCon> CountAlts for CompositionRep<F, G, PartiallyApplied> {
    const ALTS: u64 = 1;
}

impl<Tag, F: CountAlts> CountAlts for MetaRep<Tag, F, PartiallyApplied> {
    const ALTS: u64 = F::ALTS;
}

impl<F: CountAlts, G: CountAlts> CountAlts for SumRep<F, G, PartiallyApplied> {
    const ALTS: u64 = F::ALTS + G::ALTS;
}

impl<F: CountAlts, G: CountAlts> CountAlts for ProductRep<F, G, PartiallyApplied> {
    const ALTS: u64 = F::ALTS * G::ALTS;
}

pub fn alternatives_of<T>() -> u64
where
    T: Representable,
    T::Repr: CountAlts,
{
    <T::Repr as CountAlts>::ALTS
}

/// Number of fields in one alternative's product tree.
pub trait CountFields: TypeCon {
    const FIELDS: u32;
}

impl CountFields for UnitRep<PartiallyApplied> {
    const FIELDS: u32 = 0;
}

impl<Tag: SelectorTag, F: TypeCon> CountFields for MetaRep<Tag, F, PartiallyApplied> {
    const FIELDS: u32 = 1;
}

impl<F: CountFields, G: CountFields> CountFields for ProductRep<F, G, PartiallyApplied> {
    const FIELDS: u32 = F::FIELDS + G::FIELDS;
}

pub fn constructor_arity<C>() -> Arity
where
    C: ConstructorLayer,
    C::Fields: CountFields,
{
    Arity::Arity(<C::Fields as CountFields>::FIELDS)
}

/// Render one field position of a representation to a debug string.
pub trait RenderField<P>: TypeCon {
    fn render(value: &Self::Of<P>) -> String;
}

impl<Role, C: Debug, P> RenderField<P> for FieldRep<Role, C, PartiallyApplied> {
    fn render(value: &FieldRep<Role, C, P>) -> String {
        format!("{:?}", value.value)
    }
}

impl<P: Debug> RenderField<P> for ParameterRep<PartiallyApplied> {
    fn render(value: &ParameterRep<P>) -> String {
        format!("{:?}", value.value)
    }
}

impl<F: TypeCon, P> RenderField<P> for RecursiveRep<F, PartiallyApplied>
where
    Apply<F, P>: Debug,
{
    fn render(value: &RecursiveRep<F, P>) -> String {
        format!("{:?}", value.inner)
    }
}

impl<F: TypeCon, G: TypeCon, P> RenderField<P> for CompositionRep<F, G, PartiallyApplied>
where
    Apply<F, Apply<G, P>>: Debug,
{
    fn render(value: &CompositionRep<F, G, P>) -> String {
        format!("{:?}", value.inner)
    }
}

/// Collect the active alternative's fields, selector names included, in
/// declaration order.
pub trait CollectFields<P>: TypeCon {
    fn collect(value: &Self::Of<P>, out: &mut Vec<(&'static str, String)>);
}

impl<P> CollectFields<P> for UnitRep<PartiallyApplied> {
    fn collect(_value: &UnitRep<P>, _out: &mut Vec<(&'static str, String)>) {}
}

impl<Tag: SelectorTag, F: RenderField<P>, P> CollectFields<P> for MetaRep<Tag, F, PartiallyApplied> {
    fn collect(value: &MetaRep<Tag, F, P>, out: &mut Vec<(&'static str, String)>) {
        out.push((Tag::NAME, F::render(&value.shape)));
    }
}

impl<F: CollectFields<P>, G: CollectFields<P>, P> CollectFields<P>
    for ProductRep<F, G, PartiallyApplied>
{
    fn collect(value: &ProductRep<F, G, P>, out: &mut Vec<(&'static str, String)>) {
        F::collect(&value.0, out);
        G::collect(&value.1, out);
    }
}

/// Identify and read the active alternative of a sum tree.
pub trait ActiveAlt<P>: TypeCon {
    fn name(value: &Self::Of<P>) -> &'static str;
    fn fields(value: &Self::Of<P>) -> Vec<(&'static str, String)>;
}

impl<P> ActiveAlt<P> for VoidRep<PartiallyApplied> {
    fn name(value: &VoidRep<P>) -> &'static str {
        value.absurd()
    }

    fn fields(value: &VoidRep<P>) -> Vec<(&'static str, String)> {
        value.absurd()
    }
}

impl<F: ActiveAlt<P>, G: ActiveAlt<P>, P> ActiveAlt<P> for SumRep<F, G, PartiallyApplied> {
    fn name(value: &SumRep<F, G, P>) -> &'static str {
        match value {
            SumRep::Left(x) => F::name(x),
            SumRep::Right(x) => G::name(x),
        }
    }

    fn fields(value: &SumRep<F, G, P>) -> Vec<(&'static str, String)> {
        match value {
            SumRep::Left(x) => F::fields(x),
            SumRep::Right(x) => G::fields(x),
        }
    }
}

impl<Tag: ConstructorTag, F: CollectFields<P>, P> ActiveAlt<P>
    for MetaRep<Tag, F, PartiallyApplied>
{
    fn name(_value: &MetaRep<Tag, F, P>) -> &'static str {
        Tag::NAME
    }

    fn fields(value: &MetaRep<Tag, F, P>) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        F::collect(&value.shape, &mut out);
        out
    }
}

pub fn active_constructor<T>(value: T) -> &'static str
where
    T: Representable,
    T::Repr: DatatypeLayer,
    <T::Repr as DatatypeLayer>::Alts: ActiveAlt<PartiallyApplied>,
{
    let alts = <T::Repr as DatatypeLayer>::alternatives(value.into_rep::<PartiallyApplied>());
    <<T::Repr as DatatypeLayer>::Alts as ActiveAlt<PartiallyApplied>>::name(&alts)
}

pub fn field_values<T>(value: T) -> Vec<(&'static str, String)>
where
    T: Representable,
    T::Repr: DatatypeLayer,
    <T::Repr as DatatypeLayer>::Alts: ActiveAlt<PartiallyApplied>,
{
    let alts = <T::Repr as DatatypeLayer>::alternatives(value.into_rep::<PartiallyApplied>());
    <<T::Repr as DatatypeLayer>::Alts as ActiveAlt<PartiallyApplied>>::fields(&alts)
}

pub fn active_constructor1<F, P>(value: F::Of<P>) -> &'static str
where
    F: Representable1,
    F::Repr1: DatatypeLayer,
    <F::Repr1 as DatatypeLayer>::Alts: ActiveAlt<P>,
{
    let alts = <F::Repr1 as DatatypeLayer>::alternatives(F::into_rep1(value));
    <<F::Repr1 as DatatypeLayer>::Alts as ActiveAlt<P>>::name(&alts)
}

pub fn field_values1<F, P>(value: F::Of<P>) -> Vec<(&'static str, String)>
where
    F: Representable1,
    F::Repr1: DatatypeLayer,
    <F::Repr1 as DatatypeLayer>::Alts: ActiveAlt<P>,
{
    let alts = <F::Repr1 as DatatypeLayer>::alternatives(F::into_rep1(value));
    <<F::Repr1 as DatatypeLayer>::Alts as ActiveAlt<P>>::fields(&alts)
}
