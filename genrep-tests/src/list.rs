//! Constructor-level bindings: a cons list and a rose tree, exercising the
//! parameter, recursion and composition combinators.

use genrep::{
    Apply, CompositionRep, ConstructorTag, DatatypeTag, MetaRep, NoSelector, ParameterRep,
    PartiallyApplied, ProductRep, RecursiveRep, Representable1, SelectorTag, SumRep, TypeCon,
    UnitRep,
};
use proptest::prelude::*;

use crate::tokens::{Comp, Meta, Par, Prod, Rec, Sum, Unit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum List<A> {
    Nil,
    Cons(A, Box<List<A>>),
}

impl<A> List<A> {
    pub fn from_vec(items: Vec<A>) -> List<A> {
        items
            .into_iter()
            .rev()
            .fold(List::Nil, |acc, x| List::Cons(x, Box::new(acc)))
    }

    pub fn into_vec(mut self) -> Vec<A> {
        let mut out = Vec::new();
        loop {
            match self {
                List::Nil => return out,
                List::Cons(x, rest) => {
                    out.push(x);
                    self = *rest;
                }
            }
        }
    }
}

impl TypeCon for List<PartiallyApplied> {
    type Of<P> = List<P>;
}

pub enum ListTag {}

impl DatatypeTag for ListTag {
    const NAME: &'static str = "List";
    const MODULE: &'static str = "genrep_tests::list";
}

pub enum NilTag {}

impl ConstructorTag for NilTag {
    const NAME: &'static str = "Nil";
}

pub enum ConsTag {}

impl ConstructorTag for ConsTag {
    const NAME: &'static str = "Cons";
}

pub type ListRepr1 = Meta<
    ListTag,
    Sum<
        Meta<NilTag, Unit>,
        Meta<
            ConsTag,
            Prod<
                Meta<NoSelector, Par>,
                Meta<NoSelector, Comp<Box<PartiallyApplied>, Rec<List<PartiallyApplied>>>>,
            >,
        >,
    >,
>;

impl Representable1 for List<PartiallyApplied> {
    type Repr1 = ListRepr1;

    fn into_rep1<P>(value: List<P>) -> Apply<Self::Repr1, P> {
        MetaRep::new(match value {
            List::Nil => SumRep::Left(MetaRep::new(UnitRep::new())),
            List::Cons(head, tail) => SumRep::Right(MetaRep::new(ProductRep(
                MetaRep::new(ParameterRep { value: head }),
                MetaRep::new(CompositionRep {
                    inner: Box::new(RecursiveRep { inner: *tail }),
                }),
            ))),
        })
    }

    fn from_rep1<P>(rep: Apply<Self::Repr1, P>) -> List<P> {
        match rep.shape {
            SumRep::Left(_) => List::Nil,
            SumRep::Right(cons) => {
                let ProductRep(head, tail) = cons.shape;
                List::Cons(head.shape.value, Box::new(tail.shape.inner.inner))
            }
        }
    }
}

/// Rose tree: the parameter occurs directly at the label and under `Vec` at
/// the children, so the children position composes `Vec` with a recursive
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rose<A> {
    pub label: A,
    pub children: Vec<Rose<A>>,
}

impl TypeCon for Rose<PartiallyApplied> {
    type Of<P> = Rose<P>;
}

pub enum RoseTag {}

impl DatatypeTag for RoseTag {
    const NAME: &'static str = "Rose";
    const MODULE: &'static str = "genrep_tests::list";
}

pub enum RoseCtorTag {}

impl ConstructorTag for RoseCtorTag {
    const NAME: &'static str = "Rose";
    const IS_RECORD: bool = true;
}

pub enum LabelSel {}

impl SelectorTag for LabelSel {
    const NAME: &'static str = "label";
}

pub enum ChildrenSel {}

impl SelectorTag for ChildrenSel {
    const NAME: &'static str = "children";
}

pub type RoseRepr1 = Meta<
    RoseTag,
    Meta<
        RoseCtorTag,
        Prod<
            Meta<LabelSel, Par>,
            Meta<ChildrenSel, Comp<Vec<PartiallyApplied>, Rec<Rose<PartiallyApplied>>>>,
        >,
    >,
>;

impl Representable1 for Rose<PartiallyApplied> {
    type Repr1 = RoseRepr1;

    fn into_rep1<P>(value: Rose<P>) -> Apply<Self::Repr1, P> {
        MetaRep::new(MetaRep::new(ProductRep(
            MetaRep::new(ParameterRep { value: value.label }),
            MetaRep::new(CompositionRep {
                inner: value
                    .children
                    .into_iter()
                    .map(|child| RecursiveRep { inner: child })
                    .collect(),
            }),
        )))
    }

    fn from_rep1<P>(rep: Apply<Self::Repr1, P>) -> Rose<P> {
        let ProductRep(label, children) = rep.shape.shape;
        Rose {
            label: label.shape.value,
            children: children
                .shape
                .inner
                .into_iter()
                .map(|child| child.inner)
                .collect(),
        }
    }
}

pub fn arb_list() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..32).prop_map(List::from_vec)
}

pub fn arb_rose() -> impl Strategy<Value = Rose<i32>> {
    let leaf = any::<i32>().prop_map(|label| Rose {
        label,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 64, 4, |inner| {
        (any::<i32>(), prop::collection::vec(inner, 0..4)).prop_map(|(label, children)| Rose {
            label,
            children,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::{active_constructor1, field_values1};
    use proptest::proptest;

    type ListTok = List<PartiallyApplied>;
    type RoseTok = Rose<PartiallyApplied>;

    #[test]
    fn constructor_names_follow_the_active_alternative() {
        assert_eq!(active_constructor1::<ListTok, i32>(List::Nil), "Nil");
        assert_eq!(
            active_constructor1::<ListTok, i32>(List::from_vec(vec![1])),
            "Cons"
        );
    }

    #[test]
    fn rose_fields_use_selector_names() {
        let rose = Rose {
            label: 7,
            children: vec![Rose {
                label: 8,
                children: vec![],
            }],
        };
        let fields = field_values1::<RoseTok, i32>(rose);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "label");
        assert_eq!(fields[0].1, "7");
        assert_eq!(fields[1].0, "children");
    }

    proptest! {
        #[test]
        fn list_round_trips(list in arb_list()) {
            prop_assert_eq!(ListTok::from_rep1(ListTok::into_rep1(list.clone())), list.clone());
            let rep = ListTok::into_rep1(list);
            prop_assert_eq!(ListTok::into_rep1(ListTok::from_rep1(rep.clone())), rep);
        }

        #[test]
        fn rose_round_trips(rose in arb_rose()) {
            prop_assert_eq!(RoseTok::from_rep1(RoseTok::into_rep1(rose.clone())), rose.clone());
            let rep = RoseTok::into_rep1(rose);
            prop_assert_eq!(RoseTok::into_rep1(RoseTok::from_rep1(rep.clone())), rep);
        }

        #[test]
        fn cons_cell_splits_parameter_and_recursion(x in any::<i32>(), y in any::<i32>()) {
            match ListTok::into_rep1(List::from_vec(vec![x, y])).shape {
                SumRep::Right(cons) => {
                    let ProductRep(head, tail) = cons.shape;
                    prop_assert_eq!(head.shape.value, x);
                    prop_assert_eq!(tail.shape.inner.inner, List::from_vec(vec![y]));
                }
                SumRep::Left(_) => prop_assert!(false, "non-empty list must encode on the right branch"),
            }
        }

        #[test]
        fn from_vec_into_vec_agree(items in prop::collection::vec(any::<i32>(), 0..32)) {
            prop_assert_eq!(List::from_vec(items.clone()).into_vec(), items);
        }
    }
}
