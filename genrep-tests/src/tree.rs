//! Hand-written representation bindings for a small recursive tree and for an
//! uninhabited datatype, standing in for the output of an external derivation
//! step.

use genrep::{
    Apply, ConstructorTag, DatatypeTag, FieldRep, MetaRep, NoSelector, ProductRep, Representable,
    SumRep,
};
use proptest::prelude::*;

use crate::tokens::{Field, Meta, Prod, RecField, Sum, Void};

/// Simple binary tree with integer leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Leaf(i64),
    Node(Box<Tree>, Box<Tree>),
}

pub enum TreeTag {}

impl DatatypeTag for TreeTag {
    const NAME: &'static str = "Tree";
    const MODULE: &'static str = "genrep_tests::tree";
}

pub enum LeafTag {}

impl ConstructorTag for LeafTag {
    const NAME: &'static str = "Leaf";
}

pub enum NodeTag {}

impl ConstructorTag for NodeTag {
    const NAME: &'static str = "Node";
}

pub type TreeRepr = Meta<
    TreeTag,
    Sum<
        Meta<LeafTag, Meta<NoSelector, Field<i64>>>,
        Meta<
            NodeTag,
            Prod<Meta<NoSelector, RecField<Box<Tree>>>, Meta<NoSelector, RecField<Box<Tree>>>>,
        >,
    >,
>;

impl Representable for Tree {
    type Repr = TreeRepr;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(match self {
            Tree::Leaf(value) => SumRep::Left(MetaRep::new(MetaRep::new(FieldRep::new(value)))),
            Tree::Node(left, right) => SumRep::Right(MetaRep::new(ProductRep(
                MetaRep::new(FieldRep::new(left)),
                MetaRep::new(FieldRep::new(right)),
            ))),
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        match rep.shape {
            SumRep::Left(leaf) => Tree::Leaf(leaf.shape.shape.value),
            SumRep::Right(node) => {
                let ProductRep(left, right) = node.shape;
                Tree::Node(left.shape.value, right.shape.value)
            }
        }
    }
}

/// A datatype with no alternatives at all. Its conversion pair is total
/// precisely because it can never be called.
pub enum Never {}

pub enum NeverTag {}

impl DatatypeTag for NeverTag {
    const NAME: &'static str = "Never";
    const MODULE: &'static str = "genrep_tests::tree";
}

impl Representable for Never {
    type Repr = Meta<NeverTag, Void>;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        match self {}
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        rep.shape.absurd()
    }
}

pub fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = any::<i8>().prop_map(|x| Tree::Leaf(x as i64));
    leaf.prop_recursive(
        8,   // 8 levels deep
        128, // Shoot for maximum size of 128 nodes
        2,   // 2 children per node
        |inner| (inner.clone(), inner).prop_map(|(l, r)| Tree::Node(Box::new(l), Box::new(r))),
    )
}
