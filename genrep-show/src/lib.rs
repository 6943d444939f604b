//! Render any representable value from its structural encoding, using
//! constructor and selector metadata for layout and precedence for
//! parenthesization.
//!
//! This crate is a consumer of the algebra, not part of it: each combinator
//! variant gets one rendering implementation, and [`show`] is the thin
//! wrapper that converts via `into_rep` and dispatches. Nothing here assumes
//! a particular nesting of sums or products. Constructor-level shapes are out
//! of reach: rendering under an arbitrary outer constructor would need a
//! second, lifted rendering capability.

mod prec;

pub use prec::ShowPrec;

use genrep::{
    Apply, ConstructorTag, DatatypeLayer, FieldRep, Fixity, MetaRep, ParameterRep,
    PartiallyApplied, ProductRep, Representable, SelectorTag, SumRep, TypeCon, UnitRep, VoidRep,
};

/// Render a value at top level.
pub fn show<T>(value: T) -> String
where
    T: Representable,
    T::Repr: DatatypeLayer,
    <T::Repr as DatatypeLayer>::Alts: ShowAlts,
{
    show_prec(value, 0)
}

/// Render a value as it would appear nested in a context of the given
/// precedence.
pub fn show_prec<T>(value: T, prec: u8) -> String
where
    T: Representable,
    T::Repr: DatatypeLayer,
    <T::Repr as DatatypeLayer>::Alts: ShowAlts,
{
    let alts = <T::Repr as DatatypeLayer>::alternatives(value.into_rep::<PartiallyApplied>());
    let mut out = String::new();
    <<T::Repr as DatatypeLayer>::Alts as ShowAlts>::fmt(alts, prec, &mut out);
    out
}

/// Rendering of an alternatives tree: sums dispatch on the active branch,
/// a constructor layer lays out its fields by fixity and record-ness.
pub trait ShowAlts: TypeCon {
    fn fmt<P: ShowPrec>(value: Apply<Self, P>, prec: u8, out: &mut String);
}

impl ShowAlts for VoidRep<PartiallyApplied> {
    fn fmt<P: ShowPrec>(value: VoidRep<P>, _prec: u8, _out: &mut String) {
        value.absurd()
    }
}

impl<F: ShowAlts, G: ShowAlts> ShowAlts for SumRep<F, G, PartiallyApplied> {
    fn fmt<P: ShowPrec>(value: SumRep<F, G, P>, prec: u8, out: &mut String) {
        match value {
            SumRep::Left(x) => F::fmt(x, prec, out),
            SumRep::Right(x) => G::fmt(x, prec, out),
        }
    }
}

impl<Tag: ConstructorTag, F: ShowFields> ShowAlts for MetaRep<Tag, F, PartiallyApplied> {
    fn fmt<P: ShowPrec>(value: MetaRep<Tag, F, P>, prec: u8, out: &mut String) {
        let arg_prec = if Tag::IS_RECORD {
            0
        } else {
            match Tag::FIXITY {
                Fixity::Prefix => 11,
                Fixity::Infix(_, op) => op + 1,
            }
        };
        let mut fields = Vec::new();
        F::collect(value.shape, arg_prec, &mut fields);

        if fields.is_empty() {
            out.push_str(Tag::NAME);
        } else if Tag::IS_RECORD {
            out.push_str(Tag::NAME);
            out.push_str(" { ");
            for (i, (name, rendered)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(rendered);
            }
            out.push_str(" }");
        } else if let (Fixity::Infix(_, op), 2) = (Tag::FIXITY, fields.len()) {
            let paren = prec > op;
            if paren {
                out.push('(');
            }
            out.push_str(&fields[0].1);
            out.push(' ');
            out.push_str(Tag::NAME);
            out.push(' ');
            out.push_str(&fields[1].1);
            if paren {
                out.push(')');
            }
        } else {
            let paren = prec > 10;
            if paren {
                out.push('(');
            }
            out.push_str(Tag::NAME);
            for (_, rendered) in &fields {
                out.push(' ');
                out.push_str(rendered);
            }
            if paren {
                out.push(')');
            }
        }
    }
}

/// Rendering of a fields tree: selector layers render their single field,
/// products concatenate in declaration order.
pub trait ShowFields: TypeCon {
    fn collect<P: ShowPrec>(value: Apply<Self, P>, prec: u8, out: &mut Vec<(&'static str, String)>);
}

impl ShowFields for UnitRep<PartiallyApplied> {
    fn collect<P: ShowPrec>(
        _value: UnitRep<P>,
        _prec: u8,
        _out: &mut Vec<(&'static str, String)>,
    ) {
    }
}

impl<Tag: SelectorTag, F: ShowField> ShowFields for MetaRep<Tag, F, PartiallyApplied> {
    fn collect<P: ShowPrec>(
        value: MetaRep<Tag, F, P>,
        prec: u8,
        out: &mut Vec<(&'static str, String)>,
    ) {
        out.push((Tag::NAME, F::render(value.shape, prec)));
    }
}

impl<F: ShowFields, G: ShowFields> ShowFields for ProductRep<F, G, PartiallyApplied> {
    fn collect<P: ShowPrec>(
        value: ProductRep<F, G, P>,
        prec: u8,
        out: &mut Vec<(&'static str, String)>,
    ) {
        F::collect(value.0, prec, out);
        G::collect(value.1, prec, out);
    }
}

/// Rendering of one field position.
pub trait ShowField: TypeCon {
    fn render<P: ShowPrec>(value: Apply<Self, P>, prec: u8) -> String;
}

impl<Role, C: ShowPrec> ShowField for FieldRep<Role, C, PartiallyApplied> {
    fn render<P: ShowPrec>(value: FieldRep<Role, C, P>, prec: u8) -> String {
        let mut out = String::new();
        value.value.show_prec(prec, &mut out);
        out
    }
}

impl ShowField for ParameterRep<PartiallyApplied> {
    fn render<P: ShowPrec>(value: ParameterRep<P>, prec: u8) -> String {
        let mut out = String::new();
        value.value.show_prec(prec, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genrep::{
        ArgOccurrence, Associativity, ConstructorTag, DatatypeTag, NoSelector, RecOccurrence,
        Representable, SelectorTag,
    };

    type Meta<Tag, F> = MetaRep<Tag, F, PartiallyApplied>;
    type Sum<F, G> = SumRep<F, G, PartiallyApplied>;
    type Prod<F, G> = ProductRep<F, G, PartiallyApplied>;
    type Arg<C> = FieldRep<ArgOccurrence, C, PartiallyApplied>;
    type RecArg<C> = FieldRep<RecOccurrence, C, PartiallyApplied>;
    type Unit = UnitRep<PartiallyApplied>;

    #[derive(Clone)]
    enum Expr {
        Lit(i64),
        Add(Box<Expr>, Box<Expr>),
    }

    enum ExprTag {}

    impl DatatypeTag for ExprTag {
        const NAME: &'static str = "Expr";
        const MODULE: &'static str = "genrep_show::tests";
    }

    enum LitTag {}

    impl ConstructorTag for LitTag {
        const NAME: &'static str = "Lit";
    }

    enum AddTag {}

    impl ConstructorTag for AddTag {
        const NAME: &'static str = ":+:";
        const FIXITY: Fixity = Fixity::Infix(Associativity::LeftAssociative, 6);
    }

    impl Representable for Expr {
        type Repr = Meta<
            ExprTag,
            Sum<
                Meta<LitTag, Meta<NoSelector, Arg<i64>>>,
                Meta<
                    AddTag,
                    Prod<Meta<NoSelector, RecArg<Box<Expr>>>, Meta<NoSelector, RecArg<Box<Expr>>>>,
                >,
            >,
        >;

        fn into_rep<P>(self) -> Apply<Self::Repr, P> {
            MetaRep::new(match self {
                Expr::Lit(x) => SumRep::Left(MetaRep::new(MetaRep::new(FieldRep::new(x)))),
                Expr::Add(a, b) => SumRep::Right(MetaRep::new(ProductRep(
                    MetaRep::new(FieldRep::new(a)),
                    MetaRep::new(FieldRep::new(b)),
                ))),
            })
        }

        fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
            match rep.shape {
                SumRep::Left(lit) => Expr::Lit(lit.shape.shape.value),
                SumRep::Right(add) => {
                    let ProductRep(a, b) = add.shape;
                    Expr::Add(a.shape.value, b.shape.value)
                }
            }
        }
    }

    impl ShowPrec for Expr {
        fn show_prec(&self, prec: u8, out: &mut String) {
            out.push_str(&crate::show_prec(self.clone(), prec));
        }
    }

    fn lit(x: i64) -> Expr {
        Expr::Lit(x)
    }

    fn add(a: Expr, b: Expr) -> Expr {
        Expr::Add(Box::new(a), Box::new(b))
    }

    #[derive(Clone)]
    struct Rect {
        w: u32,
        h: u32,
    }

    enum RectTag {}

    impl DatatypeTag for RectTag {
        const NAME: &'static str = "Rect";
        const MODULE: &'static str = "genrep_show::tests";
    }

    enum RectCtorTag {}

    impl ConstructorTag for RectCtorTag {
        const NAME: &'static str = "Rect";
        const IS_RECORD: bool = true;
    }

    enum WSel {}

    impl SelectorTag for WSel {
        const NAME: &'static str = "w";
    }

    enum HSel {}

    impl SelectorTag for HSel {
        const NAME: &'static str = "h";
    }

    impl Representable for Rect {
        type Repr =
            Meta<RectTag, Meta<RectCtorTag, Prod<Meta<WSel, Arg<u32>>, Meta<HSel, Arg<u32>>>>>;

        fn into_rep<P>(self) -> Apply<Self::Repr, P> {
            MetaRep::new(MetaRep::new(ProductRep(
                MetaRep::new(FieldRep::new(self.w)),
                MetaRep::new(FieldRep::new(self.h)),
            )))
        }

        fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
            let ProductRep(w, h) = rep.shape.shape;
            Rect {
                w: w.shape.value,
                h: h.shape.value,
            }
        }
    }

    #[derive(Clone)]
    enum Dir {
        Up,
        Down,
    }

    enum DirTag {}

    impl DatatypeTag for DirTag {
        const NAME: &'static str = "Dir";
        const MODULE: &'static str = "genrep_show::tests";
    }

    enum UpTag {}

    impl ConstructorTag for UpTag {
        const NAME: &'static str = "Up";
    }

    enum DownTag {}

    impl ConstructorTag for DownTag {
        const NAME: &'static str = "Down";
    }

    impl Representable for Dir {
        type Repr = Meta<DirTag, Sum<Meta<UpTag, Unit>, Meta<DownTag, Unit>>>;

        fn into_rep<P>(self) -> Apply<Self::Repr, P> {
            MetaRep::new(match self {
                Dir::Up => SumRep::Left(MetaRep::new(UnitRep::new())),
                Dir::Down => SumRep::Right(MetaRep::new(UnitRep::new())),
            })
        }

        fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
            match rep.shape {
                SumRep::Left(_) => Dir::Up,
                SumRep::Right(_) => Dir::Down,
            }
        }
    }

    #[test]
    fn prefix_constructors_apply_their_fields() {
        assert_eq!(show(lit(5)), "Lit 5");
        assert_eq!(show(lit(-5)), "Lit (-5)");
    }

    #[test]
    fn nullary_constructors_render_bare() {
        assert_eq!(show(Dir::Up), "Up");
        assert_eq!(show(Dir::Down), "Down");
    }

    #[test]
    fn infix_constructors_parenthesize_by_precedence() {
        let expr = add(lit(1), add(lit(2), lit(3)));
        assert_eq!(show(expr.clone()), "Lit 1 :+: (Lit 2 :+: Lit 3)");
        assert_eq!(show_prec(expr, 7), "(Lit 1 :+: (Lit 2 :+: Lit 3))");
    }

    #[test]
    fn records_render_named_fields() {
        assert_eq!(show(Rect { w: 3, h: 4 }), "Rect { w = 3, h = 4 }");
    }

    #[test]
    fn base_options_render_through_their_own_binding() {
        assert_eq!(show(Option::<u32>::None), "None");
        assert_eq!(show(Some(3u32)), "Some 3");
        assert_eq!(show(Some(Some(3u32))), "Some (Some 3)");
    }
}
