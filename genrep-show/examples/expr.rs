use genrep::{
    Apply, ArgOccurrence, Associativity, ConstructorTag, DatatypeTag, FieldRep, Fixity, MetaRep,
    NoSelector, PartiallyApplied, ProductRep, RecOccurrence, Representable, SumRep,
};
use genrep_show::{show, ShowPrec};

type Meta<Tag, F> = MetaRep<Tag, F, PartiallyApplied>;
type Sum<F, G> = SumRep<F, G, PartiallyApplied>;
type Prod<F, G> = ProductRep<F, G, PartiallyApplied>;
type Arg<C> = FieldRep<ArgOccurrence, C, PartiallyApplied>;
type RecArg<C> = FieldRep<RecOccurrence, C, PartiallyApplied>;

#[derive(Clone)]
pub enum Expr {
    Lit(i64),
    Mul(Box<Expr>, Box<Expr>),
}

pub fn literal(x: i64) -> Expr {
    Expr::Lit(x)
}

pub fn multiply(a: Expr, b: Expr) -> Expr {
    Expr::Mul(Box::new(a), Box::new(b))
}

pub enum ExprTag {}

impl DatatypeTag for ExprTag {
    const NAME: &'static str = "Expr";
    const MODULE: &'static str = "expr";
}

pub enum LitTag {}

impl ConstructorTag for LitTag {
    const NAME: &'static str = "Lit";
}

pub enum MulTag {}

impl ConstructorTag for MulTag {
    const NAME: &'static str = ":*:";
    const FIXITY: Fixity = Fixity::Infix(Associativity::LeftAssociative, 7);
}

impl Representable for Expr {
    type Repr = Meta<
        ExprTag,
        Sum<
            Meta<LitTag, Meta<NoSelector, Arg<i64>>>,
            Meta<
                MulTag,
                Prod<Meta<NoSelector, RecArg<Box<Expr>>>, Meta<NoSelector, RecArg<Box<Expr>>>>,
            >,
        >,
    >;

    fn into_rep<P>(self) -> Apply<Self::Repr, P> {
        MetaRep::new(match self {
            Expr::Lit(x) => SumRep::Left(MetaRep::new(MetaRep::new(FieldRep::new(x)))),
            Expr::Mul(a, b) => SumRep::Right(MetaRep::new(ProductRep(
                MetaRep::new(FieldRep::new(a)),
                MetaRep::new(FieldRep::new(b)),
            ))),
        })
    }

    fn from_rep<P>(rep: Apply<Self::Repr, P>) -> Self {
        match rep.shape {
            SumRep::Left(lit) => Expr::Lit(lit.shape.shape.value),
            SumRep::Right(mul) => {
                let ProductRep(a, b) = mul.shape;
                Expr::Mul(a.shape.value, b.shape.value)
            }
        }
    }
}

impl ShowPrec for Expr {
    fn show_prec(&self, prec: u8, out: &mut String) {
        out.push_str(&genrep_show::show_prec(self.clone(), prec));
    }
}

fn main() {
    println!("{}", show(literal(42)));
    println!("{}", show(multiply(literal(2), literal(-3))));
    println!(
        "{}",
        show(multiply(
            multiply(literal(2), literal(3)),
            multiply(literal(4), literal(5)),
        ))
    );
    println!("{}", show(Some(multiply(literal(6), literal(7)))));
}
