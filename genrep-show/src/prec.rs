//! Precedence-aware rendering of leaf values.

use genrep::PartiallyApplied;

/// Precedence-aware rendering; the leaf capability [`crate::show`] requires
/// of field contents. An implementation for a representable type usually
/// delegates straight back to [`crate::show_prec`], closing the loop the same
/// way a derived text instance would.
pub trait ShowPrec {
    fn show_prec(&self, prec: u8, out: &mut String);
}

macro_rules! show_unsigned {
    ($($t:ty)*) => {$(
        impl ShowPrec for $t {
            fn show_prec(&self, _prec: u8, out: &mut String) {
                out.push_str(&self.to_string());
            }
        }
    )*};
}

show_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! show_signed {
    ($($t:ty)*) => {$(
        impl ShowPrec for $t {
            fn show_prec(&self, prec: u8, out: &mut String) {
                // negative literals bind looser than any infix constructor
                if *self < 0 && prec > 6 {
                    out.push('(');
                    out.push_str(&self.to_string());
                    out.push(')');
                } else {
                    out.push_str(&self.to_string());
                }
            }
        }
    )*};
}

show_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! show_float {
    ($($t:ty)*) => {$(
        impl ShowPrec for $t {
            fn show_prec(&self, prec: u8, out: &mut String) {
                if *self < 0.0 && prec > 6 {
                    out.push('(');
                    out.push_str(&self.to_string());
                    out.push(')');
                } else {
                    out.push_str(&self.to_string());
                }
            }
        }
    )*};
}

show_float!(f32 f64);

impl ShowPrec for bool {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ShowPrec for char {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }
}

impl ShowPrec for String {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }
}

impl<'a> ShowPrec for &'a str {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }
}

impl ShowPrec for () {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push_str("()");
    }
}

impl<T: ShowPrec> ShowPrec for Box<T> {
    fn show_prec(&self, prec: u8, out: &mut String) {
        (**self).show_prec(prec, out);
    }
}

impl<T: ShowPrec> ShowPrec for Vec<T> {
    fn show_prec(&self, _prec: u8, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.show_prec(0, out);
        }
        out.push(']');
    }
}

// rendered through its own representation binding
impl<T: ShowPrec + Clone> ShowPrec for Option<T> {
    fn show_prec(&self, prec: u8, out: &mut String) {
        out.push_str(&crate::show_prec(self.clone(), prec));
    }
}

impl ShowPrec for PartiallyApplied {
    fn show_prec(&self, _prec: u8, _out: &mut String) {
        match *self {}
    }
}
