// File: rusty-rules/src/params.rs
// Purpose: Normalize every accepted parameter shape into Vec<String>

use std::fmt::Display;

/// Conversion boundary for rule parameters.
///
/// Every operation that takes parameters accepts `impl IntoParams`, so a
/// caller can pass nothing (`()`), a single scalar, a sequence
/// (`Vec`/slice/array), or a positional tuple. All shapes normalize to the
/// same ordered list of strings before any other logic runs, which is what
/// keeps `is_in(["one", "two"])` and `is_in(("one", "two"))` equivalent.
pub trait IntoParams {
    /// Convert into the ordered parameter list.
    fn into_params(self) -> Vec<String>;
}

/// No parameters.
impl IntoParams for () {
    fn into_params(self) -> Vec<String> {
        Vec::new()
    }
}

macro_rules! scalar_params {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoParams for $ty {
            fn into_params(self) -> Vec<String> {
                vec![self.to_string()]
            }
        }

        impl IntoParams for Vec<$ty> {
            fn into_params(self) -> Vec<String> {
                self.into_iter().map(|p| p.to_string()).collect()
            }
        }

        impl IntoParams for &[$ty] {
            fn into_params(self) -> Vec<String> {
                self.iter().map(|p| p.to_string()).collect()
            }
        }

        impl<const N: usize> IntoParams for [$ty; N] {
            fn into_params(self) -> Vec<String> {
                self.iter().map(|p| p.to_string()).collect()
            }
        }
    )*};
}

scalar_params!(
    &str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

// Positional "argument list" form, used by multi-arity rules like `unique`
// where trailing arguments may simply be left off.
macro_rules! tuple_params {
    ($(($($name:ident),+)),+ $(,)?) => {$(
        impl<$($name: Display),+> IntoParams for ($($name,)+) {
            fn into_params(self) -> Vec<String> {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                vec![$($name.to_string()),+]
            }
        }
    )+};
}

tuple_params!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_empty() {
        assert!(().into_params().is_empty());
    }

    #[test]
    fn test_scalar_forms() {
        assert_eq!("blah".into_params(), vec!["blah"]);
        assert_eq!(42u32.into_params(), vec!["42"]);
        assert_eq!(true.into_params(), vec!["true"]);
    }

    #[test]
    fn test_sequence_and_tuple_forms_are_equivalent() {
        let from_vec = vec!["one", "two"].into_params();
        let from_array = ["one", "two"].into_params();
        let from_slice = (&["one", "two"][..]).into_params();
        let from_tuple = ("one", "two").into_params();

        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, from_tuple);
    }

    #[test]
    fn test_mixed_type_tuple() {
        assert_eq!(
            ("users", "email", 20, "some_id").into_params(),
            vec!["users", "email", "20", "some_id"]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(vec![3, 1, 2].into_params(), vec!["3", "1", "2"]);
    }
}
