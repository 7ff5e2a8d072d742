/// Call a function with the fields of a tuple as separate arguments.
pub trait Apply<Args> {
    type Output;

    fn apply(&mut self, args: Args) -> Self::Output;
}

macro_rules! apply_tuple {
    ($($A:ident),+) => {
        #[allow(non_snake_case)]
        impl<O, R, $($A,)+> Apply<($($A,)+)> for O
        where
            O: FnMut($($A,)+) -> R,
        {
            type Output = R;

            fn apply(&mut self, ($($A,)+): ($($A,)+)) -> R {
                self($($A,)+)
            }
        }
    };
}

apply_tuple!(A);
apply_tuple!(A, B);
apply_tuple!(A, B, C);
apply_tuple!(A, B, C, D);
