/// A value that may or may not be present; what `transform_maybe`
/// functions return. An absent value means "skip this item".
pub trait Maybe {
    type Value;

    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Maybe for Option<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T, E> Maybe for Result<T, E> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self.ok()
    }
}
