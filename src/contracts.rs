use crate::style::{ResizeMode, Size};

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

pub trait Sizeable: Sized {
    fn size(self, value: Size) -> Self;
}

pub trait Resizable: Sized {
    fn resize(self, value: ResizeMode) -> Self;
}
