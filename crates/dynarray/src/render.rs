//! Sequence-literal rendering for arrays.
//!
//! `Display` for [`DynamicArray`] produces `[e0, e1, ...]`, or `[]` when
//! empty. Elements are written through [`Render`] rather than `Display`
//! so that an absent payload can print as `None` while a present one
//! prints bare: `[None, 1]`, not `[None, Some(1)]`.

use std::fmt;

use crate::array::DynamicArray;

/// How a single element is written inside a rendered array.
pub trait Render {
    /// Write this element to the formatter.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("None"),
        }
    }
}

impl<T: Render> Render for DynamicArray<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: Render> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}
