// =============================================================================
// Element capability: values that can be stored in a list
// =============================================================================

use std::fmt::Debug;
use std::rc::Rc;

/// A value that can live in a [`LinkedList`](crate::LinkedList).
///
/// Elements are compared by value, and every element type must be able to
/// say whether a given value is *absent*. The list refuses to store absent
/// values. `Option<U>` uses `None` as its absent value. Plain scalars and
/// strings have no absent value, so the default `is_absent` is `false`.
pub trait Element: PartialEq + Debug {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<U: PartialEq + Debug> Element for Option<U> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<U: Element + ?Sized> Element for Box<U> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<U: Element + ?Sized> Element for Rc<U> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {}
        )*
    };
}

always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, str, &str,
);

/// Checks that `value` may be stored, naming the failed operation otherwise.
pub(crate) fn require_present<T: Element>(value: &T, reason: &'static str) -> crate::Result<()> {
    if value.is_absent() {
        log::debug!("rejected absent element: {}", reason);
        return Err(crate::ListError::invalid_argument(reason));
    }
    Ok(())
}
