use crate::runtime::Effects;

/// Replaces `value` when it differs from `next_value` and reports whether anything changed.
#[inline]
pub fn eq_update<T: PartialEq>(value: &mut T, next_value: T) -> Effects {
    if *value == next_value {
        return Effects::none().unchanged();
    }
    *value = next_value;
    Effects::none()
}
