//! Sparse-to-full merge helpers.
//!
//! Option structs mirror the instance they configure with every field wrapped
//! in `Option`. Merging walks the field list once and overwrites a target field
//! only when the matching option is present; everything else keeps the
//! instance's current value.

/// Merges a sparse option struct into an existing instance.
pub trait ApplyOptions<O: ?Sized> {
    fn apply_options(&mut self, options: &O);
}

/// Overwrites `target` with a clone of `value` when present.
pub fn assign<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Like [`assign`], for instance fields that are themselves optional.
pub fn assign_some<T: Clone>(target: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

/// Overwrites `target` with `convert(value)` when present.
pub fn assign_with<T, U>(target: &mut T, value: Option<&U>, convert: impl FnOnce(&U) -> T) {
    if let Some(value) = value {
        *target = convert(value);
    }
}

/// Applies a list of `target_field <- options.option_field` merges.
///
/// `field` alone merges a same-named field; `some field` targets an
/// `Option<_>` instance field.
macro_rules! apply_fields {
    (@munch $target:expr, $options:expr;) => {};
    (@munch $target:expr, $options:expr; some $field:ident $(, $($rest:tt)*)?) => {
        $crate::api::apply::assign_some(&mut $target.$field, $options.$field.as_ref());
        $crate::api::apply::apply_fields!(@munch $target, $options; $($($rest)*)?)
    };
    (@munch $target:expr, $options:expr; $field:ident $(, $($rest:tt)*)?) => {
        $crate::api::apply::assign(&mut $target.$field, $options.$field.as_ref());
        $crate::api::apply::apply_fields!(@munch $target, $options; $($($rest)*)?)
    };
    ($target:expr, $options:expr; $($rest:tt)*) => {
        $crate::api::apply::apply_fields!(@munch $target, $options; $($rest)*)
    };
}

pub(crate) use apply_fields;

#[cfg(test)]
mod tests {
    use super::{assign, assign_some, assign_with};

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        width: f64,
        title: Option<String>,
        count: usize,
    }

    struct Sparse {
        width: Option<f64>,
        title: Option<String>,
    }

    #[test]
    fn absent_values_keep_target() {
        let mut target = Target {
            width: 3.0,
            title: Some("kept".to_owned()),
            count: 1,
        };
        assign(&mut target.width, None);
        assign_some(&mut target.title, None);
        assign_with(&mut target.count, None::<&Vec<u8>>, Vec::len);
        assert_eq!(target.width, 3.0);
        assert_eq!(target.title.as_deref(), Some("kept"));
        assert_eq!(target.count, 1);
    }

    #[test]
    fn macro_merges_only_present_fields() {
        let mut target = Target::default();
        let sparse = Sparse {
            width: None,
            title: Some("Revenue".to_owned()),
        };
        apply_fields!(target, sparse; width, some title);
        assert_eq!(target.width, 0.0);
        assert_eq!(target.title.as_deref(), Some("Revenue"));

        let sparse = Sparse {
            width: Some(12.5),
            title: None,
        };
        apply_fields!(target, sparse; width, some title);
        assert_eq!(target.width, 12.5);
        assert_eq!(target.title.as_deref(), Some("Revenue"));
    }
}
