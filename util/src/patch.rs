//! Applying partial updates to structs through explicit field mappings.
//!
//! A patch type carries `Option`-valued fields; applying it overwrites the
//! matching target fields that are `Some` and reports whether anything
//! actually changed. The mapping between the two types is spelled out once
//! with [`patch_fields!`], so a missing field or a type mismatch fails at
//! compile time instead of at runtime.

/// A set of optional field updates that can be applied to `T`.
pub trait Patch<T> {
    /// Applies the patch to `target`, returning whether any field changed.
    fn apply_to(&self, target: &mut T) -> bool;
}

/// Applies the listed `Option`-valued fields of `$patch` to `$target` and
/// evaluates to whether any field changed.
///
/// Fields that are `None` leave the target untouched; fields equal to the
/// current value do not count as a change.
///
/// ```
/// use util::patch_fields;
///
/// #[derive(Default, PartialEq, Debug)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// #[derive(Default)]
/// struct ServerPatch {
///     host: Option<String>,
///     port: Option<u16>,
/// }
///
/// let mut server = Server::default();
/// let patch = ServerPatch { host: Some("db1".into()), port: None };
///
/// let changed = patch_fields!(&mut server, patch, { host, port });
/// assert!(changed);
/// assert_eq!(server.host, "db1");
/// assert_eq!(server.port, 0);
/// ```
#[macro_export]
macro_rules! patch_fields {
    ($target:expr, $patch:expr, { $($field:ident),+ $(,)? }) => {{
        let target = $target;
        let patch = &$patch;
        let mut changed = false;
        $(
            if let Some(value) = patch.$field.as_ref() {
                if &target.$field != value {
                    target.$field = value.clone();
                    changed = true;
                }
            }
        )+
        changed
    }};
}
