//! Utility macros

/// Name of the first `(key, option)` pair whose option is `None`, in declaration order.
///
/// ```
/// let name: Option<String> = Some("Maria".into());
/// let document: Option<String> = None;
///
/// let missing = common_utils::first_missing_field![("name", name), ("cpfCnpj", document)];
/// assert_eq!(missing, Some("cpfCnpj"));
/// ```
#[macro_export]
macro_rules! first_missing_field {
    [$(($key:literal, $option:expr)),+ $(,)?] => {
        {
            let mut missing: Option<&'static str> = None;
            $(
                if missing.is_none() && $option.is_none() {
                    missing = Some($key);
                }
            )*
            missing
        }
    };
}
