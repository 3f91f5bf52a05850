//! Classpath formatting
//!
//! Joins extracted library paths into the single string handed to the
//! compiler's `-classpath` option.

use crate::config::defaults::CLASSPATH_SEPARATOR;
use crate::error::ClasspathError;

/// Join library paths with `separator`.
///
/// A single path is returned as-is. An empty list is an error: the compiler
/// would otherwise receive an empty `-classpath` argument.
pub fn join(libs: &[String], separator: &str) -> Result<String, ClasspathError> {
    if libs.is_empty() {
        return Err(ClasspathError::Empty);
    }
    Ok(libs.join(separator))
}

/// Join library paths with the platform separator
pub fn join_platform(libs: &[String]) -> Result<String, ClasspathError> {
    join(libs, CLASSPATH_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::generators::library_path;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_error() {
        assert_eq!(join(&[], ":"), Err(ClasspathError::Empty));
    }

    #[test]
    fn test_single_entry_has_no_separator() {
        let libs = vec!["res/lib/x.jar".to_string()];
        assert_eq!(join(&libs, ":").unwrap(), "res/lib/x.jar");
    }

    #[test]
    fn test_multiple_entries() {
        let libs = vec!["a.jar".to_string(), "b.jar".to_string(), "c.jar".to_string()];
        assert_eq!(join(&libs, ":").unwrap(), "a.jar:b.jar:c.jar");
        assert_eq!(join(&libs, ";").unwrap(), "a.jar;b.jar;c.jar");
    }

    #[test]
    fn test_platform_separator() {
        let libs = vec!["a.jar".to_string(), "b.jar".to_string()];
        let joined = join_platform(&libs).unwrap();
        assert_eq!(joined, format!("a.jar{CLASSPATH_SEPARATOR}b.jar"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_join_splits_back_to_input(
            libs in proptest::collection::vec(library_path(), 1..10)
        ) {
            let joined = join(&libs, ":").unwrap();
            let parts: Vec<String> = joined.split(':').map(String::from).collect();
            prop_assert_eq!(parts, libs);
        }
    }
}
