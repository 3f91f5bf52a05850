//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a relative jar path (no separators, quotes or entities)
    pub fn library_path() -> impl Strategy<Value = String> {
        (
            proptest::collection::vec("[a-z][a-z0-9_-]{0,8}", 0..3),
            "[a-zA-Z][a-zA-Z0-9_.-]{0,12}",
        )
            .prop_map(|(dirs, file)| {
                let mut path = dirs.join("/");
                if !path.is_empty() {
                    path.push('/');
                }
                format!("{path}{file}.jar")
            })
    }

    /// Generate a dotted class name with 1-4 package components
    pub fn class_id() -> impl Strategy<Value = String> {
        (
            proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..5),
            "[A-Z][A-Za-z0-9]{0,12}",
        )
            .prop_map(|(package, class)| format!("{}.{class}", package.join(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_library_path_generator(path in library_path()) {
            prop_assert!(path.ends_with(".jar"));
            prop_assert!(!path.starts_with('/'));
            prop_assert!(!path.contains(':') && !path.contains(';'));
            prop_assert!(!path.contains('"') && !path.contains('&'));
        }

        #[test]
        fn test_class_id_generator(id in class_id()) {
            let parts: Vec<&str> = id.split('.').collect();
            prop_assert!(parts.len() >= 2);
            prop_assert!(parts.iter().all(|p| !p.is_empty()));
            prop_assert!(parts[parts.len() - 1].starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }
}
