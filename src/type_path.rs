use crate::Path;

const NAMESPACE_SEPARATOR: char = '.';

/// Converts a type into a two-level path of its namespace and simple name.
///
/// The namespace stays a single segment even if it contains dots.
pub fn type_to_path(namespace: &str, name: &str) -> Path {
    Path::root().resolve(namespace).resolve(name)
}

/// Converts a fully-qualified type name such as `com.example.MyTest`.
///
/// A name without a namespace lives in the empty default namespace.
pub fn qualified_type_to_path(qualified_name: &str) -> Path {
    let (namespace, name) = qualified_name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .unwrap_or(("", qualified_name));

    type_to_path(namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_type() {
        let path = type_to_path("com.example", "MyTest");

        assert_eq!(path.serialize(), "com.example/MyTest");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.parent().map(Path::name), Some("com.example"));
    }

    #[test]
    fn convert_type_into_parent_of_nested_scopes() {
        let path = type_to_path("com.example", "MyTest");

        assert!(path.is_parent_of(&path.resolve("describe").resolve("it")));
        assert!(
            Path::root()
                .resolve("com.example")
                .is_parent_of(&path)
        );
    }

    #[test]
    fn convert_qualified_type() {
        assert_eq!(
            qualified_type_to_path("com.example.MyTest"),
            type_to_path("com.example", "MyTest")
        );
    }

    #[test]
    fn convert_qualified_type_in_default_namespace() {
        let path = qualified_type_to_path("MyTest");

        assert_eq!(path, type_to_path("", "MyTest"));
        assert_eq!(path.serialize(), "MyTest");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn keep_separator_in_type_name() {
        let path = type_to_path("com.example", "a/b");

        assert_eq!(path.serialize(), "com.example/a\\/b");
        assert_eq!(Path::deserialize(path.serialize()), Ok(path.clone()));
    }
}
