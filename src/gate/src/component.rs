use std::fmt;

/// Package + class pair naming the component that receives update callbacks.
///
/// Uses the platform's flattened `pkg/cls` form, where a class starting with
/// `.` is shorthand relative to the package (`pkg/.Cls` == `pkg/pkg.Cls`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Parse the flattened form. Returns `None` for malformed input.
    pub fn unflatten(s: &str) -> Option<Self> {
        let (package, class) = s.split_once('/')?;

        if package.is_empty() || class.is_empty() {
            return None;
        }

        let class = match class.strip_prefix('.') {
            Some("") => return None,
            Some(rest) => format!("{package}.{rest}"),
            None => class.to_owned(),
        };

        Some(Self {
            package: package.to_owned(),
            class,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn flatten(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unflatten_full_form() {
        let component = ComponentName::unflatten("pkg.a/pkg.a.Listener").unwrap();
        assert_eq!(component.package(), "pkg.a");
        assert_eq!(component.class(), "pkg.a.Listener");
    }

    #[test]
    fn unflatten_shorthand_expands_package() {
        let component = ComponentName::unflatten("pkg.a/.Listener").unwrap();
        assert_eq!(component, ComponentName::new("pkg.a", "pkg.a.Listener"));
    }

    #[test]
    fn unflatten_rejects_malformed() {
        assert_eq!(ComponentName::unflatten(""), None);
        assert_eq!(ComponentName::unflatten("no-slash"), None);
        assert_eq!(ComponentName::unflatten("/Listener"), None);
        assert_eq!(ComponentName::unflatten("pkg.a/"), None);
        assert_eq!(ComponentName::unflatten("pkg.a/."), None);
    }

    #[test]
    fn flatten_round_trips() {
        let component = ComponentName::new("pkg.b", "pkg.b.Listener");
        assert_eq!(
            ComponentName::unflatten(&component.flatten()),
            Some(component)
        );
    }
}
