use std::fmt;

/// Joins the canonical textual form of each value with single ASCII spaces,
/// in input order. The canonical form is whatever the value's `Display` impl
/// produces for a direct print of that value alone. An empty slice yields an
/// empty string, and there is never a trailing separator.
pub fn join_spaced(values: &[&dyn fmt::Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Display` adapter rendering a slice of displayable values as `[a, b, c]`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}
