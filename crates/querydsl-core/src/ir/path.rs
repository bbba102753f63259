use std::fmt;

///
/// NodePath
///
/// Child-index path from the root of a tree to one node. Displays as `$`
/// for the root and `$.0.2` for the third child of the root's first child.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);

        Self(segments)
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(segments: [usize; N]) -> Self {
        Self(segments.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for index in &self.0 {
            write!(f, ".{index}")?;
        }

        Ok(())
    }
}
