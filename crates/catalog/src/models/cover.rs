use std::fmt::{Display, Formatter, Result as FmtResult};

/// Cover image metadata attached to a [`Book`](super::Book).
///
/// The catalog never reads the image itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cover {
    /// Path of the image, relative to the covers directory.
    pub path: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}
impl Cover {
    pub fn new(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self { path: path.into(), width, height }
    }
}

impl Display for Cover {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({}x{})", self.path, self.width, self.height)
    }
}
