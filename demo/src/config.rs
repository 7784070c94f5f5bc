use anyhow::{ensure, Context, Result};

/// Settings for the diagonal demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Side length of the square whose diagonals are filled in.
    pub size: isize,
    /// Default value of the matrix.
    pub default: i32,
}
impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 10,
            default: 0,
        }
    }
}
impl DemoConfig {
    /// Builds a config from positional command-line arguments (`size`, then
    /// `default`), using the default config for any that are missing.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut ret = Self::default();
        let mut args = args.into_iter();
        if let Some(size) = args.next() {
            ret.size = size
                .parse()
                .with_context(|| format!("Invalid size {:?}", size))?;
        }
        if let Some(default) = args.next() {
            ret.default = default
                .parse()
                .with_context(|| format!("Invalid default value {:?}", default))?;
        }
        ensure!(ret.size >= 3, "Size must be at least 3, got {}", ret.size);
        ensure!(
            ret.size <= i32::MAX as isize,
            "Size {} does not fit in a cell value",
            ret.size
        );
        Ok(ret)
    }
}
