use crate::utils::error::Result;
use std::borrow::Cow;

/// A single line rewrite applied by the migrator.
///
/// `line` includes its terminator, if any. A rule that does not apply
/// returns `Cow::Borrowed(line)` untouched.
pub trait LineRule: Send + Sync {
    fn name(&self) -> &str;
    fn apply<'a>(&self, line: &'a str) -> Result<Cow<'a, str>>;
}
