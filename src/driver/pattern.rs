use anyhow::{Context, Result};
use derive_more::Deref;
use regex::Regex;

/// A predicate over elements. An element passes if the regex matches anywhere within it.
#[derive(Deref, Debug)]
pub struct Pattern(Regex);
impl<'a> TryFrom<&'a str> for Pattern {
    type Error = anyhow::Error;
    fn try_from(s: &'a str) -> Result<Self> {
        let re = Regex::new(s).with_context(|| format!("Invalid regex `{s}`."))?;
        Ok(Self(re))
    }
}
