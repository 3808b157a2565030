pub mod config;
pub mod pattern;

#[cfg(test)]
mod test;

use self::config::{Args, CliArgs, Operation};
use crate::seq::{self, Found};
use anyhow::{Context, Result, anyhow};
use clap::Parser as ClapParser;

const NOT_FOUND: &str = "not found";

pub fn driver_main() -> Result<()> {
    env_logger::init();

    let cli_args = CliArgs::parse();
    let args = Args::try_from(cli_args)?;
    log::info!("{args:?}");

    let driver = Driver::from(args);
    let lines = driver.run()?;
    log::info!("Operation done -> {} line(s)", lines.len());

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

pub struct Driver {
    args: Args,
}
impl From<Args> for Driver {
    fn from(args: Args) -> Self {
        Self { args }
    }
}
impl Driver {
    /// Apply the operation, and describe the result as output lines.
    pub fn run(&self) -> Result<Vec<String>> {
        let elems = &self.args.elements[..];

        let lines = match &self.args.operation {
            Operation::Dedup { hashed: false } => seq::remove_duplicates(elems),
            Operation::Dedup { hashed: true } => seq::remove_duplicates_hashed(elems),
            Operation::Contains(needle) => vec![seq::contains(elems, needle).to_string()],
            Operation::IndexOf(needle) => vec![describe_index(seq::index_of(elems, needle))],
            Operation::Filter(pat) => seq::filter(elems, |elem, _| pat.is_match(elem)),
            Operation::Map(pat, replacement) => seq::map(elems, |elem, _| {
                pat.replace_all(elem, replacement.as_str()).into_owned()
            }),
            Operation::ForEach => {
                let mut lines = Vec::with_capacity(elems.len());
                seq::for_each(elems, |elem, i| lines.push(format!("{i}: {elem}")));
                lines
            }
            Operation::Every(pat) => {
                vec![seq::every(elems, |elem, _| pat.is_match(elem)).to_string()]
            }
            Operation::Some(pat) => {
                vec![seq::some(elems, |elem, _| pat.is_match(elem)).to_string()]
            }
            Operation::Find(pat) => {
                let line = match seq::find(elems, |elem, _| pat.is_match(elem)) {
                    Some(Found { index, elem }) => format!("{index}: {elem}"),
                    None => NOT_FOUND.to_owned(),
                };
                vec![line]
            }
            Operation::FindIndex(pat) => {
                vec![describe_index(seq::find_index(elems, |elem, _| pat.is_match(elem)))]
            }
            Operation::Sum => vec![sum(elems)?.to_string()],
        };

        Ok(lines)
    }
}

fn describe_index(index: Option<usize>) -> String {
    match index {
        Some(index) => index.to_string(),
        None => NOT_FOUND.to_owned(),
    }
}

fn sum(elems: &[String]) -> Result<i64> {
    let nums = seq::map(elems, |elem, i| {
        elem.parse::<i64>()
            .with_context(|| format!("Element #{i} `{elem}` is not an integer."))
    })
    .into_iter()
    .collect::<Result<Vec<_>>>()?;

    seq::reduce(&nums, |acc: Option<i64>, n| acc?.checked_add(*n), Some(0))
        .ok_or_else(|| anyhow!("The sum of {nums:?} overflows."))
}
