use super::pattern::Pattern;
use anyhow::{Result, anyhow};
use clap::Parser as ClapParser;

/// Apply one sequence operation to the elements given on the command line.
///
/// With no operation flag, each element is listed with its index.
#[derive(ClapParser, Debug)]
pub struct CliArgs {
    elements: Vec<String>,

    #[clap(long = "dedup")]
    dedup: bool,

    #[clap(long = "hashed", requires = "dedup")]
    hashed: bool,

    #[clap(long = "contains", value_name = "NEEDLE")]
    contains: Option<String>,

    #[clap(long = "index-of", value_name = "NEEDLE")]
    index_of: Option<String>,

    #[clap(long = "filter", value_name = "REGEX")]
    filter: Option<String>,

    #[clap(long = "map", num_args = 2, value_names = ["REGEX", "REPLACEMENT"])]
    map: Option<Vec<String>>,

    #[clap(long = "for-each")]
    for_each: bool,

    #[clap(long = "every", value_name = "REGEX")]
    every: Option<String>,

    #[clap(long = "some", value_name = "REGEX")]
    some: Option<String>,

    #[clap(long = "find", value_name = "REGEX")]
    find: Option<String>,

    #[clap(long = "find-index", value_name = "REGEX")]
    find_index: Option<String>,

    #[clap(long = "sum")]
    sum: bool,
}

#[derive(Debug)]
pub struct Args {
    pub elements: Vec<String>,

    pub operation: Operation,
}
impl TryFrom<CliArgs> for Args {
    type Error = anyhow::Error;
    fn try_from(cli_args: CliArgs) -> Result<Self> {
        let pattern = |s: &String| Pattern::try_from(&s[..]);

        let operation = if cli_args.for_each {
            Operation::ForEach
        } else if cli_args.dedup {
            Operation::Dedup { hashed: cli_args.hashed }
        } else if let Some(needle) = cli_args.contains {
            Operation::Contains(needle)
        } else if let Some(needle) = cli_args.index_of {
            Operation::IndexOf(needle)
        } else if let Some(re) = cli_args.filter {
            Operation::Filter(pattern(&re)?)
        } else if let Some(map_args) = cli_args.map {
            match &map_args[..] {
                [re, replacement] => Operation::Map(pattern(re)?, replacement.clone()),
                _ => return Err(anyhow!("`--map` takes a regex and a replacement. {map_args:?}")),
            }
        } else if let Some(re) = cli_args.every {
            Operation::Every(pattern(&re)?)
        } else if let Some(re) = cli_args.some {
            Operation::Some(pattern(&re)?)
        } else if let Some(re) = cli_args.find {
            Operation::Find(pattern(&re)?)
        } else if let Some(re) = cli_args.find_index {
            Operation::FindIndex(pattern(&re)?)
        } else if cli_args.sum {
            Operation::Sum
        } else {
            Operation::ForEach
        };

        Ok(Self { elements: cli_args.elements, operation })
    }
}

#[derive(Debug)]
pub enum Operation {
    Dedup { hashed: bool },
    Contains(String),
    IndexOf(String),
    Filter(Pattern),
    Map(Pattern, String),
    ForEach,
    Every(Pattern),
    Some(Pattern),
    Find(Pattern),
    FindIndex(Pattern),
    Sum,
}
