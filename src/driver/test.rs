use super::*;
use crate::test::utils::fail;

fn run(argv: &[&str]) -> Result<Vec<String>> {
    let argv = std::iter::once("seq_driver").chain(argv.iter().copied());
    let cli_args = CliArgs::try_parse_from(argv)?;
    let args = Args::try_from(cli_args)?;
    Driver::from(args).run()
}

const NAMES: [&str; 5] = ["Mickey", "Minnie", "Goofy", "Donald", "Minnie"];

fn with_names<'a>(flags: &[&'a str]) -> Vec<&'a str> {
    [flags, &["--"][..], &NAMES[..]].concat()
}

#[test]
fn default_lists_elements() -> Result<()> {
    let expected = vec!["0: a", "1: b"];
    assert_eq!(run(&["a", "b"])?, expected);
    assert_eq!(run(&["--for-each", "a", "b"])?, expected);
    assert!(run(&[])?.is_empty());
    Ok(())
}

#[test]
fn dedup() -> Result<()> {
    let expected = vec!["Mickey", "Minnie", "Goofy", "Donald"];
    assert_eq!(run(&with_names(&["--dedup"]))?, expected);
    assert_eq!(run(&with_names(&["--dedup", "--hashed"]))?, expected);
    assert!(run(&["--hashed", "a"]).is_err());
    Ok(())
}

#[test]
fn lookup() -> Result<()> {
    assert_eq!(run(&with_names(&["--contains", "Goofy"]))?, vec!["true"]);
    assert_eq!(run(&with_names(&["--contains", "Pluto"]))?, vec!["false"]);
    assert_eq!(run(&with_names(&["--index-of", "Minnie"]))?, vec!["1"]);
    assert_eq!(run(&with_names(&["--index-of", "Pluto"]))?, vec!["not found"]);
    Ok(())
}

#[test]
fn predicates() -> Result<()> {
    assert_eq!(run(&with_names(&["--filter", "^Mi"]))?, vec!["Mickey", "Minnie", "Minnie"]);
    assert!(run(&with_names(&["--filter", "z"]))?.is_empty());
    assert_eq!(run(&with_names(&["--every", "[a-z]"]))?, vec!["true"]);
    assert_eq!(run(&with_names(&["--every", "^M"]))?, vec!["false"]);
    assert_eq!(run(&with_names(&["--some", "^D"]))?, vec!["true"]);
    assert_eq!(run(&with_names(&["--some", "^P"]))?, vec!["false"]);
    assert_eq!(run(&["--every", "x"])?, vec!["true"]);
    assert_eq!(run(&["--some", "x"])?, vec!["false"]);
    Ok(())
}

#[test]
fn find() -> Result<()> {
    assert_eq!(run(&with_names(&["--find", "^G"]))?, vec!["2: Goofy"]);
    assert_eq!(run(&with_names(&["--find", "nn"]))?, vec!["1: Minnie"]);
    assert_eq!(run(&with_names(&["--find", "^P"]))?, vec!["not found"]);
    assert_eq!(run(&with_names(&["--find-index", "ld$"]))?, vec!["3"]);
    assert_eq!(run(&with_names(&["--find-index", "^P"]))?, vec!["not found"]);
    Ok(())
}

#[test]
fn map() -> Result<()> {
    let out = run(&with_names(&["--map", "[aeiou]", "_"]))?;
    assert_eq!(out, vec!["M_ck_y", "M_nn__", "G__fy", "D_n_ld", "M_nn__"]);

    let out = run(&["--map", r"(\w+)@(\w+)", "$2.$1", "--", "a@b", "plain"])?;
    assert_eq!(out, vec!["b.a", "plain"]);
    Ok(())
}

#[test]
fn sum() -> Result<()> {
    assert_eq!(run(&["--sum", "--", "1", "5", "4"])?, vec!["10"]);
    assert_eq!(run(&["--sum", "--", "-3", "3"])?, vec!["0"]);
    assert_eq!(run(&["--sum"])?, vec!["0"]);

    match run(&["--sum", "--", "1", "two"]) {
        Err(e) => assert!(format!("{e:#}").contains("Element #1 `two`"), "{e:#}"),
        Ok(actual) => fail!("{actual:?}"),
    }
    let max = i64::MAX.to_string();
    assert!(run(&["--sum", "--", max.as_str(), "1"]).is_err());
    Ok(())
}

#[test]
fn invalid_regex() {
    match run(&with_names(&["--filter", "("])) {
        Err(e) => assert!(format!("{e:#}").contains("Invalid regex `(`"), "{e:#}"),
        Ok(actual) => fail!("{actual:?}"),
    }
}
