use anyhow::Result;
use seq_functools::driver::driver_main;

fn main() -> Result<()> {
    driver_main()
}
