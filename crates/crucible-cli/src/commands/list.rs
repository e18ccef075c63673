//! List command - print registered test names

use crate::suites;
use anyhow::Result;

/// Run the list command
pub fn run() -> Result<()> {
    let driver = suites::bootstrap();
    driver.print_tests();
    Ok(())
}
