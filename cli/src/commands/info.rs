use colored::*;
use iprange_core::{Ipv6Format, RangeSession, RangeSpec};

use crate::terminal::print;

pub fn info(target: &RangeSpec, quiet: bool) -> anyhow::Result<()> {
    let session = RangeSession::resolve(target)?;
    let range = session.range();

    print::header("range", quiet);
    print::aligned_line("Family", range.family().to_string().normal());
    print::aligned_line("First", range.render(range.from(), Ipv6Format::Short).green());
    print::aligned_line("Last", range.render(range.to(), Ipv6Format::Short).green());
    print::aligned_line("Addresses", range.len().to_string().yellow().bold());
    Ok(())
}
