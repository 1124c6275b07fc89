use std::io::{self, BufWriter, Stdout, Write};
use std::time::Instant;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use iprange_core::{AddressHandler, IterationConfig, Ipv6Format, Progress, RangeSession};
use tracing::info;

use crate::commands::WalkArgs;

pub async fn walk(args: WalkArgs) -> anyhow::Result<()> {
    let spec = args.target.unwrap_or_default();
    let config = IterationConfig {
        ipv6_format: if args.full { Ipv6Format::Full } else { Ipv6Format::Short },
    };

    let mut session = RangeSession::resolve(&spec)?.with_config(config);
    if let Some(start) = &args.start {
        session = session.start_with(start)?;
    }
    info!(
        "Walking {} ({} addresses)",
        session.range(),
        session.range().len()
    );

    let start_time = Instant::now();
    let mut printer = Printer::new(args.progress, args.bar);

    match args.limit {
        Some(limit) => {
            for entry in session.iter().take(limit) {
                printer.handle(entry.address, entry.progress).await?;
            }
        }
        None => session.run(&mut printer).await?,
    }

    let printed = printer.finish()?;
    info!(
        "Printed {printed} addresses in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Writes each address to stdout, optionally with its progress and a bar on stderr.
struct Printer {
    out: BufWriter<Stdout>,
    show_progress: bool,
    bar: Option<ProgressBar>,
    printed: u128,
}

impl Printer {
    fn new(show_progress: bool, with_bar: bool) -> Self {
        let bar = with_bar.then(|| {
            let bar = ProgressBar::new(100);
            if let Ok(style) = ProgressStyle::with_template("{bar:40.green/black} {pos:>3}% {msg}") {
                bar.set_style(style);
            }
            bar
        });

        Self {
            out: BufWriter::new(io::stdout()),
            show_progress,
            bar,
            printed: 0,
        }
    }

    fn finish(mut self) -> anyhow::Result<u128> {
        self.out.flush()?;
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        Ok(self.printed)
    }
}

#[async_trait]
impl AddressHandler for Printer {
    async fn handle(&mut self, address: String, progress: Progress) -> anyhow::Result<()> {
        if self.show_progress {
            writeln!(
                self.out,
                "{address}\t{}/{}\t{}%",
                progress.iteration, progress.all_ips, progress.completion_percentage
            )?;
        } else {
            writeln!(self.out, "{address}")?;
        }

        if let Some(bar) = &self.bar {
            bar.set_position(u64::from(progress.completion_percentage));
            bar.set_message(address);
        }
        self.printed += 1;
        Ok(())
    }
}
