use std::time::SystemTime;

use anyhow::{anyhow, Result};
use indoc::indoc;
use itertools::Itertools;
use promsnap::series::SeriesBuffer;

// One payload per poll, the way the dashboard sees them arrive.
const POLLS: &[&'static str] = &[
    indoc! {r#"
        # HELP queue_depth Jobs waiting for a worker
        # TYPE queue_depth gauge
        queue_depth 4
    "#},
    indoc! {r#"
        queue_depth 9
    "#},
    indoc! {r#"
        queue_depth 7
    "#},
    indoc! {r#"
        queue_depth 2
    "#},
    indoc! {r#"
        queue_depth 1
    "#},
];

fn main() -> Result<()> {
    let mut args = std::env::args();

    let progname = args.next().ok_or(anyhow!("ARGV[0] was not set??"))?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" => {
                println!("Usage: {}", progname);
                return Ok(());
            }
            arg => return Err(anyhow!("Unknown argument: {}", arg)),
        }
    }

    let mut window = SeriesBuffer::new("Queue depth", 4);

    for (poll, scrape) in POLLS.iter().enumerate() {
        let snapshot = promsnap::parse(scrape);
        let value = window
            .record(SystemTime::now(), &snapshot, "queue_depth")
            .ok_or(anyhow!("scrape had no queue_depth family"))?;

        println!(
            "poll {}: read {:>4}, window [{}]",
            poll,
            value,
            window.points().map(|point| point.value).join(", ")
        );
    }

    println!(
        "\n«{}» holds {} of {} observed points",
        window.display_name(),
        window.len(),
        POLLS.len()
    );

    Ok(())
}
