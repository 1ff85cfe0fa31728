use anyhow::{anyhow, Result};
use indoc::indoc;
use itertools::Itertools;

const COLORS: &[&'static str] = &[
    "\u{2591}", "\u{2592}", "\u{2593}",
    "\u{25A3}", "\u{25A9}", "\u{25A4}"
];

fn main() -> Result<()> {
    let scrape = indoc! {r#"
        # HELP request_seconds Time spent handling requests
        # TYPE request_seconds histogram
        request_seconds_bucket{le="0.5"} 5
        request_seconds_bucket{le="1.0"} 7
        request_seconds_bucket{le="+Inf"} 15
        request_seconds_sum 2
        request_seconds_count 15
    "#};

    let mut args = std::env::args();

    let progname = args.next().ok_or(anyhow!("ARGV[0] was not set??"))?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" => {
                println!("Usage: {} [--print-scrape]", progname);
                return Ok(());
            }
            "--print-scrape" => {
                println!("Scrape:\n\n{}", scrape);
            }
            arg => return Err(anyhow!("Unknown argument: {}", arg)),
        }
    }

    let families = promsnap::parse(scrape);

    let histogram = families
        .get("request_seconds")
        .ok_or(anyhow!("folded family missing?"))?;

    if let Some(help) = histogram.description.help {
        println!("{}", help);
    }

    let sample_count = histogram
        .values
        .iter()
        .filter(|sample| sample.tags.get("part") == Some(&"count"))
        .next()
        .ok_or(anyhow!("no count part?"))?
        .value
        .round() as usize;

    let buckets = histogram
        .values
        .iter()
        .filter(|sample| sample.tags.get("part") == Some(&"bucket"))
        .collect_vec();

    let factor = match sample_count {
        sample_count if sample_count < 25 => 2,
        _ => 1,
    };

    print!("Distribution of «request_seconds»: ");
    buckets.iter().zip(COLORS).fold(0, |acc, (bucket, color)| {
        let cur_length = bucket.value.round() as usize;
        print!("{}", color.repeat((cur_length - acc) * factor));
        cur_length
    });
    print!("\t");

    println!(
        "[ {}]",
        buckets
            .iter()
            .zip(COLORS.iter().cycle())
            .map(|(bucket, color)| format!("{} ≤ {} ", color, bucket.tags["le"]))
            .join(" ")
    );

    Ok(())
}
