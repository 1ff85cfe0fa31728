use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;

#[derive(Debug, Parser)]
struct Args {
    /// Scrape text to parse
    #[clap(short, long, required = true)]
    input: String,

    /// Only print families whose name matches this pattern
    #[clap(short, long)]
    filter: Option<String>,

    /// Emit the parsed families as pretty JSON
    #[clap(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scrape = std::fs::read_to_string(&args.input)?;
    let filter = args.filter.as_deref().map(regex::Regex::new).transpose()?;

    let families = promsnap::parse(&scrape);

    // BTreeMap for deterministic output order
    let selected: BTreeMap<_, _> = families
        .iter()
        .filter(|(name, _)| filter.as_ref().map_or(true, |re| re.is_match(name)))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for (name, family) in selected.iter() {
        println!("{}", name);
        if let Some(help) = family.description.help {
            println!("  help: {}", help);
        }
        if let Some(kind) = family.description.kind {
            println!("  type: {}", kind);
        }

        for sample in family.values.iter() {
            let tags = sample
                .tags
                .iter()
                .sorted()
                .map(|(key, value)| format!("{}=\"{}\"", key, value))
                .join(",");
            println!("  {{{}}} {}", tags, sample.value);
        }
        println!("");
    }

    Ok(())
}
