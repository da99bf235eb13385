extern crate hecm;

use clap::Parser;
use hecm::output::FileOutput;
use hecm::{run_assessment, AssessmentFlags};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct HecmArgs {
    input_file: String,
    #[arg(long, short, default_value_t = false)]
    recommendations: bool,
    #[clap(long, default_value_t = false)]
    breakdown: bool,
    #[clap(long, default_value_t = false)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = HecmArgs::parse();

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };

    let mut flags = AssessmentFlags::empty();
    flags.set(AssessmentFlags::RECOMMENDATIONS, args.recommendations);
    flags.set(AssessmentFlags::BREAKDOWN_CSV, args.breakdown);
    flags.set(AssessmentFlags::SUMMARY_JSON, args.summary);

    // Artifacts land next to the input file, named off its stem.
    let output = FileOutput::new(".".into(), format!("{input_file_stem}_{{}}.{{}}"));

    let results = run_assessment(
        BufReader::new(File::open(Path::new(input_file))?),
        &output,
        &flags,
    )?;

    println!(
        "Estimated annual energy cost for {} County, {}: ${:.2} (heating ${:.2}, cooling ${:.2})",
        results.location.county,
        results.location.state,
        results.result.costs.total_cost,
        results.result.costs.heating_cost,
        results.result.costs.cooling_cost,
    );

    Ok(())
}
