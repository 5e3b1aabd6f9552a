use crate::config::{Overrides, PipelineOptions, ServiceConfig};
use crate::prelude::{eprintln, println, *};
use crate::random::RandomIndexSource;
use colored::Colorize;
use labs_core::analyze::NO_VOWEL_SUBSTRING;
use labs_core::{
    build_record, prepare, render_report, Blacklist, ProcessError, ResultRecord, SortAlgorithm,
};

#[derive(Debug, clap::Args)]
pub struct ProcessOptions {
    /// Lowercase string to process
    #[clap(env = "LABS_INPUT")]
    pub input: String,

    /// Sort with tree sort instead of quicksort
    #[arg(long)]
    pub tree_sort: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the plain-text report
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,

    #[command(flatten)]
    pub pipeline: PipelineOptions,
}

/// Run the whole pipeline for one input.
///
/// The random draw happens between the pure halves of the pipeline: `prepare`
/// produces the transformed string, the source picks an index into it and
/// `build_record` computes the rest.
pub async fn process_data(
    input: &str,
    algorithm: SortAlgorithm,
    blacklist: &Blacklist,
    random: &RandomIndexSource,
) -> Result<ResultRecord, ProcessError> {
    let processed = prepare(input, blacklist)?;
    let index = random.index(processed.chars().count()).await;
    Ok(build_record(processed, algorithm, index))
}

/// Module entry point
pub async fn run(options: ProcessOptions, global: crate::Global) -> Result<()> {
    let config = ServiceConfig::load(
        options.pipeline.config.as_deref(),
        Overrides::from(&options.pipeline),
    )?;

    let random = RandomIndexSource::new(config.random_api_url.clone(), config.random_timeout)?;
    let blacklist = Blacklist::new(&config.blacklist);
    let algorithm = if options.tree_sort {
        SortAlgorithm::TreeSort
    } else {
        SortAlgorithm::QuickSort
    };

    if global.verbose {
        eprintln!(
            "Processing {:?} with {algorithm} (random source: {})",
            options.input,
            random.api_url().unwrap_or("local")
        );
    }

    let record = process_data(&options.input, algorithm, &blacklist, &random)
        .await
        .map_err(|e| eyre!(e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if options.plain {
        println!("{}", render_report(&record).trim_end());
    } else {
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &ResultRecord) {
    println!("\n{}\n", record.processed_string.bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["Sorted", record.sorted_string]);
    table.add_row(prettytable::row![
        "Longest vowel substring",
        record
            .max_vowel_substring
            .as_deref()
            .unwrap_or(NO_VOWEL_SUBSTRING)
    ]);
    match record.removed_char {
        Some(c) => table.add_row(prettytable::row![
            "Removed",
            format!("'{c}' at position {}", record.removed_char_index)
        ]),
        None => table.add_row(prettytable::row!["Removed", "nothing"]),
    };
    table.add_row(prettytable::row!["Trimmed", record.trimmed_string]);
    table.printstd();

    if !record.character_counts.is_empty() {
        println!("\n{}", "Character counts:".bold());
        let mut counts = new_table();
        for (c, count) in &record.character_counts {
            counts.add_row(prettytable::row![format!("'{c}'"), count]);
        }
        counts.printstd();
    }
}
