//! Command implementation for Hikari CLI.

use std::time::Instant;

use log::{debug, info};

use crate::cli::args::HikariArgs;
use crate::cli::output::{IndexingResult, output_result, write_index};
use crate::error::Result;
use crate::index::Indexer;
use crate::source::{DelimitedTextSource, JpdbExportSource, WordSource};

/// Execute a CLI invocation: read words, build the index and save it.
pub fn execute_command(args: HikariArgs) -> Result<()> {
    debug!("{args:?}");

    // Validate the delimiter before touching the filesystem.
    let source = create_source(&args)?;
    let input_path = args.input_path();
    debug!(
        "input: {}, delimiter: {:?}, jpdb: {}, output: {}",
        input_path.display(),
        args.delimiter,
        args.jpdb,
        args.output_file.display()
    );

    let start_time = Instant::now();

    let mut words = source.read_file(&input_path)?;
    info!(
        "Read {} words from {} ({})",
        words.len(),
        input_path.display(),
        source.name()
    );
    debug!("first words: {:?}", words.iter().take(5).collect::<Vec<_>>());

    if args.sort {
        words.sort();
    }

    let index = Indexer::new().build(&words);
    write_index(&args.output_file, &index, args.pretty)?;
    info!("Saved index to {}", args.output_file.display());

    let duration = start_time.elapsed();

    output_result(
        "Index built successfully",
        &IndexingResult {
            input_path: input_path.to_string_lossy().to_string(),
            source: source.name().to_string(),
            output_path: args.output_file.to_string_lossy().to_string(),
            stats: *index.stats(),
            duration_ms: duration.as_millis() as u64,
        },
        &args,
    )?;

    Ok(())
}

/// Pick the word source for the given arguments.
fn create_source(args: &HikariArgs) -> Result<Box<dyn WordSource>> {
    if args.jpdb {
        Ok(Box::new(JpdbExportSource::new()))
    } else {
        Ok(Box::new(DelimitedTextSource::from_option(
            args.delimiter.as_deref(),
        )?))
    }
}
