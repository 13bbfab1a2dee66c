use std::io::Write;

use colored::Colorize;
use rayon::prelude::*;

use crate::accesslog::batch::{split_squid_cancellable, CancelFlag, StatusColumns};
use crate::cli::{
    create_progress_bar, csv_escape, field_or_na, lines_to_entries, wprintln, BATCH_CHUNK,
    PROGRESS_THRESHOLD,
};
use crate::util::lines::read_lines;
use crate::WeblogError;

pub struct SquidOptions {
    pub file: String,
    pub json: bool,
    pub csv: bool,
    pub na: String,
    pub threads: usize,
    pub cancel: CancelFlag,
}

pub fn execute(opts: &SquidOptions, writer: &mut dyn Write) -> Result<(), WeblogError> {
    if opts.json && opts.csv {
        return Err(WeblogError::Argument(
            "--json and --csv are mutually exclusive".to_string(),
        ));
    }

    let entries = lines_to_entries(read_lines(&opts.file)?);
    let cols = split_entries(&entries, opts)?;

    if opts.json {
        let json = serde_json::to_string(&cols)
            .map_err(|e| WeblogError::Io(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    if opts.csv {
        wprintln!(writer, "squid_code,http_status")?;
        for i in 0..cols.squid_code.len() {
            wprintln!(
                writer,
                "{},{}",
                csv_escape(field_or_na(&cols.squid_code[i], &opts.na)),
                csv_escape(field_or_na(&cols.http_status[i], &opts.na)),
            )?;
        }
        return Ok(());
    }

    wprintln!(writer, "{}\t{}", "squid_code".bold(), "http_status".bold())?;
    for i in 0..cols.squid_code.len() {
        wprintln!(
            writer,
            "{}\t{}",
            field_or_na(&cols.squid_code[i], &opts.na),
            field_or_na(&cols.http_status[i], &opts.na),
        )?;
    }

    Ok(())
}

/// Run the batch split, sharding across the rayon pool for large inputs.
fn split_entries(
    entries: &[Option<String>],
    opts: &SquidOptions,
) -> Result<StatusColumns, WeblogError> {
    let pb = (entries.len() >= PROGRESS_THRESHOLD)
        .then(|| create_progress_bar(entries.len() as u64, "rows"));

    let result = if entries.len() > BATCH_CHUNK && opts.threads != 1 {
        let chunks: Result<Vec<StatusColumns>, WeblogError> = entries
            .par_chunks(BATCH_CHUNK)
            .map(|chunk| {
                let cols = split_squid_cancellable(chunk, &opts.cancel)?;
                if let Some(pb) = &pb {
                    pb.inc(chunk.len() as u64);
                }
                Ok(cols)
            })
            .collect();
        chunks.map(merge_columns)
    } else {
        let mut merged = StatusColumns::default();
        for chunk in entries.chunks(BATCH_CHUNK) {
            let cols = split_squid_cancellable(chunk, &opts.cancel)?;
            append_columns(&mut merged, cols);
            if let Some(pb) = &pb {
                pb.inc(chunk.len() as u64);
            }
        }
        Ok(merged)
    };

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }
    result
}

fn merge_columns(chunks: Vec<StatusColumns>) -> StatusColumns {
    let mut merged = StatusColumns::default();
    for chunk in chunks {
        append_columns(&mut merged, chunk);
    }
    merged
}

fn append_columns(into: &mut StatusColumns, mut from: StatusColumns) {
    into.squid_code.append(&mut from.squid_code);
    into.http_status.append(&mut from.http_status);
}
