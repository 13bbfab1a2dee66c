use std::io::Write;

use colored::Colorize;
use rayon::prelude::*;

use crate::accesslog::batch::{split_clf_cancellable, CancelFlag, RequestColumns};
use crate::cli::{
    create_progress_bar, csv_escape, field_or_na, lines_to_entries, wprintln, BATCH_CHUNK,
    PROGRESS_THRESHOLD,
};
use crate::util::lines::read_lines;
use crate::WeblogError;

pub struct ClfOptions {
    pub file: String,
    pub json: bool,
    pub csv: bool,
    pub na: String,
    pub threads: usize,
    pub cancel: CancelFlag,
}

pub fn execute(opts: &ClfOptions, writer: &mut dyn Write) -> Result<(), WeblogError> {
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
        wprintln!(writer, "method,asset,protocol")?;
        for i in 0..cols.method.len() {
            wprintln!(
                writer,
                "{},{},{}",
                csv_escape(field_or_na(&cols.method[i], &opts.na)),
                csv_escape(field_or_na(&cols.asset[i], &opts.na)),
                csv_escape(field_or_na(&cols.protocol[i], &opts.na)),
            )?;
        }
        return Ok(());
    }

    wprintln!(
        writer,
        "{}\t{}\t{}",
        "method".bold(),
        "asset".bold(),
        "protocol".bold()
    )?;
    for i in 0..cols.method.len() {
        wprintln!(
            writer,
            "{}\t{}\t{}",
            field_or_na(&cols.method[i], &opts.na),
            field_or_na(&cols.asset[i], &opts.na),
            field_or_na(&cols.protocol[i], &opts.na),
        )?;
    }

    Ok(())
}

/// Run the batch split, sharding across the rayon pool for large inputs.
///
/// Rows are independent, so chunks can be processed in any order as long as
/// the results are reassembled in input order. `--threads 1` forces the
/// sequential path.
fn split_entries(
    entries: &[Option<String>],
    opts: &ClfOptions,
) -> Result<RequestColumns, WeblogError> {
    let pb = (entries.len() >= PROGRESS_THRESHOLD)
        .then(|| create_progress_bar(entries.len() as u64, "rows"));

    let result = if entries.len() > BATCH_CHUNK && opts.threads != 1 {
        let chunks: Result<Vec<RequestColumns>, WeblogError> = entries
            .par_chunks(BATCH_CHUNK)
            .map(|chunk| {
                let cols = split_clf_cancellable(chunk, &opts.cancel)?;
                if let Some(pb) = &pb {
                    pb.inc(chunk.len() as u64);
                }
                Ok(cols)
            })
            .collect();
        chunks.map(merge_columns)
    } else {
        let mut merged = RequestColumns::default();
        for chunk in entries.chunks(BATCH_CHUNK) {
            let cols = split_clf_cancellable(chunk, &opts.cancel)?;
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

fn merge_columns(chunks: Vec<RequestColumns>) -> RequestColumns {
    let mut merged = RequestColumns::default();
    for chunk in chunks {
        append_columns(&mut merged, chunk);
    }
    merged
}

fn append_columns(into: &mut RequestColumns, mut from: RequestColumns) {
    into.method.append(&mut from.method);
    into.asset.append(&mut from.asset);
    into.protocol.append(&mut from.protocol);
}
