use std::io::Write;

use crate::accesslog::encoding::decode_urls;
use crate::cli::wprintln;
use crate::util::lines::read_lines;
use crate::WeblogError;

pub struct DecodeOptions {
    pub file: String,
    pub json: bool,
}

pub fn execute(opts: &DecodeOptions, writer: &mut dyn Write) -> Result<(), WeblogError> {
    let urls = read_lines(&opts.file)?;
    let decoded = decode_urls(&urls);

    if opts.json {
        let json = serde_json::to_string(&decoded)
            .map_err(|e| WeblogError::Io(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    for url in &decoded {
        wprintln!(writer, "{}", url)?;
    }

    Ok(())
}
