use std::io::Write;

use crate::accesslog::encoding::encode_urls;
use crate::cli::wprintln;
use crate::util::lines::read_lines;
use crate::WeblogError;

pub struct EncodeOptions {
    pub file: String,
    pub json: bool,
}

pub fn execute(opts: &EncodeOptions, writer: &mut dyn Write) -> Result<(), WeblogError> {
    let urls = read_lines(&opts.file)?;
    let encoded = encode_urls(&urls);

    if opts.json {
        let json = serde_json::to_string(&encoded)
            .map_err(|e| WeblogError::Io(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    for url in &encoded {
        wprintln!(writer, "{}", url)?;
    }

    Ok(())
}
