use std::io::Write;

use crate::accesslog::xff::normalise_ips;
use crate::cli::wprintln;
use crate::util::lines::read_lines;
use crate::WeblogError;

pub struct IpsOptions {
    pub file: String,
    pub xff_file: String,
    pub json: bool,
}

pub fn execute(opts: &IpsOptions, writer: &mut dyn Write) -> Result<(), WeblogError> {
    let ips = read_lines(&opts.file)?;
    let xffs = read_lines(&opts.xff_file)?;

    let normalised = normalise_ips(&ips, &xffs)?;

    if opts.json {
        let json = serde_json::to_string(&normalised)
            .map_err(|e| WeblogError::Io(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    for ip in &normalised {
        wprintln!(writer, "{}", ip)?;
    }

    Ok(())
}
