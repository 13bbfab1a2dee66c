use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wlog")]
#[command(about = "Web server access log post-processing toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Number of worker threads for batch processing (0 = rayon default)
    #[arg(long, default_value = "0", global = true)]
    pub threads: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split CLF request lines into method, asset, and protocol columns
    Clf {
        /// Path to a file with one request line per line ("-" for stdin)
        #[arg(short, long)]
        file: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Output in CSV format
        #[arg(long)]
        csv: bool,

        /// Placeholder printed for missing fields in text/CSV output
        #[arg(long, default_value = "-")]
        na: String,
    },

    /// Split Squid code/status fields into squid_code and http_status columns
    Squid {
        /// Path to a file with one code/status field per line ("-" for stdin)
        #[arg(short, long)]
        file: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Output in CSV format
        #[arg(long)]
        csv: bool,

        /// Placeholder printed for missing fields in text/CSV output
        #[arg(long, default_value = "-")]
        na: String,
    },

    /// Percent-decode URLs line by line
    Decode {
        /// Path to a file with one URL per line ("-" for stdin)
        #[arg(short, long)]
        file: String,

        /// Output in JSON format (array of decoded strings)
        #[arg(long)]
        json: bool,
    },

    /// Percent-encode URLs line by line, preserving any scheme:// prefix
    Encode {
        /// Path to a file with one URL per line ("-" for stdin)
        #[arg(short, long)]
        file: String,

        /// Output in JSON format (array of encoded strings)
        #[arg(long)]
        json: bool,
    },

    /// Replace IPs with the origin extracted from paired X-Forwarded-For headers
    Ips {
        /// Path to a file with one IP address per line ("-" for stdin)
        #[arg(short, long)]
        file: String,

        /// Path to a file with one X-Forwarded-For value per line
        #[arg(short = 'x', long = "xff-file")]
        xff_file: String,

        /// Output in JSON format (array of IP strings)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
