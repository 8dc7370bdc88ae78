use clap::Parser;
use std::path::{Path, PathBuf};

use crate::report::report_filename;

#[derive(Parser, Debug)]
#[command(name = "control-operativo-pdf")]
#[command(
    author,
    version,
    about = "Render a Control Operativo case record to the institutional PDF"
)]
pub struct Args {
    /// Case JSON file (case record with optional documentos_adjuntos)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to control_operativo_<id>.pdf next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Crest image candidate path (repeatable, first existing wins)
    #[arg(long)]
    pub crest: Vec<PathBuf>,

    /// Ghostscript binary used to append attachments
    #[arg(long)]
    pub gs: Option<String>,

    /// Directory for temporary merge files
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Do not append attachments
    #[arg(long)]
    pub no_merge: bool,

    /// Print the "PDF #<id>" badge on each page
    #[arg(long)]
    pub case_number: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the output path, defaulting to the download filename beside the input
    pub fn output_path(&self, case_id: u32) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let dir = self.input.parent().unwrap_or_else(|| Path::new("."));
            dir.join(report_filename(case_id))
        })
    }
}
