//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use readability_core::{Analyzer, Report, Selector};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Prompt shown when no score was chosen up front
pub const SCORE_PROMPT: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all): ";

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Score to calculate: ARI, FK, SMOG, CL or all (prompts when omitted)
    #[arg(short, long, value_name = "SELECTOR")]
    pub score: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Analyze raw file content instead of joining lines
    #[arg(long)]
    pub keep_newlines: bool,

    /// Print the analyzed text before its statistics
    #[arg(long)]
    pub show_text: bool,

    /// Analyze multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel analysis (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Statistics and one line per score
    Text,
    /// JSON array of reports
    Json,
    /// Markdown tables
    Markdown,
}

/// One analyzed input file
#[derive(Debug)]
struct AnalyzedDocument {
    source: String,
    text: String,
    report: Report,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting readability analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        config.validate()?;

        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let keep_newlines = self.keep_newlines || config.analysis.keep_newlines;
        let show_text = self.show_text || config.output.show_text;

        let files = resolve_patterns(&self.input)?;
        let selector = self.resolve_selector(&config)?;
        log::info!("Selected score: {}", selector);

        let analyzer = Analyzer::with_config(config.analyzer_config()?);
        let documents = self.analyze_files(&files, &analyzer, selector, keep_newlines)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer);
        for document in &documents {
            let text = show_text.then_some(document.text.as_str());
            formatter.format_report(&document.source, text, &document.report)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} file(s)", documents.len());
        Ok(())
    }

    /// Pick the selector from the flag, then the config file, then stdin
    fn resolve_selector(&self, config: &CliConfig) -> Result<Selector> {
        if let Some(code) = &self.score {
            return Ok(code.parse::<Selector>()?);
        }

        if let Some(selector) = config.default_selector()? {
            return Ok(selector);
        }

        prompt_selector(&mut io::stdin().lock(), &mut io::stderr())
    }

    fn analyze_files(
        &self,
        files: &[PathBuf],
        analyzer: &Analyzer,
        selector: Selector,
        keep_newlines: bool,
    ) -> Result<Vec<AnalyzedDocument>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let analyze_one = |path: &PathBuf| -> Result<AnalyzedDocument> {
            let document = analyze_file(path, analyzer, selector, keep_newlines)?;
            progress.file_completed(&document.source);
            Ok(document)
        };

        let parallel = (self.parallel || self.threads.is_some()) && files.len() > 1;
        let documents = if parallel {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::debug!("Analyzing {} files on {} threads", files.len(), threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(analyze_one).collect::<Result<Vec<_>>>())
        } else {
            files.iter().map(analyze_one).collect::<Result<Vec<_>>>()
        };

        progress.finish();
        documents
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn analyze_file(
    path: &Path,
    analyzer: &Analyzer,
    selector: Selector,
    keep_newlines: bool,
) -> Result<AnalyzedDocument> {
    let source = path.display().to_string();
    let text = FileReader::load(path, keep_newlines)?;
    log::debug!("Read {} bytes from {}", text.len(), source);

    let report = analyzer
        .analyze(&text, selector)
        .map_err(|e| CliError::AnalysisError(format!("{source}: {e}")))?;

    Ok(AnalyzedDocument {
        source,
        text,
        report,
    })
}

/// Ask for a selector on `prompt` and read one line from `input`
pub fn prompt_selector<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<Selector> {
    write!(prompt, "{SCORE_PROMPT}")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("No score selected: standard input is closed");
    }

    Ok(line.parse::<Selector>()?)
}
