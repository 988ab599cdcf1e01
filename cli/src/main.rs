//! unlecture CLI - lecture PDF and transcript processing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use unlecture::llm::OpenRouterClient;
use unlecture::model::SYNTHETIC_FONT_SIZE;
use unlecture::source::{HybridSource, TsvOcrEngine};
use unlecture::summarize::{self, LlmSummarizer, Summarizer};
use unlecture::transcript::{self, TranscriptNormalizer};
use unlecture::{
    classify_subject, render, CleanOptions, JsonFormat, JsonWordSource, LayoutOptions,
    NoteGenerator, TextStats, TranscriptCleaner, TruncatingSummarizer,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "unlecture")]
#[command(version)]
#[command(about = "Reconstruct lecture PDFs and clean lecture transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild sections from a JSON word dump and summarize them
    Sections {
        /// JSON word dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Summarize with the language model instead of truncating
        #[arg(long)]
        llm: bool,

        /// Emit sections as JSON instead of Markdown summaries
        #[arg(long)]
        json: bool,

        /// OCR output for a scanned page, as PAGE=FILE (Tesseract TSV)
        #[arg(long, value_name = "PAGE=FILE")]
        ocr_tsv: Vec<String>,

        /// Line-bucketing tolerance
        #[arg(long, default_value = "3.0")]
        y_threshold: f32,

        /// Paragraph-break vertical gap
        #[arg(long, default_value = "10.0")]
        gap_threshold: f32,

        /// Heading font-size margin over body text
        #[arg(long, default_value = "1.0")]
        heading_delta: f32,
    },

    /// Clean a transcript file
    Clean {
        /// Transcript text file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// How the transcript is split into chunks
        #[arg(long, value_enum, default_value = "blank-line")]
        chunk_separator: ChunkSeparator,

        /// Normalize surviving chunks with the language model
        #[arg(long)]
        normalize: bool,

        /// Minimum unique-token ratio for a chunk to be kept
        #[arg(long, default_value = "0.4")]
        entropy_threshold: f64,
    },

    /// Print the subject label of a transcript
    Classify {
        /// Transcript text file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Generate study notes from PDF text and a lecture transcript
    Notes {
        /// Extracted PDF text
        #[arg(value_name = "PDF_TEXT")]
        pdf_text: PathBuf,

        /// Cleaned lecture transcript
        #[arg(value_name = "TRANSCRIPT")]
        transcript: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Model identifier
        #[arg(long, env = "OPENROUTER_MODEL")]
        model: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ChunkSeparator {
    /// Chunks are separated by blank lines
    BlankLine,
    /// The whole file is one chunk
    None,
}

fn main() {
    env_logger::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sections {
            input,
            output,
            llm,
            json,
            ocr_tsv,
            y_threshold,
            gap_threshold,
            heading_delta,
        } => {
            let options = LayoutOptions::new()
                .with_y_line_threshold(y_threshold)
                .with_para_gap_threshold(gap_threshold)
                .with_heading_size_delta(heading_delta);
            cmd_sections(&input, output.as_deref(), llm, json, &ocr_tsv, options)
        }
        Commands::Clean {
            input,
            output,
            chunk_separator,
            normalize,
            entropy_threshold,
        } => cmd_clean(
            &input,
            output.as_deref(),
            chunk_separator,
            normalize,
            entropy_threshold,
        ),
        Commands::Classify { input } => cmd_classify(&input),
        Commands::Notes {
            pdf_text,
            transcript,
            output,
            model,
        } => cmd_notes(&pdf_text, &transcript, output.as_deref(), model),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Input file not found: {}", path.display()).into());
    }
    Ok(fs::read_to_string(path)?)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn openrouter(model: Option<String>) -> Result<OpenRouterClient, Box<dyn std::error::Error>> {
    let mut config = unlecture::llm::OpenRouterConfig::from_env();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    Ok(OpenRouterClient::new(config)?)
}

fn parse_ocr_arg(arg: &str) -> Result<(u32, PathBuf), Box<dyn std::error::Error>> {
    let (page, file) = arg
        .split_once('=')
        .ok_or_else(|| format!("Invalid --ocr-tsv value '{}', expected PAGE=FILE", arg))?;
    let page = page
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid page number in --ocr-tsv: {}", page))?;
    Ok((page, PathBuf::from(file.trim())))
}

fn cmd_sections(
    input: &Path,
    output: Option<&Path>,
    llm: bool,
    json: bool,
    ocr_tsv: &[String],
    options: LayoutOptions,
) -> CliResult {
    let dump = read_input(input)?;
    let native = JsonWordSource::from_json(&dump)?;

    let mut ocr = TsvOcrEngine::new(SYNTHETIC_FONT_SIZE);
    for arg in ocr_tsv {
        let (page, file) = parse_ocr_arg(arg)?;
        debug!("Loading OCR TSV for page {} from {}", page, file.display());
        ocr.add_page(page, read_input(&file)?);
    }

    let mut source = HybridSource::new(
        native,
        ocr,
        options.scanned_page_min_chars,
        options.ocr_dpi,
    );
    let sections = unlecture::reconstruct_source(&mut source, options)?;

    if json {
        let rendered = render::to_json(&sections, JsonFormat::Pretty)?;
        return write_output(output, &rendered);
    }

    let summarizer: Box<dyn Summarizer> = if llm {
        Box::new(LlmSummarizer::new(openrouter(None)?))
    } else {
        Box::new(TruncatingSummarizer::default())
    };
    let summaries = summarize::summarize_sections(&sections, summarizer.as_ref())?;

    write_output(output, &render::to_markdown(&summaries))
}

fn cmd_clean(
    input: &Path,
    output: Option<&Path>,
    separator: ChunkSeparator,
    normalize: bool,
    entropy_threshold: f64,
) -> CliResult {
    let text = read_input(input)?;
    let chunks = match separator {
        ChunkSeparator::BlankLine => transcript::split_chunks(&text),
        ChunkSeparator::None => vec![text],
    };

    let options = CleanOptions::new().with_entropy_threshold(entropy_threshold);
    let cleaner = TranscriptCleaner::new(options)?;

    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut kept: Vec<(u32, String)> = Vec::new();
    if normalize {
        pb.set_message("Normalizing chunks...");
        let normalizer = TranscriptNormalizer::new(cleaner, openrouter(None)?);
        for (i, chunk) in chunks.iter().enumerate() {
            if let Some(normalized) = normalizer.normalize(chunk)? {
                kept.push((i as u32 + 1, normalized.text));
            }
            pb.inc(1);
        }
    } else {
        pb.set_message("Cleaning chunks...");
        for (i, outcome) in cleaner.clean_chunks(&chunks).into_iter().enumerate() {
            if let Some(text) = outcome.into_text() {
                kept.push((i as u32 + 1, text));
            }
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    let merged = unlecture::merge_chunks(&kept);
    let stats = TextStats::of(&merged);
    eprintln!(
        "{} {}/{} chunks kept ({} words, ~{} tokens)",
        "Cleaned:".green().bold(),
        kept.len(),
        chunks.len(),
        stats.words,
        stats.tokens
    );

    write_output(output, &merged)
}

fn cmd_classify(input: &Path) -> CliResult {
    let text = read_input(input)?;
    println!("{}", classify_subject(&text));
    Ok(())
}

fn cmd_notes(
    pdf_text: &Path,
    transcript: &Path,
    output: Option<&Path>,
    model: Option<String>,
) -> CliResult {
    let pdf = read_input(pdf_text)?;
    let lecture = read_input(transcript)?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Generating notes...");
    let notes = NoteGenerator::new(openrouter(model)?).generate(&pdf, &lecture);
    pb.finish_and_clear();

    write_output(output, &notes?)
}

fn cmd_version() {
    println!("{} {}", "unlecture".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Lecture PDF reconstruction and transcript cleaning");
}
