//! supplyreport CLI - supply chain PDF report tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use supplyreport::render::{to_json, to_text};
use supplyreport::{inspect_file, JsonFormat, PageSize, ReportOptions, SupplyChainData, SupplyChainReport};

const DEFAULT_OUTPUT: &str = "SupplyChainReport.pdf";

#[derive(Parser)]
#[command(name = "supplyreport")]
#[command(version)]
#[command(about = "Generate and inspect supply chain PDF reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report to PDF
    #[command(alias = "gen")]
    Generate {
        /// Report data as JSON (built-in sample if not specified)
        #[arg(short, long, value_name = "FILE", env = "SUPPLYREPORT_DATA")]
        data: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Page size (a4, letter)
        #[arg(long, value_parser = PageSize::parse, default_value = "a4")]
        page_size: PageSize,

        /// Header title
        #[arg(long)]
        title: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,

        /// Also print the page layout to stdout
        #[arg(long, value_enum)]
        layout: Option<LayoutFormat>,
    },

    /// Show pages and text of a PDF report
    Inspect {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print every text run
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the built-in sample data as JSON
    SampleData {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutFormat {
    /// Positioned cells as JSON
    Json,
    /// Plain text per page
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            data,
            output,
            page_size,
            title,
            no_compress,
            layout,
        }) => {
            let mut options = ReportOptions::new()
                .with_page_size(page_size)
                .with_compression(!no_compress);
            if let Some(title) = title {
                options = options.with_title(title);
            }
            cmd_generate(data.as_deref(), &output, options, layout)
        }
        Some(Commands::Inspect { input, verbose }) => cmd_inspect(&input, verbose),
        Some(Commands::SampleData { output }) => cmd_sample_data(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: supplyreport <COMMAND>".yellow());
            println!("       supplyreport --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_data(path: Option<&Path>) -> Result<SupplyChainData, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let data = serde_json::from_str(&json)
                .map_err(|e| format!("Invalid report data in {}: {}", path.display(), e))?;
            Ok(data)
        }
        None => Ok(SupplyChainData::sample()),
    }
}

fn cmd_generate(
    data: Option<&Path>,
    output: &Path,
    options: ReportOptions,
    layout: Option<LayoutFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_data(data)?;
    let report = SupplyChainReport::new(options);

    let mut builder = report.build(&data)?;
    let pdf = builder.output()?;
    fs::write(output, &pdf)?;
    log::info!("Wrote {} bytes to {}", pdf.len(), output.display());

    match layout {
        Some(LayoutFormat::Json) => println!("{}", to_json(builder.document(), JsonFormat::Pretty)?),
        Some(LayoutFormat::Text) => println!("{}", to_text(builder.document())),
        None => {}
    }

    println!(
        "{} {} ({} pages)",
        "Report generated:".green(),
        output.display(),
        builder.page_count()
    );
    Ok(())
}

fn cmd_inspect(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = inspect_file(input)?;

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), doc.version);
    println!("{}: {}", "Pages".bold(), doc.page_count());

    for page in &doc.pages {
        println!();
        println!(
            "{} {}: {} text runs, {} bordered cells",
            "Page".bold(),
            page.number,
            page.texts.len(),
            page.bordered_cells
        );
        if verbose {
            for run in &page.texts {
                println!("  {} {}", "│".dimmed(), run.text);
            }
        }
    }

    Ok(())
}

fn cmd_sample_data(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&SupplyChainData::sample())?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "supplyreport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Supply chain PDF report tool");
    println!();
    println!("PDF version: {}", supplyreport::PDF_VERSION);
    println!("License: MIT");
}
