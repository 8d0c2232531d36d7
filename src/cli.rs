use crate::config::{BrleConfig, ChecksumType, StreamFormat};
use crate::container;
use crate::display::format_buffer;
use crate::error::BrleError;
use crate::inspect::{self, StreamSummary};
use crate::pipeline;
use crate::rle;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::PathBuf;
use std::time::Instant;

/// Mixed literals and runs, including a run of zeros.
const DEMO_BUFFER: [u8; 24] = [
    0x03, 0x74, 0x04, 0x04, 0x04, 0x35, 0x35, 0x64,
    0x64, 0x64, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x56, 0x45, 0x56, 0x56, 0x56, 0x09, 0x09, 0x09,
];

#[derive(Parser)]
#[command(author, version, about, long_about = "Byte run-length encoding (BRLE) codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses a file
    Compress {
        /// Input file to compress
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Output format [raw, framed]
        #[arg(short, long, default_value = "framed")]
        format: StreamFormat,

        /// Checksum stored in framed output [crc32, sha256]
        #[arg(short, long, default_value = "crc32")]
        checksum: ChecksumType,
    },
    /// Decompresses a file
    Decompress {
        /// Input file to decompress
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Input format [raw, framed]
        #[arg(short, long, default_value = "framed")]
        format: StreamFormat,
    },
    /// Prints the record layout of a compressed file
    Inspect {
        /// Compressed file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Input format [raw, framed]
        #[arg(short, long, default_value = "framed")]
        format: StreamFormat,
    },
    /// Encodes and decodes a built-in buffer, printing each stage
    Demo,
}

pub fn run() -> Result<(), BrleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compress { input, output, format, checksum } => {
            println!("Compressing {} to {}...", input.display(), output.display());
            let config = BrleConfig::default()
                .with_format(*format)
                .with_checksum(*checksum);

            let mut in_file = BufReader::new(File::open(input)?);
            let mut out_file = BufWriter::new(File::create(output)?);

            let start = Instant::now();
            let stats = pipeline::compress(&mut in_file, &mut out_file, &config)?;
            let duration = start.elapsed();

            println!("Compression successful!");
            println!("  Original Size:    {} bytes", stats.original_size);
            println!("  Compressed Size:  {} bytes", stats.compressed_size);
            println!("  Ratio:            {:.2}x", stats.ratio);
            println!("  Elapsed Time:     {:.2?}", duration);
        }
        Commands::Decompress { input, output, format } => {
            println!("Decompressing {} to {}...", input.display(), output.display());

            let mut in_file = BufReader::new(File::open(input)?);
            let mut out_file = BufWriter::new(File::create(output)?);

            let start = Instant::now();
            let stats = pipeline::decompress(&mut in_file, &mut out_file, *format)?;
            let duration = start.elapsed();

            println!("Decompression successful!");
            println!("  Restored Size: {} bytes", stats.decompressed_size);
            println!("  Elapsed Time:  {:.2?}", duration);
        }
        Commands::Inspect { input, format } => {
            let mut in_file = BufReader::new(File::open(input)?);
            let stream = match format {
                StreamFormat::Raw => {
                    let mut stream = Vec::new();
                    in_file.read_to_end(&mut stream)?;
                    stream
                }
                StreamFormat::Framed => {
                    let (header, payload) = container::read_frame(&mut in_file)?;
                    println!("Frame:");
                    println!("  Checksum:      {:?} ({:#018x})", header.checksum_type, header.checksum);
                    println!("  Original Size: {} bytes", header.original_len);
                    payload
                }
            };
            print_summary(&inspect::summarize(&stream)?);
        }
        Commands::Demo => {
            let encoded = rle::encode(&DEMO_BUFFER);
            let decoded = rle::decode(&encoded)?;

            println!("Original:   {}", format_buffer(&DEMO_BUFFER));
            println!("Encoded:    {}", format_buffer(&encoded));
            println!("Decoded:    {}", format_buffer(&decoded));
            println!("Round trip: {}", if decoded == DEMO_BUFFER { "ok" } else { "MISMATCH" });
        }
    }

    Ok(())
}

fn print_summary(summary: &StreamSummary) {
    println!("Stream:");
    println!("  Encoded Size:  {} bytes", summary.encoded_size);
    println!("  Decoded Size:  {} bytes", summary.decoded_size);
    println!("  Literals:      {}", summary.literals);
    println!("  Runs:          {} ({} escaped)", summary.runs, summary.escaped_runs);
    println!("  Longest Run:   {}", summary.longest_run);
    println!("  Ratio:         {:.2}x", summary.compression_ratio());
}
