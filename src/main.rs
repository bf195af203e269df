//! pcm_tool - command-line dispatcher over the pcm_samples library.
//!
//! Parses a sample layout (`-r`/`-b`/`-c`), an operation keyword with its
//! file and numeric arguments, runs the operation, and writes the result
//! using the `<basename>_<rate>_<bits>_<mono|stereo>.raw` naming
//! convention. Exits 0 on success and 1 on bad arguments or any reported
//! operation error.

use clap::{Parser, Subcommand};
use colored::Colorize;
use pcm_samples::codec;
use pcm_samples::{
    AudioBuffer, AudioEditing, AudioProcessing, AudioStatistics, ChannelLevels, Frame, PcmError,
    PcmResult, PcmSample, SUPPORTED_BIT_DEPTHS, SUPPORTED_CHANNEL_COUNTS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pcm_tool",
    version,
    about = "Manipulate headerless raw PCM audio files"
)]
struct Cli {
    /// Sample rate of the input files in Hz
    #[arg(short = 'r', long = "rate")]
    sample_rate: u32,

    /// Bits per sample: 8 or 16
    #[arg(short = 'b', long = "bits")]
    bits: u8,

    /// Channel count: 1 (mono) or 2 (stereo)
    #[arg(short = 'c', long = "channels")]
    channels: u8,

    /// Basename for the output file
    #[arg(short = 'o', long = "out", default_value = "out")]
    out: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-channel RMS amplitude of a file
    Rms { file: PathBuf },
    /// Reverse a file
    Rev { file: PathBuf },
    /// Concatenate two files
    Cat { first: PathBuf, second: PathBuf },
    /// Mix two files with saturating addition
    Add { first: PathBuf, second: PathBuf },
    /// Scale a file so each channel reaches a target RMS (one value per channel)
    Norm {
        file: PathBuf,
        #[arg(required = true, allow_negative_numbers = true)]
        targets: Vec<f64>,
    },
    /// Remove the frames between two inclusive indices
    Cut {
        file: PathBuf,
        start: usize,
        end: usize,
    },
    /// Scale each channel by a factor (one value per channel)
    Gain {
        file: PathBuf,
        #[arg(required = true, allow_negative_numbers = true)]
        factors: Vec<f64>,
    },
    /// Mix a frame range of one file over a frame range of another
    Radd {
        first: PathBuf,
        second: PathBuf,
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Monomorphizes over the sample layout the caller described.
fn dispatch(cli: Cli) -> PcmResult<()> {
    match (cli.bits, cli.channels) {
        (8, 1) => run::<i8>(cli),
        (16, 1) => run::<i16>(cli),
        (8, 2) => run::<(i8, i8)>(cli),
        (16, 2) => run::<(i16, i16)>(cli),
        (bits, channels) => Err(PcmError::Format(format!(
            "unsupported layout: {bits}-bit, {channels} channel(s); \
             supported bit depths are {SUPPORTED_BIT_DEPTHS:?} and channel \
             counts {SUPPORTED_CHANNEL_COUNTS:?}"
        ))),
    }
}

fn run<F: Frame>(cli: Cli) -> PcmResult<()> {
    let rate = cli.sample_rate;
    debug!(rate, layout = F::LAYOUT, bits = F::Sample::BITS, "dispatching");

    match cli.command {
        Command::Rms { file } => {
            let buffer = codec::load::<F>(&file, rate)?;
            println!("{}", format_levels::<F>(buffer.rms()?));
            Ok(())
        }
        Command::Rev { file } => {
            let buffer = codec::load::<F>(&file, rate)?;
            write_result(&buffer.reverse(), &cli.out)
        }
        Command::Cat { first, second } => {
            let a = codec::load::<F>(&first, rate)?;
            let b = codec::load::<F>(&second, rate)?;
            write_result(&a.concat(&b)?, &cli.out)
        }
        Command::Add { first, second } => {
            let a = codec::load::<F>(&first, rate)?;
            let b = codec::load::<F>(&second, rate)?;
            write_result(&a.mix(&b)?, &cli.out)
        }
        Command::Norm { file, targets } => {
            let buffer = codec::load::<F>(&file, rate)?;
            let target = levels_from_args::<F>(&targets)?;
            write_result(&buffer.normalize(target)?, &cli.out)
        }
        Command::Cut { file, start, end } => {
            let buffer = codec::load::<F>(&file, rate)?;
            write_result(&buffer.cut(start, end)?, &cli.out)
        }
        Command::Gain { file, factors } => {
            let buffer = codec::load::<F>(&file, rate)?;
            let factors = levels_from_args::<F>(&factors)?;
            write_result(&buffer.gain(factors), &cli.out)
        }
        Command::Radd {
            first,
            second,
            first_start,
            first_end,
            second_start,
            second_end,
        } => {
            let a = codec::load::<F>(&first, rate)?;
            let b = codec::load::<F>(&second, rate)?;
            let mixed = a
                .trim(first_start, first_end)?
                .mix(&b.trim(second_start, second_end)?)?;
            write_result(&mixed, &cli.out)
        }
    }
}

fn write_result<F: Frame>(buffer: &AudioBuffer<F>, basename: &str) -> PcmResult<()> {
    let path = output_path(
        basename,
        buffer.sample_rate(),
        buffer.bits_per_sample(),
        F::LAYOUT,
    );
    codec::save(buffer, &path)?;
    println!("{}", path.display());
    Ok(())
}

/// `<basename>_<sample_rate>_<bits_per_sample>_<mono|stereo>.raw`
fn output_path(basename: &str, sample_rate: u32, bits: u8, layout: &str) -> PathBuf {
    PathBuf::from(format!("{basename}_{sample_rate}_{bits}_{layout}.raw"))
}

/// One value per channel, in channel order.
fn levels_from_args<F: Frame>(values: &[f64]) -> PcmResult<F::Levels> {
    if values.len() != F::CHANNELS {
        return Err(PcmError::Format(format!(
            "expected {} value(s) for a {} file, got {}",
            F::CHANNELS,
            F::LAYOUT,
            values.len()
        )));
    }
    Ok(F::Levels::from_channels(|ch| values[ch]))
}

fn format_levels<F: Frame>(levels: F::Levels) -> String {
    (0..F::CHANNELS)
        .map(|ch| format!("{:.3}", levels.channel(ch)))
        .collect::<Vec<_>>()
        .join(" ")
}
