//! Command-line interface definitions for quickscope.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Generate a list of IP addresses in a given range and save it to a file.
///
/// Both endpoints must belong to the same address family. Exceptions may be
/// given as literal addresses or as paths to files containing one address
/// per line.
#[derive(Parser, Debug)]
#[command(name = "quickscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate IP range lists with exception filtering", long_about = None)]
pub struct Args {
    /// The starting IP address of the range
    #[arg(short = 's', long = "start-ip", value_name = "ADDR")]
    pub start_ip: String,

    /// The ending IP address of the range
    #[arg(short = 'e', long = "end-ip", value_name = "ADDR")]
    pub end_ip: String,

    /// The output file where the IP list will be saved
    #[arg(short, long, default_value = "ip_list.txt", value_name = "PATH")]
    pub output: PathBuf,

    /// Addresses to exclude, or files containing addresses to exclude
    #[arg(short = 'x', long = "exceptions", value_name = "TOKEN", num_args = 0..)]
    pub exceptions: Vec<String>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
