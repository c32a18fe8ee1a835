//! # protoc-gen-twirp_js
//!
//! protoc plugin generating Twirp JavaScript RPC clients.
//!
//! ## Usage
//!
//! ```bash
//! # protoc finds the plugin on PATH by its executable name
//! protoc --twirp_js_out=./gen service.proto
//!
//! # print the plugin version and exit
//! protoc-gen-twirp_js --version
//! ```
//!
//! The plugin reads a `CodeGeneratorRequest` on stdin and writes a
//! `CodeGeneratorResponse` on stdout; diagnostics go to stderr so the
//! response stream stays clean.

use clap::Parser;
use colored::Colorize;
use prost::Message;
use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use std::io::{Read, Write};
use std::process::ExitCode;

use protoc_gen_twirp_js::{
    error::{CliError, CliResult},
    generator::ClientGenerator,
    VERSION,
};

#[derive(Parser)]
#[command(name = "protoc-gen-twirp_js")]
#[command(version = VERSION, about = "Generate Twirp JavaScript RPC clients from protobuf service definitions", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())?;

    // No generator parameters are defined; anything passed via
    // --twirp_js_opt is accepted and ignored.
    let output = ClientGenerator::new(&request).generate(&request);

    for target in &output.unmatched {
        eprintln!(
            "{} no input file matches generation target '{}'",
            "Warning:".yellow(),
            target
        );
    }

    let response = CodeGeneratorResponse {
        supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
        file: output
            .files
            .into_iter()
            .map(|file| code_generator_response::File {
                name: Some(file.name),
                content: Some(file.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let mut buf = Vec::with_capacity(response.encoded_len());
    response.encode(&mut buf)?;
    std::io::stdout().write_all(&buf)?;

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
