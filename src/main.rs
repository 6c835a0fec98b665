//! Multiplies a fixed 5×4 matrix by a fixed 4×5 matrix and prints
//! `A * B = C` side by side.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use matprod::cli::{Args, write_error};
use matprod::{Matrix, multiply, print_matrix, print_matrix_product};

/// Rows of A.
const A_ROWS: usize = 5;
/// Columns of A, rows of B.
const INNER: usize = 4;
/// Columns of B.
const B_COLS: usize = 5;

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    debug!(n = args.n(), "positional argument is ignored");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            // printed even when RUST_LOG filters out the error event
            let _ = write_error(&mut std::io::stderr().lock(), &*e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let a = Matrix::sequential(A_ROWS, INNER);
    let b = Matrix::sequential(INNER, B_COLS);
    let c = multiply(&a, &b)?;

    if args.stacked {
        print_matrix(&a)?;
        print_matrix(&b)?;
        print_matrix(&c)?;
    }
    print_matrix_product(&a, &b, &c)?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the matrices. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
