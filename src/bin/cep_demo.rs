//! Demo entry point: compute the CEP of a CSV dataset.
//!
//! With no arguments, generates the built-in 5-shot sample dataset
//! in memory (through the crate's own CSV writer, so the loader path
//! is exercised end to end). With a path argument, loads that file.
//!
//! Policy: this leaf binary is deliberately **fail-soft**, unlike the
//! library it wraps. Any failure prints a diagnostic to stderr and the
//! documented sentinel `0.0000` to stdout, mirroring the behavior of
//! the original field tool. Callers that need to branch on cause
//! should use the library API, which is fail-fast and typed.

use std::io::Cursor;

use cepstat::{loader, CepMethod, Point3};

fn sample_points() -> Vec<Point3> {
    [
        (10.5, -5.2, 1.0),
        (12.1, -4.8, 0.9),
        (9.9, -6.1, 1.2),
        (11.8, -5.5, 0.8),
        (10.2, -5.8, 1.1),
    ]
    .into_iter()
    .map(|(x, y, z)| Point3::new(x, y, z).expect("sample data is finite"))
    .collect()
}

fn run() -> cepstat::Result<(f64, f64)> {
    let points = match std::env::args().nth(1) {
        Some(path) => loader::load_csv(path)?,
        None => {
            println!("Running CEP calculation on built-in sample data...");
            let mut buf = Vec::new();
            loader::write_points(&mut buf, &sample_points())?;
            loader::read_points(Cursor::new(buf))?
        }
    };
    let empirical = CepMethod::Empirical.estimate(&points)?;
    let parametric = CepMethod::Parametric.estimate(&points)?;
    Ok((empirical, parametric))
}

fn main() {
    match run() {
        Ok((empirical, parametric)) => {
            println!("Calculated CEP (empirical):  {empirical:.4} units");
            println!("Calculated CEP (parametric): {parametric:.4} units");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            println!("Calculated CEP: 0.0000 units");
        }
    }
}
