use std::fs::File;
use std::io::stdin;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use log::{error, info, LevelFilter};

use upper_triangular::TriangularMatrix;
use upper_triangular::io::read_from;

/// Demonstrates upper triangular matrices: filling, printing and adding them.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Number of rows and columns of the matrices
    #[arg(short, long, default_value_t = 5)]
    size: isize,
    /// File to read a matrix from instead of generating two, use "-" for standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::default()
        .filter_level(level)
        .parse_env(env_logger::Env::default().filter_or("TRIANGULAR_LOG", level.as_str()))
        .init();

    let result = match &opts.input {
        Some(path) => print_input(opts.size, path),
        None => print_sample(opts.size),
    };
    if let Err(message) = result {
        error!("{}", message);
        exit(1);
    }
}

/// Fill `a[i][j] = 10 i + j` and `b[i][j] = 100 (10 i + j)`, print both and their sum.
fn print_sample(size: isize) -> Result<(), String> {
    let mut a = TriangularMatrix::<i64>::new(size).map_err(|e| e.to_string())?;
    let mut b = TriangularMatrix::<i64>::new(size).map_err(|e| e.to_string())?;
    for i in 0..a.size() {
        for j in i..a.size() {
            let value = (i * 10 + j) as i64;
            a[(i, j)] = value;
            b[(i, j)] = value * 100;
        }
    }
    let sum = a.try_add(&b).map_err(|e| e.to_string())?;

    println!("Matrix a =\n{}", a);
    println!("Matrix b =\n{}", b);
    println!("Matrix c = a + b\n{}", sum);

    Ok(())
}

/// Read a matrix of size `size` and print it together with `m + m`.
fn print_input(size: isize, path: &Path) -> Result<(), String> {
    let mut matrix = TriangularMatrix::<f64>::new(size).map_err(|e| e.to_string())?;

    let read = if path.as_os_str() == "-" {
        info!("Reading matrix of size {} from standard input", size);
        read_from(&mut matrix, stdin().lock())
    } else {
        info!("Reading matrix of size {} from \"{}\"", size, path.to_string_lossy());
        let file = File::open(path).map_err(|e| format!("{}: {}", path.to_string_lossy(), e))?;
        read_from(&mut matrix, file)
    };
    read.map_err(|e| e.to_string())?;

    let doubled = matrix.try_add(&matrix).map_err(|e| e.to_string())?;
    println!("Matrix m =\n{}", matrix);
    println!("Matrix m + m =\n{}", doubled);

    Ok(())
}
