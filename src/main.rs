//! Smoke test for [`BinaryTree`]: builds a small tree, removes some keys, clears it, refills it,
//! and dumps it in every traversal order after each step.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use binary_tree::{BinaryTree, TreeResult};

#[derive(Parser, Debug)]
#[command(author, version, about = "Exercise an unbalanced binary search tree", long_about = None)]
struct Cli {
    /// Turn debugging information on (repeat for more, e.g. -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with the dumps on stdout. `RUST_LOG` takes
/// precedence over the `-d` flags when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?level, "logging initialised");
}

fn run() -> TreeResult<()> {
    let mut tree: BinaryTree<i32, i32> =
        [(10, 10), (5, 10), (2, 10), (7, 10), (15, 10), (20, 10)].into();
    info!(len = tree.len(), "built tree");
    tree.print_tree()?;

    for key in [555, 5, 2, 7] {
        tree.remove(&key);
    }
    info!(len = tree.len(), "removed keys");
    tree.print_tree()?;

    tree.clear();
    tree.print_tree()?;

    tree.insert(1, 10);
    tree.insert(55, 10);
    tree.insert(-23, 10);
    tree.print_tree()?;

    println!("Min: {}", tree.min()?);
    println!("Max: {}", tree.max()?);

    Ok(())
}
