use app_wc::WcApp;
use common::{aggregate, emit, init_logger, Result};
use log::debug;
use std::io::{self, BufWriter};
use structopt::StructOpt;

/// Counts lowercase words read from standard input and prints
/// "<word> <count>" lines, most frequent first.
#[derive(StructOpt, Debug)]
#[structopt(name = "wordfreq")]
struct Opt {}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logger();
    debug!("{:?}", opt);

    let app = WcApp::default();
    let stdin = io::stdin();
    let table = aggregate(&app, stdin.lock())?;
    debug!("{} words, {} total", table.len(), table.total());

    let stdout = io::stdout();
    emit(table.into_sorted(), BufWriter::new(stdout.lock()))?;

    Ok(())
}
