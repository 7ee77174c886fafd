use common::App;
use itertools::Itertools;

#[derive(Debug, Default)]
pub struct WcApp;

impl App for WcApp {
    fn map(&self, line: &str) -> Vec<(String, u64)> {
        line.to_lowercase()
            .split_whitespace()
            .map(|w| (w.to_owned(), 1))
            .collect_vec()
    }

    fn reduce(&self, _word: &str, counts: &[u64]) -> u64 {
        counts.iter().sum()
    }
}
