use anyhow::Context;
use pair_count::Tally;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `PAIR_COUNT_LOG=pair_count=debug`
const LOG_ENV: &str = "PAIR_COUNT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("pair_count=warn,pair_count_cli=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn parse_values<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Vec<i64>> {
    args.into_iter()
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("invalid integer {arg:?}"))
        })
        .collect()
}

fn run(values: Vec<i64>) -> anyhow::Result<usize> {
    info!(len = values.len(), "counting values");
    let tally: Tally<i64> = values.into_iter().collect();

    if !tally.is_empty() && !tally.is_well_formed() {
        warn!("a value occurs more than twice, or the maximum occurs more than once");
    }

    Ok(tally.complete()?)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let values = parse_values(std::env::args().skip(1))?;
    let result = run(values).context("failed to count values")?;
    println!("{result}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values(args(&["3", "-1", "3"])).unwrap(), vec![3, -1, 3]);
        assert!(parse_values(args(&["3", "x"])).is_err());
    }

    #[test]
    fn test_run() {
        assert_eq!(run(vec![1, 2, 2, 3, 3, 5, 5, 5]).unwrap(), 6);

        let err = run(vec![]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<pair_count::Error>(),
            Some(&pair_count::Error::EmptyInput)
        );
    }
}
