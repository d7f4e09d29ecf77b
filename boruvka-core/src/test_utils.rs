//! Shared test utilities for `boruvka-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding proptest case counts.
const PBT_CASES_ENV_KEY: &str = "BORUVKA_PBT_CASES";
/// Environment variable enabling forked proptest execution.
const PBT_FORK_ENV_KEY: &str = "BORUVKA_PBT_FORK";

/// Builds a proptest configuration, honouring the environment overrides.
///
/// Invalid overrides are logged and the defaults kept, so a typo in CI never
/// silently disables a suite.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = read_env_or_default(PBT_CASES_ENV_KEY, default_cases, parse_cases);
    let fork = read_env_or_default(PBT_FORK_ENV_KEY, false, parse_bool);
    ProptestConfig {
        cases,
        fork,
        ..ProptestConfig::default()
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(format!("expected a boolean, got `{other}`")),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(" 64 ", Ok(64))]
    #[case("0", Err(()))]
    #[case("many", Err(()))]
    fn parses_case_counts(#[case] raw: &str, #[case] expected: Result<u32, ()>) {
        assert_eq!(parse_cases(raw).map_err(|_| ()), expected);
    }

    #[rstest]
    #[case("TRUE", Ok(true))]
    #[case("no", Ok(false))]
    #[case("maybe", Err(()))]
    fn parses_fork_flags(#[case] raw: &str, #[case] expected: Result<bool, ()>) {
        assert_eq!(parse_bool(raw).map_err(|_| ()), expected);
    }
}
