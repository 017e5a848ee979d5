use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh run seed from wall clock, pid, and a process-local counter.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// `--seed N` / `--seed=N` override; anything else falls back to
/// `generated_seed`.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<u64, String> {
    let mut selected_seed = None;
    let mut index = 1_usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
        }
        index += 1;
    }

    Ok(selected_seed.unwrap_or(generated_seed))
}

fn parse_seed_value(value: &str) -> Result<u64, String> {
    value.parse::<u64>().map_err(|_| format!("invalid seed value: {value}"))
}

fn mix_seed(value: u64) -> u64 {
    let mut mixed = value ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| (*part).to_string()).collect()
    }

    #[test]
    fn falls_back_to_generated_seed_without_args() {
        let resolved = resolve_seed_from_args(&args(&["wander-app"]), 42).unwrap();
        assert_eq!(resolved, 42);
    }

    #[test]
    fn accepts_both_seed_argument_forms() {
        let split = resolve_seed_from_args(&args(&["wander-app", "--seed", "7"]), 42).unwrap();
        assert_eq!(split, 7);
        let joined = resolve_seed_from_args(&args(&["wander-app", "--seed=9"]), 42).unwrap();
        assert_eq!(joined, 9);
    }

    #[test]
    fn rejects_duplicate_or_malformed_seeds() {
        assert!(resolve_seed_from_args(&args(&["app", "--seed", "1", "--seed=2"]), 0).is_err());
        assert!(resolve_seed_from_args(&args(&["app", "--seed", "banana"]), 0).is_err());
        assert!(resolve_seed_from_args(&args(&["app", "--seed"]), 0).is_err());
    }

    #[test]
    fn generated_seeds_vary_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
