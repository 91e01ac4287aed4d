//! Longest common prefix / suffix over a list of strings
//!
//! Both finders seed a candidate with the first string and shorten it one
//! character at a time until every other string agrees with it. Inputs are
//! short benchmark command lines, so the quadratic worst case is fine.

/// Longest string that every item starts with.
///
/// Returns `""` for an empty list and the item itself for a single-item list.
/// The result always borrows from the first item.
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> &str {
    let Some((first, rest)) = items.split_first() else {
        return "";
    };

    let mut candidate = first.as_ref();
    for item in rest {
        let item = item.as_ref();
        while !item.starts_with(candidate) {
            candidate = drop_last_char(candidate);
        }
        if candidate.is_empty() {
            break;
        }
    }

    candidate
}

/// Longest string that every item ends with.
///
/// Mirror image of [`longest_common_prefix`]: the candidate loses characters
/// from the front.
pub fn longest_common_suffix<S: AsRef<str>>(items: &[S]) -> &str {
    let Some((first, rest)) = items.split_first() else {
        return "";
    };

    let mut candidate = first.as_ref();
    for item in rest {
        let item = item.as_ref();
        while !item.ends_with(candidate) {
            candidate = drop_first_char(candidate);
        }
        if candidate.is_empty() {
            break;
        }
    }

    candidate
}

fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn drop_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(longest_common_prefix(&empty), "");
        assert_eq!(longest_common_suffix(&empty), "");
    }

    #[test]
    fn test_single_item() {
        assert_eq!(longest_common_prefix(&["abc"]), "abc");
        assert_eq!(longest_common_suffix(&["abc"]), "abc");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(longest_common_prefix(&["flower", "flow", "flight"]), "fl");
        assert_eq!(longest_common_prefix(&["dog", "racecar", "car"]), "");
    }

    #[test]
    fn test_suffix() {
        assert_eq!(
            longest_common_suffix(&["testing", "resting", "nesting"]),
            "esting"
        );
        assert_eq!(longest_common_suffix(&["abc", "xyz"]), "");
    }

    #[test]
    fn test_variant_prefix_length() {
        let prefix = longest_common_prefix(&["bench_run_variant_a", "bench_run_variant_b"]);
        assert_eq!(prefix, "bench_run_variant_");
        assert_eq!(prefix.len(), 18);
    }

    #[test]
    fn test_owned_strings() {
        let items = vec!["cargo run --release".to_string(), "cargo run".to_string()];
        assert_eq!(longest_common_prefix(&items), "cargo run");
        assert_eq!(longest_common_suffix(&items), "");
    }

    #[test]
    fn test_empty_string_in_list() {
        assert_eq!(longest_common_prefix(&["abc", ""]), "");
        assert_eq!(longest_common_suffix(&["", "abc"]), "");
    }

    #[test]
    fn test_multibyte_characters() {
        // 'é' is two bytes; shortening must stay on char boundaries
        assert_eq!(longest_common_prefix(&["café", "cafà"]), "caf");
        assert_eq!(longest_common_suffix(&["über", "ober"]), "ber");
        assert_eq!(longest_common_prefix(&["µs_a", "µs_b"]), "µs_");
    }

    #[test]
    fn test_prefix_bounded_by_every_item() {
        let items = [
            "hyperfine --warmup 3 ./a",
            "hyperfine --warmup 3 ./ab",
            "hyperfine --warmup",
        ];
        let prefix = longest_common_prefix(&items);
        let min_len = items.iter().map(|s| s.len()).min().unwrap();

        assert!(prefix.len() <= min_len);
        assert!(items.iter().all(|s| s.starts_with(prefix)));
        assert_eq!(prefix, "hyperfine --warmup");
    }

    #[test]
    fn test_suffix_of_every_item() {
        let items = ["run --threads 4", "bench --threads 4", "--threads 4"];
        let suffix = longest_common_suffix(&items);

        assert!(items.iter().all(|s| s.ends_with(suffix)));
        assert_eq!(suffix, "--threads 4");
    }
}
