//! Set-membership filter over the lines of two files.

use std::collections::HashSet;
use std::path::Path;

use crate::error::RecopsError;

/// The trimmed lines of `input` that appear in `reference`'s trimmed line
/// set, preserving `input`'s order and duplicates.
pub fn shared_lines<'a>(reference: &str, input: &'a str) -> Vec<&'a str> {
    let set: HashSet<&str> = reference.lines().map(str::trim).collect();
    input
        .lines()
        .map(str::trim)
        .filter(|line| set.contains(line))
        .collect()
}

/// Print every line of `file_b` whose trimmed form appears in `file_a`.
pub fn run(file_a: &Path, file_b: &Path) -> Result<(), RecopsError> {
    let reference = std::fs::read_to_string(file_a)?;
    let input = std::fs::read_to_string(file_b)?;
    for line in shared_lines(&reference, &input) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn preserves_order_and_duplicates_of_second_file() {
        assert_eq!(shared_lines("x\ny\nz", "y\nq\ny"), vec!["y", "y"]);
    }

    #[test]
    fn lines_are_trimmed_before_comparison() {
        assert_eq!(shared_lines("  alpha  \nbeta", "alpha\n beta \ngamma"), vec![
            "alpha", "beta"
        ]);
    }

    #[test]
    fn no_matches_prints_nothing() {
        assert!(shared_lines("a\nb", "c\nd").is_empty());
    }

    #[test]
    fn run_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = dir.path().join("a.txt");
        let path_b = dir.path().join("b.txt");
        let mut file_a = std::fs::File::create(&path_a).unwrap();
        writeln!(file_a, "x\ny\nz").unwrap();
        let mut file_b = std::fs::File::create(&path_b).unwrap();
        writeln!(file_b, "y\nq\ny").unwrap();

        run(&path_a, &path_b).unwrap();
    }
}
