use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use crate::shared::constants::IMAGE_EXTENSIONS;

/// Lists the qualifying image files of a sequence folder in playback order.
///
/// A file qualifies when its extension is on the image allow-list,
/// case-insensitively. Ordering is numeric-aware: digit runs inside
/// filenames compare by value, so `frame_2.jpg` precedes `frame_10.jpg`
/// even without zero padding. Names without digits fall back to plain
/// byte order.
pub fn scan_sequence(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();

    files.sort_by(|a, b| {
        let a_name = a.file_name().unwrap_or_default().to_string_lossy();
        let b_name = b.file_name().unwrap_or_default().to_string_lossy();
        natural_cmp(&a_name, &b_name)
    });

    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Compares two filenames, treating embedded digit runs as numbers.
///
/// Equal numeric values with different padding ("01" vs "1") tie-break
/// on run length so the ordering stays total.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(a, &mut i);
            let run_b = digit_run(b, &mut j);
            let trimmed_a = trim_leading_zeros(run_a);
            let trimmed_b = trim_leading_zeros(run_b);

            let by_value = trimmed_a
                .len()
                .cmp(&trimmed_b.len())
                .then_with(|| trimmed_a.cmp(trimmed_b));
            if by_value != Ordering::Equal {
                return by_value;
            }
            if run_a.len() != run_b.len() {
                return run_a.len().cmp(&run_b.len());
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run<'a>(bytes: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    &bytes[start..*pos]
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let first_nonzero = run.iter().position(|&b| b != b'0').unwrap_or(run.len());
    &run[first_nonzero..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_filters_non_image_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.txt");
        touch(dir.path(), "c.png");
        touch(dir.path(), "d.mp4");

        let files = scan_sequence(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "c.png"]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "b.Png");

        let files = scan_sequence(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_plain_names_sort_bytewise() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "c.jpg");

        let files = scan_sequence(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_unpadded_numbers_sort_by_value() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "frame_10.jpg");
        touch(dir.path(), "frame_2.jpg");
        touch(dir.path(), "frame_1.jpg");

        let files = scan_sequence(dir.path()).unwrap();
        assert_eq!(
            names(&files),
            vec!["frame_1.jpg", "frame_2.jpg", "frame_10.jpg"]
        );
    }

    #[test]
    fn test_empty_folder_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_sequence(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder_is_io_error() {
        assert!(scan_sequence(Path::new("/nonexistent/folder")).is_err());
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();
        touch(dir.path(), "real.jpg");

        let files = scan_sequence(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["real.jpg"]);
    }

    #[rstest]
    #[case("a.jpg", "b.jpg", Ordering::Less)]
    #[case("frame_2.jpg", "frame_10.jpg", Ordering::Less)]
    #[case("frame_010.jpg", "frame_10.jpg", Ordering::Greater)]
    #[case("frame_10.jpg", "frame_10.jpg", Ordering::Equal)]
    #[case("img2.png", "img2.png.bak", Ordering::Less)]
    #[case("10.jpg", "9.jpg", Ordering::Greater)]
    fn test_natural_cmp(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(natural_cmp(a, b), expected);
    }
}
