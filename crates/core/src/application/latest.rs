// Latest-file resolution

use crate::domain::ResultFileName;

/// Newest result file of `model` in `files`
///
/// Entries may be bare names or index paths (`model/file`). Entries for a
/// different model or with an unparseable timestamp are ignored. On equal
/// timestamps the first entry wins.
pub fn latest_file<'a, S: AsRef<str>>(files: &'a [S], model: &str) -> Option<&'a str> {
    let mut best: Option<(&'a str, ResultFileName)> = None;

    for entry in files {
        let entry = entry.as_ref();
        let Ok(parsed) = ResultFileName::parse(entry) else {
            continue;
        };
        if parsed.model != model {
            continue;
        }
        let newer = best
            .as_ref()
            .map_or(true, |(_, current)| parsed.timestamp > current.timestamp);
        if newer {
            best = Some((entry, parsed));
        }
    }

    best.map(|(entry, _)| entry)
}

/// Result files of `model` (case-insensitive), oldest first
pub fn result_files_for<S: AsRef<str>>(files: &[S], model: &str) -> Vec<ResultFileName> {
    let mut matching: Vec<ResultFileName> = files
        .iter()
        .filter_map(|f| ResultFileName::parse(f.as_ref()).ok())
        .filter(|parsed| parsed.model.eq_ignore_ascii_case(model))
        .collect();

    matching.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    matching
}
