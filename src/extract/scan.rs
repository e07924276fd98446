/// Tuning knobs for the embedded-array scanner.
///
/// Both values are heuristics matched to the currently observed upstream
/// encoding; the markup format is not contractually stable, so they are
/// configuration rather than hardwired.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// How far past a marker (in bytes) the array-open bracket may sit.
    /// Occurrences whose bracket is further away are unrelated text.
    pub marker_lookahead: usize,
    /// Longest array slice (in bytes) the balanced scan will walk before
    /// giving up on an occurrence.
    pub max_scan_window: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker_lookahead: 10,
            max_scan_window: 200_000,
        }
    }
}

/// Finds the index of the `]` closing the array that opens at `start`,
/// looking at most `window` bytes ahead. Bracket characters inside string
/// literals are ignored, as are escaped quotes inside those strings.
/// Returns `None` when `start` is not an array-open or the array does not
/// close within the window.
pub(crate) fn find_array_end(s: &str, start: usize, window: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(start).copied()? != b'[' {
        return None;
    }

    let end = bytes.len().min(start.saturating_add(window));
    let mut depth = 0usize;
    let mut in_str = false;
    let mut j = start;

    while j < end {
        let c = bytes[j];

        if in_str {
            if c == b'\\' {
                j += 2;
                continue;
            } else if c == b'"' {
                in_str = false;
            }
            j += 1;
            continue;
        }

        match c {
            b'"' => {
                in_str = true;
            }
            b'[' => {
                depth += 1;
            }
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}
