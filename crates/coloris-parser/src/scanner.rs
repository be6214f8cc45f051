//! The marker scanner/builder.
//!
//! One pass over the input bytes with two states, `Normal` and
//! in-marker. Bytes are copied to the output as they are read; when a
//! `#NAME#` candidate resolves, the tentatively written bytes are
//! rewound by truncating the output back to the recorded marker-start
//! offset. Offsets survive buffer growth for free, so there is no
//! cursor fixup anywhere.

use coloris_core::{ColorLookup, Resolution};

/// Longest marker name a palette entry can match, in bytes.
pub const MAX_NAME_LEN: usize = 31;

/// Expand `#NAME#` markers in `input` against `lookup`.
///
/// Every input has a defined output; the scanner rejects nothing.
/// A name that resolves is replaced by its code (or erased outright
/// when the code is empty, delimiters included). A name that does not
/// resolve is reproduced literally, and its closing `#` is rescanned
/// as the opener of the next candidate, so `#BAD##text#GOOD#` keeps
/// `#BAD#` as text while still resolving `#GOOD#`. An unterminated
/// trailing marker stays in the output as written.
pub fn expand(input: &str, lookup: &dyn ColorLookup) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let mut name: Vec<u8> = Vec::with_capacity(MAX_NAME_LEN);
    let mut marker_start = 0;
    let mut in_marker = false;

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];

        if !in_marker {
            out.push(b);
            if b == b'#' {
                marker_start = out.len() - 1;
                name.clear();
                in_marker = true;
            }
        } else if b != b'#' {
            if name.len() == MAX_NAME_LEN {
                // Longer than any palette name can be; the candidate
                // is plain text after all.
                in_marker = false;
            } else {
                name.push(b);
            }
            out.push(b);
        } else {
            // Closing '#' of a candidate marker.
            in_marker = false;
            match resolve_name(&name, lookup) {
                Resolution::Empty => {
                    out.truncate(marker_start);
                }
                Resolution::Code(code) => {
                    out.truncate(marker_start);
                    out.extend_from_slice(code.as_bytes());
                }
                Resolution::Unknown => {
                    // Not a closer: rescan this '#' as the opener of
                    // the next candidate. The failed candidate has
                    // already been written out literally.
                    continue;
                }
            }
        }

        i += 1;
    }

    // '#' is ASCII, names sit between two delimiters, and codes come
    // from &str, so the buffer holds complete UTF-8 sequences.
    String::from_utf8(out).expect("marker expansion preserves UTF-8")
}

fn resolve_name<'a>(name: &[u8], lookup: &'a dyn ColorLookup) -> Resolution<'a> {
    match std::str::from_utf8(name) {
        Ok(name) => lookup.resolve(name),
        Err(_) => Resolution::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloris_core::{NoColor, Palette};

    fn palette() -> Palette {
        Palette::new().with("RED", "\x1b[31m").with("RST", "\x1b[0m")
    }

    #[test]
    fn test_plain_text_is_identity() {
        let p = palette();
        assert_eq!(expand("", &p), "");
        assert_eq!(expand("hello, world", &p), "hello, world");
        assert_eq!(expand("no markers here\n", &p), "no markers here\n");
    }

    #[test]
    fn test_marker_replaced_by_code() {
        let p = palette();
        assert_eq!(expand("#RED#hi#RST#", &p), "\x1b[31mhi\x1b[0m");
        assert_eq!(expand("a#RED#b", &p), "a\x1b[31mb");
    }

    #[test]
    fn test_empty_code_erases_marker() {
        let p = Palette::new().with("RST", "");
        assert_eq!(expand("x#RST#y", &p), "xy");
        assert_eq!(expand("#RST#", &p), "");
    }

    #[test]
    fn test_unknown_marker_is_literal() {
        let p = palette();
        assert_eq!(expand("#FOO#bar#FOO#", &p), "#FOO#bar#FOO#");
    }

    #[test]
    fn test_disabled_lookup_is_identity() {
        assert_eq!(expand("#RED#hi#RST#", &NoColor), "#RED#hi#RST#");
    }

    #[test]
    fn test_unknown_closer_rescans_as_opener() {
        let p = palette();
        // The '#' closing #BAD# opens #text#, which is also unknown;
        // the '#' closing that opens #RED#, which resolves.
        assert_eq!(expand("#BAD##text#RED#x", &p), "#BAD##text\x1b[31mx");
    }

    #[test]
    fn test_adjacent_markers() {
        let p = palette();
        assert_eq!(expand("#RED##RST#", &p), "\x1b[31m\x1b[0m");
    }

    #[test]
    fn test_unterminated_marker_stays_literal() {
        let p = palette();
        assert_eq!(expand("#RED#text#RS", &p), "\x1b[31mtext#RS");
        assert_eq!(expand("trailing #", &p), "trailing #");
    }

    #[test]
    fn test_lone_hash_runs() {
        let p = palette();
        assert_eq!(expand("#", &p), "#");
        assert_eq!(expand("##", &p), "##");
        assert_eq!(expand("#########", &p), "#########");
    }

    #[test]
    fn test_empty_name_can_resolve() {
        let p = Palette::new().with("", "X");
        assert_eq!(expand("##", &p), "X");
    }

    #[test]
    fn test_overlong_name_degrades_to_text() {
        let p = palette();
        let long = "#".to_string() + &"A".repeat(40) + "#RED#";
        let expected = "#".to_string() + &"A".repeat(40) + "\x1b[31m";
        assert_eq!(expand(&long, &p), expected);
    }

    #[test]
    fn test_max_length_name_still_resolves() {
        let name = "N".repeat(MAX_NAME_LEN);
        let p = Palette::new().with(name.clone(), "ok");
        assert_eq!(expand(&format!("#{name}#"), &p), "ok");
    }

    #[test]
    fn test_idempotent_on_resolved_output() {
        let p = palette();
        let once = expand("#RED#hi#RST#", &p);
        assert_eq!(expand(&once, &p), once);
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        let p = palette();
        assert_eq!(expand("héllo #RED#wörld#RST# ✓", &p), "héllo \x1b[31mwörld\x1b[0m ✓");
        assert_eq!(expand("#ünknown#", &p), "#ünknown#");
    }

    #[test]
    fn test_substitution_longer_than_input() {
        let p = Palette::new().with("X", "y".repeat(500));
        assert_eq!(expand("#X#", &p), "y".repeat(500));
    }
}
