//! Interactive console prompts for filter keywords and hashtags.
//!
//! Only used when no keywords came from configuration or the command line.

use crate::types::FilterKeywordSet;
use std::io::{self, BufRead, Write};

/// Token that ends interactive keyword collection.
pub const STOP_TOKEN: &str = "x";

/// Prompt for keywords one line at a time until the stop token (or end of
/// input) is read. Lines are kept as typed, minus the line terminator.
pub fn collect_keywords<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<FilterKeywordSet> {
    let mut keywords = FilterKeywordSet::new();

    loop {
        write!(output, "Enter a keyword, {} to stop: ", STOP_TOKEN)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let keyword = strip_line_ending(&line);
        if keyword.trim().eq_ignore_ascii_case(STOP_TOKEN) {
            break;
        }
        keywords.push(keyword);
    }

    tracing::debug!(count = keywords.len(), "Collected filter keywords");
    Ok(keywords)
}

/// Prompt once for a hashtag. Surrounding whitespace and a leading `#` are dropped.
pub fn prompt_hashtag<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(output, "Enter a hashtag: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(clean_hashtag(&line))
}

pub fn clean_hashtag(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed).to_string()
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collects_until_stop_token() {
        let input = Cursor::new("roblox\ndance\nx\ngaming\n");
        let mut output = Vec::new();
        let keywords = collect_keywords(input, &mut output).unwrap();

        assert_eq!(keywords.as_slice(), &["roblox", "dance"]);
        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(prompts.matches("Enter a keyword, x to stop: ").count(), 3);
    }

    #[test]
    fn test_stop_token_is_case_insensitive_and_trimmed() {
        let input = Cursor::new("dance\n  X  \r\n");
        let keywords = collect_keywords(input, io::sink()).unwrap();
        assert_eq!(keywords.as_slice(), &["dance"]);
    }

    #[test]
    fn test_keeps_interior_whitespace_and_duplicates() {
        let input = Cursor::new("hip hop\r\nhip hop\nx\n");
        let keywords = collect_keywords(input, io::sink()).unwrap();
        assert_eq!(keywords.as_slice(), &["hip hop", "hip hop"]);
    }

    #[test]
    fn test_end_of_input_stops_collection() {
        let keywords = collect_keywords(Cursor::new("dance"), io::sink()).unwrap();
        assert_eq!(keywords.as_slice(), &["dance"]);

        let keywords = collect_keywords(Cursor::new(""), io::sink()).unwrap();
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_prompt_hashtag() {
        let tag = prompt_hashtag(Cursor::new("  #robloxdance \n"), io::sink()).unwrap();
        assert_eq!(tag, "robloxdance");

        let tag = prompt_hashtag(Cursor::new(""), io::sink()).unwrap();
        assert!(tag.is_empty());
    }
}
