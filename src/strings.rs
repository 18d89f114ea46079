//! Helpers for multiline string literals written with the source
//! code's indentation: the opening line (right after the quote) is
//! discarded, as is a blank closing line, and every remaining line
//! loses a fixed number of leading characters.
use alloc::string::String;
use alloc::vec::Vec;

/// Returns `line` without its first `indent` characters.
fn strip_indent(line: &str, indent: usize) -> &str {
    line.char_indices()
        .nth(indent)
        .map_or("", |(pos, _)| &line[pos..])
}

/// Splits `text` into lines, drops the opening line and a blank
/// closing line, then trims each line at the end and strips its
/// `indent` first characters.
fn block_lines(indent: usize, text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').skip(1).collect();
    if lines.last().is_some_and(|line| line.trim_end().is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .map(|line| strip_indent(line.trim_end(), indent))
        .collect()
}

/// Unindents a multiline literal, keeping its line breaks.
///
/// ```
/// # use primkit::strings::block;
/// let text = block(4, "
///     foo bar
///     baz
/// ");
/// assert_eq!(text, "foo bar\nbaz");
/// ```
pub fn block(indent: usize, text: &str) -> String {
    block_lines(indent, text).join("\n")
}

/// Unindents a multiline literal and folds its lines into a single
/// line, separated with spaces.  An empty line in `text` turns into a
/// line break, and the following line starts without a space.
pub fn fold(indent: usize, text: &str) -> String {
    let mut ret = String::new();
    let mut continued = false;

    for line in block_lines(indent, text) {
        if line.is_empty() {
            ret.push('\n');
            continued = false;
        } else {
            if continued {
                ret.push(' ');
            }

            ret.push_str(line);
            continued = true;
        }
    }

    ret
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;

    #[test]
    fn test_block() {
        assert_eq!(block(3, "\n\t\t\tfoo bar\n\t\t\tbaz\n\t\t"), "foo bar\nbaz");
        assert_eq!(
            block(12, "\n            foo bar\n            baz\n\t\t"),
            "foo bar\nbaz"
        );
        assert_eq!(block(3, "\n\t\t\tfoo bar\n\t\t\tbaz"), "foo bar\nbaz");
        assert_eq!(block(3, "\n\t\t\tfoo bar\n\t\t\tbaz\n\n\t\t"), "foo bar\nbaz\n");
        let code = concat!(
            "\n",
            "\t\t\tfunction foo() {\n",
            "\t\t\t\tif (bar) {\n",
            "\t\t\t\t\treturn baz;\n",
            "\t\t\t\t}\n",
            "\t\t\t}\n",
            "\t\t",
        );
        assert_eq!(
            block(3, code),
            "function foo() {\n\tif (bar) {\n\t\treturn baz;\n\t}\n}"
        );
    }

    #[test]
    fn test_block_edges() {
        // Nothing past the opening line.
        assert_eq!(block(3, ""), "");
        assert_eq!(block(3, "only the opening line"), "");
        assert_eq!(block(0, "\n"), "");

        // Short lines vanish entirely; indentation counts characters.
        assert_eq!(block(4, "\n  ab\n\u{e9}\u{e8}\u{ea}\u{eb}cd"), "\ncd");
        assert_eq!(block(0, "ignored\n  keep  \n"), "  keep");
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold(3, "\n\t\t\tfoo bar\n\t\t\tbaz\n\t\t"), "foo bar baz");
        assert_eq!(
            fold(12, "\n            foo bar\n            baz\n\t\t"),
            "foo bar baz"
        );
        assert_eq!(fold(3, "\n\t\t\tfoo bar\n\t\t\tbaz"), "foo bar baz");
        assert_eq!(
            fold(3, "\n\t\t\tfoo bar\n\n\t\t\tbaz\n\t\t\tqux\n\n\t\t"),
            "foo bar\nbaz qux\n"
        );
        assert_eq!(fold(1, "\n\n\n x"), "\n\nx");
    }

    proptest::proptest! {
        #[test]
        fn test_fold_no_newlines(lines: Vec<String>) {
            // Without blank lines, folding is joining with spaces.
            let lines: Vec<String> = lines
                .into_iter()
                .map(|line| line.replace(char::is_whitespace, "x"))
                .filter(|line| !line.is_empty())
                .collect();

            let mut text = String::from("opening");
            for line in &lines {
                text.push('\n');
                text.push_str(line);
            }

            assert_eq!(fold(0, &text), lines.join(" "));
            assert_eq!(block(0, &text), lines.join("\n"));
        }
    }
}
