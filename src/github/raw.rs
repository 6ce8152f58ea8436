// src/github/raw.rs
// =============================================================================
// This module turns a GitHub "blob" link into a raw.githubusercontent.com link.
//
// GitHub shows files inside its web UI at:
//   https://github.com/<owner>/<repo>/blob/<branch>/<path>
//
// The same bytes, with no HTML around them, are served at:
//   https://raw.githubusercontent.com/<owner>/<repo>/<branch>/<path>
//
// Strategy:
// - Strip the fixed "https://github.com/" prefix
// - Peel off owner, repo and branch one '/'-terminated segment at a time,
//   checking for the literal "blob/" between repo and branch
// - Everything left over is the file path (it may contain more slashes)
// - Glue the four pieces back together behind the raw prefix
//
// Nothing is decoded, re-encoded or lowercased. What goes in comes out.
//
// Rust concepts:
// - Lifetimes: SourceReference borrows slices of the input instead of copying
// - Option and the ? operator: Each parsing step can bail out early
// - Display: Lets us format! a SourceReference straight into a URL
// =============================================================================

use std::fmt;

use tracing::debug;

use crate::error::{Result, TranslateError};

const GITHUB_PREFIX: &str = "https://github.com/";
const RAW_PREFIX: &str = "https://raw.githubusercontent.com/";
const BLOB_MARKER: &str = "blob/";

// The four pieces of a GitHub file link
//
// Every field borrows from the string we parsed, so building one is free.
// None of owner/repo/branch contain '/', and none of the fields are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceReference<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub branch: &'a str,
    pub path: &'a str,
}

impl SourceReference<'_> {
    /// Renders the raw.githubusercontent.com URL for this file.
    pub fn raw_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SourceReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}/{}/{}",
            RAW_PREFIX, self.owner, self.repo, self.branch, self.path
        )
    }
}

// Converts a GitHub blob URL to a raw.githubusercontent.com URL
//
// Parameters:
//   github_url: A GitHub URL pointing to a file
//
// Returns: Result<String>
//   Success: the raw URL
//   Error: TranslateError::InvalidFormat if the link has the wrong shape
//
// Example:
//   "https://github.com/hyperipper/hyperipper_posts/blob/main/image.png"
//   -> "https://raw.githubusercontent.com/hyperipper/hyperipper_posts/main/image.png"
pub fn github_url_to_raw(github_url: &str) -> Result<String> {
    let source = parse_blob_url(github_url)?;
    Ok(source.raw_url())
}

// Splits a GitHub blob URL into owner, repo, branch and path
//
// The match is anchored at the start only. Anything after the branch is
// the path, up to the first line feed; a line feed ends the path and the
// text after it is dropped.
pub fn parse_blob_url(github_url: &str) -> Result<SourceReference<'_>> {
    let rest = github_url
        .strip_prefix(GITHUB_PREFIX)
        .ok_or_else(|| reject(github_url, "missing https://github.com/ prefix"))?;

    let (owner, rest) =
        take_segment(rest).ok_or_else(|| reject(github_url, "missing owner"))?;
    let (repo, rest) =
        take_segment(rest).ok_or_else(|| reject(github_url, "missing repo"))?;

    let rest = rest
        .strip_prefix(BLOB_MARKER)
        .ok_or_else(|| reject(github_url, "missing /blob/ segment"))?;

    let (branch, rest) =
        take_segment(rest).ok_or_else(|| reject(github_url, "missing branch"))?;

    // split() always yields at least one item, possibly empty
    let path = rest.split('\n').next().unwrap_or_default();
    if path.is_empty() {
        return Err(reject(github_url, "missing file path"));
    }

    debug!(owner, repo, branch, path, "parsed GitHub blob URL");

    Ok(SourceReference {
        owner,
        repo,
        branch,
        path,
    })
}

// Takes one non-empty segment terminated by '/'
//
// Returns (segment, remainder after the slash), or None if there is no
// slash or the segment before it is empty.
fn take_segment(input: &str) -> Option<(&str, &str)> {
    let (segment, rest) = input.split_once('/')?;
    if segment.is_empty() {
        None
    } else {
        Some((segment, rest))
    }
}

fn reject(github_url: &str, reason: &str) -> TranslateError {
    debug!(input = github_url, reason, "rejected GitHub URL");
    TranslateError::InvalidFormat
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does SourceReference have a lifetime ('a)?
//    - Its fields are &str slices pointing into the caller's string
//    - The lifetime tells the compiler the struct can't outlive that string
//    - We avoid four String allocations this way
//
// 2. What is split_once?
//    - Splits a string at the first match of a pattern
//    - Returns Option<(before, after)>, None if the pattern isn't there
//
// 3. Why strip_prefix instead of trim_start_matches?
//    - strip_prefix removes the prefix exactly once and tells us (via
//      Option) whether it was there
//    - trim_start_matches removes it any number of times and never fails
//
// 4. What is ok_or_else?
//    - Turns an Option into a Result
//    - The closure only runs (and only logs) when the value is None
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_example() {
        let raw = github_url_to_raw(
            "https://github.com/hyperipper/hyperipper_posts/blob/main/image.png",
        )
        .unwrap();
        assert_eq!(
            raw,
            "https://raw.githubusercontent.com/hyperipper/hyperipper_posts/main/image.png"
        );
    }

    #[test]
    fn test_nested_path_keeps_slashes() {
        let raw = github_url_to_raw(
            "https://github.com/hyperipper/hyperipper_posts/blob/main/docs/image.png",
        )
        .unwrap();
        assert_eq!(
            raw,
            "https://raw.githubusercontent.com/hyperipper/hyperipper_posts/main/docs/image.png"
        );
    }

    #[test]
    fn test_parse_fields() {
        let source = parse_blob_url("https://github.com/rust-lang/rust/blob/master/src/lib.rs")
            .unwrap();
        assert_eq!(source.owner, "rust-lang");
        assert_eq!(source.repo, "rust");
        assert_eq!(source.branch, "master");
        assert_eq!(source.path, "src/lib.rs");
    }

    #[test]
    fn test_composed_inputs_round_trip() {
        let owners = ["a", "Some-Org", "user_1"];
        let repos = ["b", "repo.name", "blob"];
        let branches = ["main", "v1.0.0", "feature-x"];
        let paths = ["c", "dir/file.txt", "a/b/c/d.png", "file?raw=true#L10"];

        for owner in owners {
            for repo in repos {
                for branch in branches {
                    for path in paths {
                        let input =
                            format!("https://github.com/{owner}/{repo}/blob/{branch}/{path}");
                        let expected = format!(
                            "https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path}"
                        );
                        assert_eq!(github_url_to_raw(&input).unwrap(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_reencoding_or_case_change() {
        let raw = github_url_to_raw(
            "https://github.com/MyOrg/My%20Repo/blob/Release/Some%20File.PNG",
        )
        .unwrap();
        assert_eq!(
            raw,
            "https://raw.githubusercontent.com/MyOrg/My%20Repo/Release/Some%20File.PNG"
        );
    }

    #[test]
    fn test_trailing_content_goes_into_path() {
        let raw = github_url_to_raw("https://github.com/a/b/blob/main/c/ d?x=1").unwrap();
        assert_eq!(raw, "https://raw.githubusercontent.com/a/b/main/c/ d?x=1");
    }

    #[test]
    fn test_path_ends_at_line_feed() {
        let raw = github_url_to_raw("https://github.com/a/b/blob/main/c.txt\nignored").unwrap();
        assert_eq!(raw, "https://raw.githubusercontent.com/a/b/main/c.txt");

        let result = github_url_to_raw("https://github.com/a/b/blob/main/\nc.txt");
        assert_eq!(result, Err(TranslateError::InvalidFormat));
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        let result = github_url_to_raw("http://github.com/a/b/blob/main/c");
        assert_eq!(result, Err(TranslateError::InvalidFormat));
    }

    #[test]
    fn test_rejects_other_hosts() {
        for url in [
            "https://gitlab.com/a/b/blob/main/c",
            "https://www.github.com/a/b/blob/main/c",
            "https://GitHub.com/a/b/blob/main/c",
            "github.com/a/b/blob/main/c",
            " https://github.com/a/b/blob/main/c",
        ] {
            assert!(github_url_to_raw(url).is_err(), "accepted {url:?}");
        }
    }

    #[test]
    fn test_rejects_missing_blob_segment() {
        for url in [
            "https://github.com/a/b/tree/main/c",
            "https://github.com/a/b/main/c",
            "https://github.com/a/b/blobx/main/c",
            "https://github.com/a/b",
        ] {
            assert_eq!(
                github_url_to_raw(url),
                Err(TranslateError::InvalidFormat),
                "accepted {url:?}"
            );
        }
    }

    #[test]
    fn test_rejects_missing_components() {
        for url in [
            "",
            "https://github.com/",
            "https://github.com//b/blob/main/c",
            "https://github.com/a//blob/main/c",
            "https://github.com/a/b/blob//c",
            "https://github.com/a/b/blob/main",
            "https://github.com/a/b/blob/main/",
        ] {
            assert_eq!(
                github_url_to_raw(url),
                Err(TranslateError::InvalidFormat),
                "accepted {url:?}"
            );
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let input = String::from("https://github.com/a/b/blob/main/c");
        let first = github_url_to_raw(&input).unwrap();
        let second = github_url_to_raw(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(input, "https://github.com/a/b/blob/main/c");
    }

    #[test]
    fn test_display_matches_raw_url() {
        let source = SourceReference {
            owner: "o",
            repo: "r",
            branch: "b",
            path: "p/q",
        };
        assert_eq!(format!("{source}"), source.raw_url());
        assert_eq!(source.raw_url(), "https://raw.githubusercontent.com/o/r/b/p/q");
    }
}
