//! Parser for Go cover profiles (`go test -coverprofile=...`).
//!
//! Format:
//! ```text
//! mode: set
//! example.com/pkg/file.go:12.34,15.2 3 1
//! ```
//! Each block line is `<file>:<startLine>.<startCol>,<endLine>.<endCol> <numStmt> <count>`.

use super::schema::{Block, CoverMode, Profile};
use crate::utils::config::MODE_PREFIX;
use crate::utils::error::ParseError;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

/// Parse a cover profile from disk
///
/// **Public** - main entry point for parsing
///
/// # Returns
/// One profile per source file, sorted by file name
///
/// # Errors
/// * `ParseError::IoError` - file cannot be read
/// * any format error from [`parse_profiles_str`]
pub fn parse_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>, ParseError> {
    let path = path.as_ref();
    debug!("Reading cover profile: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    parse_profiles_str(&content)
}

/// Parse cover profile text
///
/// **Public** - useful for tests and in-memory reports
///
/// Blank lines are ignored. Repeated `mode:` headers are accepted as long as
/// they agree with the first one, so concatenated reports parse fine.
/// Blocks sharing the exact same span are merged.
pub fn parse_profiles_str(content: &str) -> Result<Vec<Profile>, ParseError> {
    let mut mode: Option<CoverMode> = None;
    let mut files: BTreeMap<String, Vec<Block>> = BTreeMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(current) = mode else {
            mode = Some(parse_mode_line(line, line_no)?);
            continue;
        };

        if let Some(rest) = line.strip_prefix(MODE_PREFIX) {
            let found = rest.trim();
            if found != current.as_str() {
                return Err(ParseError::ModeMismatch {
                    line: line_no,
                    expected: current.to_string(),
                    found: found.to_string(),
                });
            }
            continue;
        }

        let (file_name, block) = parse_block_line(line, line_no)?;
        files.entry(file_name).or_default().push(block);
    }

    let mode = mode.ok_or(ParseError::Empty)?;

    let mut profiles = Vec::with_capacity(files.len());
    for (file_name, blocks) in files {
        let blocks = merge_blocks(&file_name, mode, blocks)?;
        profiles.push(Profile::new(file_name, mode, blocks));
    }

    debug!(
        "Parsed {} profiles ({} blocks) in {} mode",
        profiles.len(),
        profiles.iter().map(|p| p.blocks.len()).sum::<usize>(),
        mode
    );

    Ok(profiles)
}

/// Parse the `mode: <mode>` header
///
/// **Private** - internal helper for parse_profiles_str
fn parse_mode_line(line: &str, line_no: usize) -> Result<CoverMode, ParseError> {
    let rest = line
        .strip_prefix(MODE_PREFIX)
        .ok_or_else(|| ParseError::MissingMode {
            line: line_no,
            found: line.to_string(),
        })?;

    rest.trim()
        .parse::<CoverMode>()
        .map_err(|mode| ParseError::UnknownMode { line: line_no, mode })
}

/// Parse a single block line into (file name, block)
///
/// **Private** - internal helper for parse_profiles_str
fn parse_block_line(line: &str, line_no: usize) -> Result<(String, Block), ParseError> {
    let invalid = |reason: &str| ParseError::InvalidLine {
        line: line_no,
        reason: reason.to_string(),
    };

    // Split from the right: the file name may itself contain spaces
    let mut fields = line.rsplitn(3, ' ');
    let count = fields.next().ok_or_else(|| invalid("missing count"))?;
    let num_stmt = fields.next().ok_or_else(|| invalid("missing statement count"))?;
    let position = fields
        .next()
        .map(str::trim_end)
        .ok_or_else(|| invalid("missing position"))?;

    let (file_name, span) = position
        .rsplit_once(':')
        .ok_or_else(|| invalid("missing ':' between file name and position"))?;
    if file_name.is_empty() {
        return Err(invalid("empty file name"));
    }

    let (start, end) = span
        .split_once(',')
        .ok_or_else(|| invalid("missing ',' in position"))?;
    let (start_line, start_col) = parse_line_col(start).ok_or_else(|| invalid("bad start position"))?;
    let (end_line, end_col) = parse_line_col(end).ok_or_else(|| invalid("bad end position"))?;

    let num_stmt = parse_digits::<u64>(num_stmt)
        .ok_or_else(|| invalid("statement count is not a non-negative integer"))?;
    let count = parse_digits::<u64>(count)
        .ok_or_else(|| invalid("count is not a non-negative integer"))?;

    Ok((
        file_name.to_string(),
        Block {
            start_line,
            start_col,
            end_line,
            end_col,
            num_stmt,
            count,
        },
    ))
}

fn parse_line_col(s: &str) -> Option<(u32, u32)> {
    let (line, col) = s.split_once('.')?;
    Some((parse_digits(line)?, parse_digits(col)?))
}

/// Parse a `[0-9]+` field, no sign allowed
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Sort blocks by position and merge duplicates of the same span
///
/// **Private** - duplicates show up when several test binaries cover one package
fn merge_blocks(
    file_name: &str,
    mode: CoverMode,
    mut blocks: Vec<Block>,
) -> Result<Vec<Block>, ParseError> {
    blocks.sort_by_key(|b| (b.start_line, b.start_col, b.end_line, b.end_col));

    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.same_span(&block) => {
                if last.num_stmt != block.num_stmt {
                    return Err(ParseError::InconsistentStatements {
                        file: file_name.to_string(),
                        start_line: block.start_line,
                        start_col: block.start_col,
                    });
                }
                last.count = match mode {
                    CoverMode::Set => last.count | block.count,
                    CoverMode::Count | CoverMode::Atomic => last.count.saturating_add(block.count),
                };
            }
            _ => merged.push(block),
        }
    }

    Ok(merged)
}
