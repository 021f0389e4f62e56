// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-level unified diff.
//!
//! Linear-space Myers shortest edit script over lines, grouped into hunks with
//! three lines of context and rendered in `diff -u` format. Lines keep their
//! terminators, so `\r\n` vs `\n` and a missing final newline are changes.

use std::fmt::Write;
use std::ops::{Index, IndexMut, Range};

use serde::Serialize;

/// Lines of context around each change.
pub const CONTEXT_LINES: usize = 3;

/// Summary of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub hunks: usize,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.hunks == 0
    }
}

/// One rendered line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Context(String),
    Removed(String),
    Added(String),
}

impl DiffLine {
    /// Line text without its terminator.
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Context(s) | DiffLine::Removed(s) | DiffLine::Added(s) => s,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, DiffLine::Context(_))
    }
}

/// A contiguous group of changes with surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// 0-based start line in the old text.
    pub old_start: usize,
    pub old_len: usize,
    /// 0-based start line in the new text.
    pub new_start: usize,
    pub new_len: usize,
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// `@@ -a,b +c,d @@`
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            format_range(self.old_start, self.old_len),
            format_range(self.new_start, self.new_len)
        )
    }
}

/// Result of diffing two texts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnifiedDiff {
    pub hunks: Vec<Hunk>,
    pub stats: DiffStats,
    /// Rendered `diff -u` text; empty when the inputs are identical.
    pub text: String,
}

impl UnifiedDiff {
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Added and removed lines, without markers.
    pub fn changed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.hunks
            .iter()
            .flat_map(|h| h.lines.iter())
            .filter(|l| l.is_change())
    }
}

/// Diff `old` against `new`, labelling the sides `old_name` / `new_name`.
pub fn unified_diff(old: &str, new: &str, old_name: &str, new_name: &str) -> UnifiedDiff {
    if old == new {
        return UnifiedDiff::default();
    }

    let a = split_lines(old);
    let b = split_lines(new);
    let ops = opcodes(&shortest_edit(&a, &b));

    let mut hunks = Vec::new();
    let mut stats = DiffStats::default();
    for group in group_opcodes(&ops, CONTEXT_LINES) {
        let hunk = build_hunk(&group, &a, &b);
        for line in &hunk.lines {
            match line {
                DiffLine::Added(_) => stats.additions += 1,
                DiffLine::Removed(_) => stats.deletions += 1,
                DiffLine::Context(_) => {}
            }
        }
        hunks.push(hunk);
    }
    stats.hunks = hunks.len();

    let text = render(&hunks, &a, &b, old_name, new_name);
    UnifiedDiff { hunks, stats, text }
}

/// Split keeping terminators. An empty text has no lines.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Equal,
    Delete,
    Insert,
}

/// Myers shortest edit script, with deletions ordered before insertions
/// inside every change block.
///
/// Uses the linear-space variant: each step finds the middle snake of the
/// remaining ranges and recurses on both halves, so memory stays
/// proportional to `a.len() + b.len()`.
fn shortest_edit(a: &[&str], b: &[&str]) -> Vec<Edit> {
    let bound = max_d(a.len(), b.len());
    let mut search = SnakeSearch {
        a,
        b,
        forward: Frontier::new(bound),
        backward: Frontier::new(bound),
    };
    let mut edits = Vec::with_capacity(a.len() + b.len());
    search.conquer(0..a.len(), 0..b.len(), &mut edits);
    deletions_first(edits)
}

/// Upper bound on the half-length of an edit script between the two ranges.
fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len).div_ceil(2) + 1
}

/// Furthest-reaching x per diagonal `k`, indexed by signed `k`.
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize + 1,
            v: vec![0; 2 * max_d + 3],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

struct SnakeSearch<'a, 'b> {
    a: &'a [&'b str],
    b: &'a [&'b str],
    forward: Frontier,
    backward: Frontier,
}

impl SnakeSearch<'_, '_> {
    fn conquer(&mut self, mut old: Range<usize>, mut new: Range<usize>, out: &mut Vec<Edit>) {
        let prefix = self.common_prefix(old.clone(), new.clone());
        out.extend(std::iter::repeat_n(Edit::Equal, prefix));
        old.start += prefix;
        new.start += prefix;

        let suffix = self.common_suffix(old.clone(), new.clone());
        old.end -= suffix;
        new.end -= suffix;

        if old.is_empty() {
            out.extend(std::iter::repeat_n(Edit::Insert, new.len()));
        } else if new.is_empty() {
            out.extend(std::iter::repeat_n(Edit::Delete, old.len()));
        } else if let Some((x, y)) = self.middle_snake(old.clone(), new.clone()) {
            self.conquer(old.start..x, new.start..y, out);
            self.conquer(x..old.end, y..new.end, out);
        } else {
            out.extend(std::iter::repeat_n(Edit::Delete, old.len()));
            out.extend(std::iter::repeat_n(Edit::Insert, new.len()));
        }

        out.extend(std::iter::repeat_n(Edit::Equal, suffix));
    }

    /// Start of the middle snake of an optimal path, in absolute coordinates.
    fn middle_snake(&mut self, old: Range<usize>, new: Range<usize>) -> Option<(usize, usize)> {
        let n = old.len();
        let m = new.len();
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        self.forward[1] = 0;
        self.backward[1] = 0;

        for d in 0..max_d(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.forward[k - 1] < self.forward[k + 1]) {
                    self.forward[k + 1]
                } else {
                    self.forward[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);
                if x < n && y < m {
                    x += self.common_prefix(old.start + x..old.end, new.start + y..new.end);
                }
                self.forward[k] = x;

                if odd
                    && (k - delta).abs() < d
                    && self.forward[k] + self.backward[delta - k] >= n
                {
                    return Some((old.start + x0, new.start + y0));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.backward[k - 1] < self.backward[k + 1])
                {
                    self.backward[k + 1]
                } else {
                    self.backward[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;
                if x < n && y < m {
                    let run = self.common_suffix(
                        old.start..old.start + n - x,
                        new.start..new.start + m - y,
                    );
                    x += run;
                    y += run;
                }
                self.backward[k] = x;

                if !odd
                    && (k - delta).abs() <= d
                    && self.backward[k] + self.forward[delta - k] >= n
                {
                    return Some((old.start + n - x, new.start + m - y));
                }
            }
        }
        None
    }

    fn common_prefix(&self, old: Range<usize>, new: Range<usize>) -> usize {
        self.a[old]
            .iter()
            .zip(&self.b[new])
            .take_while(|(x, y)| x == y)
            .count()
    }

    fn common_suffix(&self, old: Range<usize>, new: Range<usize>) -> usize {
        self.a[old]
            .iter()
            .rev()
            .zip(self.b[new].iter().rev())
            .take_while(|(x, y)| x == y)
            .count()
    }
}

fn deletions_first(edits: Vec<Edit>) -> Vec<Edit> {
    let mut out = Vec::with_capacity(edits.len());
    let (mut deletes, mut inserts) = (0usize, 0usize);
    let flush = |out: &mut Vec<Edit>, deletes: &mut usize, inserts: &mut usize| {
        out.extend(std::iter::repeat_n(Edit::Delete, *deletes));
        out.extend(std::iter::repeat_n(Edit::Insert, *inserts));
        *deletes = 0;
        *inserts = 0;
    };
    for edit in edits {
        match edit {
            Edit::Delete => deletes += 1,
            Edit::Insert => inserts += 1,
            Edit::Equal => {
                flush(&mut out, &mut deletes, &mut inserts);
                out.push(Edit::Equal);
            }
        }
    }
    flush(&mut out, &mut deletes, &mut inserts);
    out
}

/// A run of identical edits covering `a[a_start..a_end]` / `b[b_start..b_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opcode {
    edit: Edit,
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
}

fn opcodes(edits: &[Edit]) -> Vec<Opcode> {
    let mut ops: Vec<Opcode> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for &edit in edits {
        let (di, dj) = match edit {
            Edit::Equal => (1, 1),
            Edit::Delete => (1, 0),
            Edit::Insert => (0, 1),
        };
        match ops.last_mut() {
            Some(op) if op.edit == edit => {
                op.a_end += di;
                op.b_end += dj;
            }
            _ => ops.push(Opcode {
                edit,
                a_start: i,
                a_end: i + di,
                b_start: j,
                b_end: j + dj,
            }),
        }
        i += di;
        j += dj;
    }
    ops
}

/// Split opcodes into hunks, keeping `context` equal lines around changes
/// and merging changes separated by at most `2 * context` equal lines.
fn group_opcodes(ops: &[Opcode], context: usize) -> Vec<Vec<Opcode>> {
    if !ops.iter().any(|op| op.edit != Edit::Equal) {
        return Vec::new();
    }

    let mut ops = ops.to_vec();
    if let Some(first) = ops.first_mut()
        && first.edit == Edit::Equal
    {
        first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
        first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
    }
    if let Some(last) = ops.last_mut()
        && last.edit == Edit::Equal
    {
        last.a_end = last.a_end.min(last.a_start + context);
        last.b_end = last.b_end.min(last.b_start + context);
    }

    let mut groups = Vec::new();
    let mut group = Vec::new();
    for mut op in ops {
        if op.edit == Edit::Equal && op.a_end - op.a_start > 2 * context {
            group.push(Opcode {
                a_end: op.a_end.min(op.a_start + context),
                b_end: op.b_end.min(op.b_start + context),
                ..op
            });
            groups.push(std::mem::take(&mut group));
            op.a_start = op.a_start.max(op.a_end.saturating_sub(context));
            op.b_start = op.b_start.max(op.b_end.saturating_sub(context));
        }
        group.push(op);
    }
    if !(group.is_empty() || group.len() == 1 && group[0].edit == Edit::Equal) {
        groups.push(group);
    }
    groups.retain(|g| g.iter().any(|op| op.edit != Edit::Equal));
    groups
}

fn build_hunk(group: &[Opcode], a: &[&str], b: &[&str]) -> Hunk {
    let (Some(first), Some(last)) = (group.first(), group.last()) else {
        return Hunk {
            old_start: 0,
            old_len: 0,
            new_start: 0,
            new_len: 0,
            lines: Vec::new(),
        };
    };

    let mut lines = Vec::new();
    for op in group {
        match op.edit {
            Edit::Equal => lines.extend(
                a[op.a_start..op.a_end]
                    .iter()
                    .map(|l| DiffLine::Context(strip_newline(l).to_string())),
            ),
            Edit::Delete => lines.extend(
                a[op.a_start..op.a_end]
                    .iter()
                    .map(|l| DiffLine::Removed(strip_newline(l).to_string())),
            ),
            Edit::Insert => lines.extend(
                b[op.b_start..op.b_end]
                    .iter()
                    .map(|l| DiffLine::Added(strip_newline(l).to_string())),
            ),
        }
    }

    Hunk {
        old_start: first.a_start,
        old_len: last.a_end - first.a_start,
        new_start: first.b_start,
        new_len: last.b_end - first.b_start,
        lines,
    }
}

/// `diff -u` range: 1-based start, length omitted when 1, start of the
/// preceding line when empty.
fn format_range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, len),
    }
}

const NO_NEWLINE: &str = "\\ No newline at end of file";

fn render(hunks: &[Hunk], a: &[&str], b: &[&str], old_name: &str, new_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {old_name}");
    let _ = writeln!(out, "+++ {new_name}");

    for hunk in hunks {
        let _ = writeln!(out, "{}", hunk.header());
        let (mut i, mut j) = (hunk.old_start, hunk.new_start);
        for line in &hunk.lines {
            let (marker, unterminated) = match line {
                DiffLine::Context(_) => {
                    let raw = a[i];
                    i += 1;
                    j += 1;
                    (' ', !raw.ends_with('\n'))
                }
                DiffLine::Removed(_) => {
                    let raw = a[i];
                    i += 1;
                    ('-', !raw.ends_with('\n'))
                }
                DiffLine::Added(_) => {
                    let raw = b[j];
                    j += 1;
                    ('+', !raw.ends_with('\n'))
                }
            };
            let _ = writeln!(out, "{marker}{}", line.text());
            if unterminated {
                let _ = writeln!(out, "{NO_NEWLINE}");
            }
        }
    }

    // Drop the final newline so callers can print with `println!`.
    out.pop();
    out
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
