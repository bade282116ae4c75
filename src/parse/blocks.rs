//! Splitting tool output into per-entity blocks.

use regex::{Matches, Regex};

/// Rule for recognizing where one block ends and the next begins.
#[derive(Debug, Clone, Copy)]
pub enum Boundary<'r> {
    /// A new block starts at every match; the matched text opens that block.
    Before(&'r Regex),
    /// Blocks are separated by a fixed token, which is dropped.
    Token(&'r str),
}

/// Split `text` into blocks at `boundary`.
///
/// The iterator is lazy and yields blocks in source order. Text ahead of the
/// first boundary comes out as a leading preamble block; callers filter it
/// like any other block that lacks the fields they need. Empty blocks are
/// never yielded, so empty input yields nothing.
///
/// # Example
///
/// ```
/// use lsishow::parse::blocks::{split_blocks, Boundary};
///
/// let text = "header\nHDD Device 0\nmodel a\nHDD Device 1\nmodel b\n";
/// let blocks: Vec<_> = split_blocks(text, Boundary::Token("HDD Device")).collect();
/// assert_eq!(blocks, vec!["header\n", " 0\nmodel a\n", " 1\nmodel b\n"]);
/// ```
pub fn split_blocks<'t, 'r>(text: &'t str, boundary: Boundary<'r>) -> Blocks<'t, 'r> {
    let cuts = match boundary {
        Boundary::Before(re) => Cuts::Regex(re.find_iter(text)),
        Boundary::Token(token) => Cuts::Token { token, from: 0 },
    };

    Blocks {
        text,
        cuts,
        pos: 0,
        done: text.is_empty(),
    }
}

enum Cuts<'t, 'r> {
    Regex(Matches<'r, 't>),
    Token { token: &'r str, from: usize },
}

impl Cuts<'_, '_> {
    /// Next boundary as (end of current block, start of next block).
    fn next_cut(&mut self, text: &str) -> Option<(usize, usize)> {
        match self {
            Cuts::Regex(matches) => matches.next().map(|m| (m.start(), m.start())),
            Cuts::Token { token, from } => {
                if token.is_empty() {
                    return None;
                }
                let start = *from + text[*from..].find(*token)?;
                let end = start + token.len();
                *from = end;
                Some((start, end))
            }
        }
    }
}

/// Lazy iterator over blocks. See [`split_blocks`].
pub struct Blocks<'t, 'r> {
    text: &'t str,
    cuts: Cuts<'t, 'r>,
    pos: usize,
    done: bool,
}

impl<'t> Iterator for Blocks<'t, '_> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        while !self.done {
            let block = match self.cuts.next_cut(self.text) {
                Some((end, next)) => {
                    let block = &self.text[self.pos..end];
                    self.pos = next;
                    block
                }
                None => {
                    self.done = true;
                    &self.text[self.pos..]
                }
            };

            if !block.is_empty() {
                return Some(block);
            }
        }
        None
    }
}
