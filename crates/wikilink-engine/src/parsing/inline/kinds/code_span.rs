/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: `` `[[x]]` `` is code, never a wikilink. A span
/// opens with a run of backticks and closes at the next run of the same
/// length, so ``` ``a`b`` ``` is one span holding ``a`b``.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Length of the backtick run at the start of `s`.
    pub fn run_len(s: &str) -> usize {
        s.bytes().take_while(|&b| b == Self::TICK).count()
    }

    /// Offset in `s` of the first backtick run exactly `n` long.
    pub fn find_close(s: &str, n: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != Self::TICK {
                i += 1;
                continue;
            }
            let run = Self::run_len(&s[i..]);
            if run == n {
                return Some(i);
            }
            i += run;
        }
        None
    }
}
