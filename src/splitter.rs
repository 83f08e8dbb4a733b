use memchr::Memchr;

/// Splits a source map string on `;`, yielding every segment including empty
/// ones: an empty segment is a real entry that inherits all its fields.
#[derive(Debug)]
pub(crate) struct EntrySplitter<'a> {
    string: &'a str,
    cur_start: usize,
    memchr: Memchr<'a>,
}

impl<'a> EntrySplitter<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            memchr: memchr::memchr_iter(b';', string.as_bytes()),
            cur_start: 0,
        }
    }
}

impl<'a> Iterator for EntrySplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let cur_end = match self.memchr.next() {
            None => {
                if self.cur_start > self.string.len() {
                    return None;
                }
                self.string.len()
            }
            Some(end) => end,
        };
        // SAFETY: cur_end never > self.string.len()
        let s = unsafe { self.string.get_unchecked(self.cur_start..cur_end) };
        self.cur_start = cur_end + 1;
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::EntrySplitter;

    #[test]
    fn test_splitter() {
        let text = "0:10:0:-;;20:3:1:-;:5;";

        let result = EntrySplitter::new(text)
            .map(|s| format!("[{}]", s))
            .collect::<String>();
        insta::assert_snapshot!(result, @"[0:10:0:-][][20:3:1:-][:5][]");
    }

    #[test]
    fn test_splitter_empty_input() {
        assert_eq!(EntrySplitter::new("").collect::<Vec<_>>(), vec![""]);
    }
}
