/// Splits text into sentences on terminal punctuation and line breaks.
///
/// Terminators inside brackets (quoted speech such as `「行く。」`) do not end
/// a sentence. A run of terminators (`！？`) stays with the sentence it closes,
/// and an ASCII `.` only splits when followed by whitespace or the end of text.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
    brackets: Vec<(char, char)>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self {
            terminators: vec!['。', '．', '！', '？', '!', '?', '.'],
            brackets: vec![
                ('「', '」'),
                ('『', '』'),
                ('（', '）'),
                ('(', ')'),
                ('【', '】'),
            ],
        }
    }
}

impl SentenceSplitter {
    pub fn new(terminators: Vec<char>, brackets: Vec<(char, char)>) -> Self {
        Self {
            terminators,
            brackets,
        }
    }

    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut push = |sentence: &'a str| {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        };

        let mut start = 0;
        let mut depth = 0usize;
        let mut chars = text.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            if ch == '\n' || ch == '\r' {
                push(&text[start..i]);
                start = i + ch.len_utf8();
                // An unbalanced bracket must not swallow the rest of the document.
                depth = 0;
                continue;
            }

            if self.brackets.iter().any(|&(open, _)| open == ch) {
                depth += 1;
                continue;
            }
            if self.brackets.iter().any(|&(_, close)| close == ch) {
                depth = depth.saturating_sub(1);
                continue;
            }

            if depth > 0 || !self.terminators.contains(&ch) {
                continue;
            }
            if ch == '.' && chars.peek().is_some_and(|&(_, next)| !next.is_whitespace()) {
                continue;
            }

            let mut end = i + ch.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !self.terminators.contains(&next) {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
            push(&text[start..end]);
            start = end;
        }
        push(&text[start..]);

        sentences
    }
}
