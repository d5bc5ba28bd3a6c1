/// Text typed into the about section, one character per tick.
pub const ABOUT_TEXT: &str = "Hi, I\u{2019}m Kamal \u{2014} I build solutions by thinking deeply and executing cleanly.

I enjoy leading teams, breaking down complex problems, and turning ideas into real-world products that create impact.

I believe good work starts with the right questions and ends with thoughtful execution.

Research taught me how to ask better questions.
Engineering taught me how to answer them.

\u{2014} Kamal";

/// One unit of typed output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypedToken {
    Char(char),
    LineBreak,
}

/// Character-by-character reveal of a fixed string.
///
/// `start` only succeeds once; afterwards `next_token` yields the remaining
/// characters in order with newlines mapped to [`TypedToken::LineBreak`].
#[derive(Clone, Debug)]
pub struct TypedQuote {
    chars: Vec<char>,
    index: usize,
    started: bool,
}

impl TypedQuote {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            started: false,
        }
    }

    /// Arms the effect. Returns false if it was already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// True once every token has been handed out.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn next_token(&mut self) -> Option<TypedToken> {
        if !self.started {
            return None;
        }
        let c = *self.chars.get(self.index)?;
        self.index += 1;
        Some(match c {
            '\n' => TypedToken::LineBreak,
            c => TypedToken::Char(c),
        })
    }
}
