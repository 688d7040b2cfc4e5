#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a line looks like when it starts with a fence run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence run (at least 3).
    pub len: usize,
    /// Info string after the run, trimmed. Empty for a bare fence.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Recognizes a fence opener or closer. Leading whitespace is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_start();
        let kind = match t.chars().next()? {
            '`' => FenceKind::Backticks,
            '~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = t.chars().take_while(|&c| c == kind.char()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A backtick info string may not itself contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// The language tag is the first word of the info string.
    pub fn language(sig: &FenceSig) -> Option<String> {
        sig.info.split_whitespace().next().map(str::to_string)
    }

    /// A closer uses the same character, is at least as long as the opener
    /// and carries no info string.
    pub fn closes(kind: FenceKind, open_len: usize, sig: Option<&FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == kind && s.len >= open_len && s.info.is_empty())
    }

    /// Fence of `kind` long enough that no line of `content` can close it.
    pub fn fence_for(kind: FenceKind, content: &str) -> String {
        let longest = content
            .lines()
            .filter_map(|l| Self::sig(l).filter(|s| s.kind == kind))
            .map(|s| s.len)
            .max()
            .unwrap_or(0);
        kind.char().to_string().repeat(Self::MIN_LEN.max(longest + 1))
    }
}
