//! Bilingual message sets.
//!
//! Two fixed sets of user-facing text (prompts, completion messages, the
//! farewell line) plus the speech voice used by the voice notification
//! channel. Which set is active is a configuration choice made once at
//! startup, not a runtime argument.

use super::SessionKind;

// ============================================================================
// Language
// ============================================================================

/// The language of all user-facing timer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English prompts and messages, "Daniel" voice.
    English,
    /// Chinese prompts and messages, "Ting-Ting" voice.
    Chinese,
}

impl Default for Language {
    fn default() -> Self {
        Language::Chinese
    }
}

impl Language {
    /// Returns the string representation of the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
        }
    }

    /// The line printed when a session of the given kind starts.
    pub fn prompt(&self, kind: SessionKind, minutes: u32) -> String {
        match (self, kind) {
            (Language::English, SessionKind::Work) => {
                format!("🍅 tomato {minutes} minutes. Ctrl+C to exit")
            }
            (Language::English, SessionKind::Break) => {
                format!("🛀 break {minutes} minutes. Ctrl+C to exit")
            }
            (Language::Chinese, SessionKind::Work) => {
                format!("🍅 开始 {minutes} 分钟的番茄钟. Ctrl+C 取消")
            }
            (Language::Chinese, SessionKind::Break) => {
                format!("🛀 休息 {minutes} 分钟. Ctrl+C 取消")
            }
        }
    }

    /// The completion message handed to the notifier when a session of the
    /// given kind runs to zero.
    pub fn completion(&self, kind: SessionKind) -> &'static str {
        match (self, kind) {
            (Language::English, SessionKind::Work) => "It is time to take a break",
            (Language::English, SessionKind::Break) => "It is time to work",
            (Language::Chinese, SessionKind::Work) => "恭喜你完成了一个番茄钟",
            (Language::Chinese, SessionKind::Break) => "休息时间结束，继续专注吧",
        }
    }

    /// The farewell line printed when the user cancels a running session.
    pub fn farewell(&self) -> &'static str {
        "👋 goodbye"
    }

    /// The speech-synthesis voice matching this language.
    pub fn voice(&self) -> &'static str {
        match self {
            Language::English => "Daniel",
            Language::Chinese => "Ting-Ting",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Language::default(), Language::Chinese);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Language::English.as_str(), "english");
        assert_eq!(Language::Chinese.as_str(), "chinese");
    }

    #[test]
    fn test_prompts_contain_minutes() {
        for language in [Language::English, Language::Chinese] {
            for kind in [SessionKind::Work, SessionKind::Break] {
                assert!(language.prompt(kind, 42).contains("42"));
            }
        }
    }

    #[test]
    fn test_work_and_break_prompts_are_distinct() {
        for language in [Language::English, Language::Chinese] {
            assert_ne!(
                language.prompt(SessionKind::Work, 25),
                language.prompt(SessionKind::Break, 25)
            );
        }
    }

    #[test]
    fn test_completion_messages_are_distinct_per_kind() {
        for language in [Language::English, Language::Chinese] {
            assert_ne!(
                language.completion(SessionKind::Work),
                language.completion(SessionKind::Break)
            );
        }
    }

    #[test]
    fn test_english_completion_messages() {
        assert_eq!(
            Language::English.completion(SessionKind::Work),
            "It is time to take a break"
        );
        assert_eq!(
            Language::English.completion(SessionKind::Break),
            "It is time to work"
        );
    }

    #[test]
    fn test_voice_per_language() {
        assert_eq!(Language::English.voice(), "Daniel");
        assert_eq!(Language::Chinese.voice(), "Ting-Ting");
    }

    #[test]
    fn test_farewell_is_language_independent() {
        assert_eq!(Language::English.farewell(), Language::Chinese.farewell());
    }
}
