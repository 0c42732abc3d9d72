/// A message the bot sends back to a chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Plain text, leaving any visible keyboard untouched
    Text(String),
    /// Text with a reply keyboard offering `options`
    Keyboard { text: String, options: Vec<String> },
    /// Text that also hides the reply keyboard
    RemoveKeyboard(String),
    /// Encoded image with a caption
    Photo { bytes: Vec<u8>, caption: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn keyboard<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keyboard {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remove_keyboard(text: impl Into<String>) -> Self {
        Self::RemoveKeyboard(text.into())
    }
}
