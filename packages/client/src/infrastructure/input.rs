//! In-memory text input.

use std::sync::Mutex;

use crate::domain::InputField;

/// A text field holding the value last typed by the user
#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of the field
    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = value.into();
    }
}

impl InputField for TextInput {
    fn value(&self) -> String {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        // テスト項目: 値の設定とクリアが反映される
        // given (前提条件):
        let input = TextInput::new();

        // when (操作):
        input.set("what is x?");
        let before = input.value();
        input.clear();

        // then (期待する結果):
        assert_eq!(before, "what is x?");
        assert_eq!(input.value(), "");
    }
}
