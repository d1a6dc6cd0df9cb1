use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  HideHelp,
  None,
  OpenCurrentInBrowser,
  OpenDiscussion,
  PageDown,
  PageUp,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('c' | 'C') => Self::OpenDiscussion,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageUp
      }
      KeyCode::Char('o' | 'O') | KeyCode::Enter => Self::OpenCurrentInBrowser,
      KeyCode::Char('r' | 'R') => Self::Reload,
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => Self::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Self::SelectPrevious,
      KeyCode::PageDown => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Home => Self::SelectFirst,
      KeyCode::End => Self::SelectLast,
      _ => Self::None,
    }
  }
}
