use super::*;

pub(crate) struct State {
  enrich: bool,
  help: HelpView,
  list_height: usize,
  load: LoadState,
  message: String,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_request: Option<u64>,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn current_entry(&self) -> Option<&ListEntry> {
    self.load.list().and_then(StoryList::selected_entry)
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::Reload => self.reload(),
      Command::SelectNext => self.select_by(1),
      Command::SelectPrevious => self.select_by(-1),
      Command::PageDown => self.select_by(self.page_jump()),
      Command::PageUp => self.select_by(-self.page_jump()),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::OpenDiscussion => self.open_discussion(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  /// Applies a finished background task and returns the effects it triggers.
  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Stories { request_id, result } => {
        if self.pending_request != Some(request_id) {
          tracing::debug!(request_id, "Dropping superseded story load");
          return Vec::new();
        }

        self.pending_request = None;

        match result {
          Ok(stories) => {
            let list = StoryList::new(stories);

            tracing::info!(stories = list.len(), "Loaded top stories");

            if self.enrich {
              self.pending_effects.extend(
                list
                  .authors()
                  .into_iter()
                  .map(|author| Effect::FetchKarma { author }),
              );
            }

            self.load = LoadState::Loaded(list);

            self.set_status(LIST_STATUS.into());
          }
          Err(error) => {
            tracing::warn!(
              %error,
              transport = error.is_transport(),
              schema = error.is_schema(),
              "Could not load top stories"
            );

            self.load =
              LoadState::Failed(format!("Could not load top stories: {error}"));

            self.set_status(FAILED_STATUS.into());
          }
        }
      }
      Event::Karma { author, karma } => {
        if let Some(list) = self.load.list_mut() {
          let updated = list.set_karma(&author, karma);
          tracing::debug!(author, karma, updated, "Applied karma");
        }
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn load(&self) -> &LoadState {
    &self.load
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(enrich: bool) -> Self {
    Self {
      enrich,
      help: HelpView::default(),
      list_height: 0,
      load: LoadState::Loading,
      message: LOADING_STORIES_STATUS.into(),
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_request: None,
      transient_message: None,
    }
  }

  fn open_current_in_browser(&mut self) {
    if let Some(entry) = self.current_entry() {
      let url = entry.url().to_string();
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn open_discussion(&mut self) {
    if let Some(entry) = self.current_entry() {
      let url = entry.discussion_url();
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_jump(&self) -> isize {
    isize::try_from(self.list_height.saturating_sub(1).max(1))
      .unwrap_or(isize::MAX)
  }

  fn reload(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_request = Some(request_id);

    self.load = LoadState::Loading;

    self.set_status(LOADING_STORIES_STATUS.into());

    self.pending_effects.push(Effect::LoadStories { request_id });
  }

  fn select_by(&mut self, delta: isize) {
    if let Some(list) = self.load.list_mut() {
      list.select_by(delta);
    }
  }

  fn select_index(&mut self, index: usize) {
    if let Some(list) = self.load.list_mut() {
      list.set_selected(index);
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if let Some(list) = self.load.list_mut() {
      list.set_offset(offset);
    }
  }

  fn set_status(&mut self, status: String) {
    self.transient_message = None;

    if !self.help.is_visible() {
      self.message = status;
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original, Instant::now()));

    self.message = message;
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired_at(Instant::now()) {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn loaded_state(enrich: bool) -> State {
    let mut state = State::new(enrich);

    let request_id = start_load(&mut state);

    state.handle_event(Event::Stories {
      request_id,
      result: Ok(stories()),
    });

    state
  }

  fn start_load(state: &mut State) -> u64 {
    let dispatch = state.dispatch_command(Command::Reload);

    match dispatch.effects.as_slice() {
      [Effect::LoadStories { request_id }] => *request_id,
      effects => panic!("unexpected effects: {effects:?}"),
    }
  }

  fn stories() -> Vec<Story> {
    [(1, "alice", 3), (2, "bob", 5), (3, "alice", 8)]
      .into_iter()
      .map(|(id, by, score)| Story {
        by: by.to_string(),
        id,
        score,
        time: 0,
        title: format!("Story {id}"),
        url: format!("https://example.com/{id}"),
      })
      .collect()
  }

  #[test]
  fn new_state_is_loading() {
    let state = State::new(true);

    assert!(matches!(state.load(), LoadState::Loading));
    assert_eq!(state.message(), LOADING_STORIES_STATUS);
  }

  #[test]
  fn loaded_stories_queue_one_karma_fetch_per_author() {
    let mut state = State::new(true);

    let request_id = start_load(&mut state);

    let effects = state.handle_event(Event::Stories {
      request_id,
      result: Ok(stories()),
    });

    assert_eq!(
      effects,
      vec![
        Effect::FetchKarma {
          author: "alice".to_string()
        },
        Effect::FetchKarma {
          author: "bob".to_string()
        },
      ]
    );

    assert_eq!(state.load().list().map(StoryList::len), Some(3));
    assert_eq!(state.message(), LIST_STATUS);
  }

  #[test]
  fn disabled_enrichment_queues_nothing() {
    let mut state = State::new(false);

    let request_id = start_load(&mut state);

    let effects = state.handle_event(Event::Stories {
      request_id,
      result: Ok(stories()),
    });

    assert!(effects.is_empty());
  }

  #[test]
  fn superseded_load_is_ignored() {
    let mut state = State::new(true);

    let stale = start_load(&mut state);
    let current = start_load(&mut state);

    assert_ne!(stale, current);

    let effects = state.handle_event(Event::Stories {
      request_id: stale,
      result: Ok(stories()),
    });

    assert!(effects.is_empty());
    assert!(matches!(state.load(), LoadState::Loading));
  }

  #[test]
  fn failed_load_shows_error() {
    let mut state = State::new(true);

    let request_id = start_load(&mut state);

    state.handle_event(Event::Stories {
      request_id,
      result: Err(Error::Status {
        status: StatusCode::BAD_GATEWAY,
        url: "https://example.com/topstories.json".to_string(),
      }),
    });

    match state.load() {
      LoadState::Failed(message) => {
        assert!(message.starts_with("Could not load top stories: "));
        assert!(message.contains("502"));
      }
      _ => panic!("expected failed state"),
    }

    assert_eq!(state.message(), FAILED_STATUS);
  }

  #[test]
  fn karma_updates_only_that_author() {
    let mut state = loaded_state(true);

    let effects = state.handle_event(Event::Karma {
      author: "bob".to_string(),
      karma: 77,
    });

    assert!(effects.is_empty());

    let karma = state
      .load()
      .list()
      .unwrap()
      .entries()
      .iter()
      .map(|entry| entry.karma)
      .collect::<Vec<_>>();

    assert_eq!(karma, vec![None, Some(77), None]);
  }

  #[test]
  fn karma_while_loading_is_dropped() {
    let mut state = State::new(true);

    start_load(&mut state);

    state.handle_event(Event::Karma {
      author: "bob".to_string(),
      karma: 77,
    });

    assert!(matches!(state.load(), LoadState::Loading));
  }

  #[test]
  fn open_commands_emit_urls_for_selected_entry() {
    let mut state = loaded_state(false);

    state.dispatch_command(Command::SelectNext);

    let dispatch = state.dispatch_command(Command::OpenCurrentInBrowser);

    assert_eq!(
      dispatch.effects,
      vec![Effect::OpenUrl {
        url: "https://example.com/2".to_string()
      }]
    );

    let dispatch = state.dispatch_command(Command::OpenDiscussion);

    assert_eq!(
      dispatch.effects,
      vec![Effect::OpenUrl {
        url: "https://news.ycombinator.com/item?id=2".to_string()
      }]
    );
  }

  #[test]
  fn open_while_loading_does_nothing() {
    let mut state = State::new(true);

    let dispatch = state.dispatch_command(Command::OpenCurrentInBrowser);

    assert!(dispatch.effects.is_empty());
    assert!(!dispatch.should_exit);
  }

  #[test]
  fn select_last_clamps_to_final_entry() {
    let mut state = loaded_state(false);

    state.dispatch_command(Command::SelectLast);

    assert_eq!(
      state.load().list().and_then(StoryList::selected_index),
      Some(2)
    );
  }

  #[test]
  fn quit_requests_exit() {
    let mut state = State::new(true);

    assert!(state.dispatch_command(Command::Quit).should_exit);
  }
}
