use super::*;

pub(crate) struct App {
  acquisition: Acquisition,
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let header = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        HEADER_TITLE,
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
    ]));

    frame.render_widget(header, layout[0]);

    let now = unix_now();

    let (list_items, selected_index, offset) = match self.state.load() {
      LoadState::Loading => (
        vec![Self::placeholder(LOADING_STORIES_STATUS, Color::DarkGray)],
        None,
        0,
      ),
      LoadState::Failed(message) => {
        (vec![Self::placeholder(message, Color::Red)], None, 0)
      }
      LoadState::Loaded(list) if list.is_empty() => (
        vec![Self::placeholder("No stories found.", Color::DarkGray)],
        None,
        0,
      ),
      LoadState::Loaded(list) => (
        list
          .entries()
          .iter()
          .map(|entry| Self::story_list_item(entry, now))
          .collect(),
        list.selected_index(),
        list.offset(),
      ),
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::LoadStories { request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let acquisition = self.acquisition;

        self.handle.spawn(async move {
          let _ = sender.send(Event::Stories {
            request_id,
            result: client.load_top_stories(acquisition).await,
          });
        });
      }
      Effect::FetchKarma { author } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          match client.fetch_karma(&author).await {
            Ok(karma) => {
              let _ = sender.send(Event::Karma { author, karma });
            }
            Err(error) => {
              tracing::debug!(%error, "Skipping karma enrichment");
            }
          }
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn execute_effects(&mut self, effects: Vec<Effect>) {
    for effect in effects {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn new(
    client: Client,
    acquisition: Acquisition,
    enrich: bool,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      acquisition,
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(enrich),
    }
  }

  fn placeholder(text: &str, color: Color) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(text.to_string(), Style::default().fg(color)),
    ]))
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      let effects = self.state.handle_event(event);
      self.execute_effects(effects);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let dispatch = self.state.dispatch_command(Command::Reload);

    self.execute_effects(dispatch.effects);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Command::from_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      if dispatch.should_exit {
        break;
      }

      self.execute_effects(dispatch.effects);
    }

    Ok(())
  }

  fn story_list_item(entry: &ListEntry, now: u64) -> ListItem<'static> {
    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          entry.title().to_string(),
          Style::default().fg(Color::White),
        ),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(entry.detail(now), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }
}
