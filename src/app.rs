use crate::event::{AppEvent, Event, EventHandler};
use crate::ui::TitleView;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use std::sync::Arc;
use title_animator::{
    AnimatorConfig, CursorSurface, CursorVisibility, MemorySurface, PageActivity, Scheduler,
    SchedulerHandle, TextSurface, TitleAnimator,
};

/// Terminal host for the title animation.
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: AnimatorConfig,
    pub animator: Arc<TitleAnimator<MemorySurface>>,
    /// Host side of the visibility notification.
    visibility: Box<dyn Fn(bool) + Send + Sync>,
    hidden: bool,
    scheduler: Option<SchedulerHandle>,
    pub events: EventHandler,
}

impl App {
    /// Builds the animator with the first title already shown, like the page's static markup.
    pub fn new(config: AnimatorConfig) -> Result<Self> {
        let activity = PageActivity::new();
        let surface = Arc::new(MemorySurface::new().with_opacity("1"));
        let animator = Arc::new(TitleAnimator::new(surface, &config, activity.clone())?);
        animator.surface().set_text(animator.current_title());

        Ok(Self {
            running: true,
            config,
            animator,
            visibility: Box::new(activity.notifier()),
            hidden: false,
            scheduler: None,
            events: EventHandler::new(),
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Page ready
        self.scheduler = Some(Scheduler::start(self.animator.clone(), &self.config));

        while self.running {
            let view = self.view();
            terminal.draw(|frame| frame.render_widget(&view, frame.area()))?;

            match self.events.next().await? {
                Event::Tick => {}
                Event::Crossterm(event) => {
                    if let ratatui::crossterm::event::Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_key_events(key_event);
                        }
                    }
                }
                Event::App(app_event) => match app_event {
                    AppEvent::ToggleVisibility => self.toggle_visibility(),
                    AppEvent::Quit => self.quit(),
                },
            }
        }

        if let Some(scheduler) = self.scheduler.take() {
            scheduler.shutdown().await;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Char('v') => self.events.send(AppEvent::ToggleVisibility),
            _ => {}
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.hidden = !self.hidden;
        (self.visibility)(self.hidden);
        tracing::info!("Page {}", if self.hidden { "hidden" } else { "visible" });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    fn view(&self) -> TitleView {
        let surface = self.animator.surface();
        TitleView {
            label: self.config.title_element_id.clone(),
            text: surface.text(),
            cursor: CursorVisibility::from_opacity(&surface.opacity()),
            active: self.animator.activity().is_active(),
            index: self.animator.current_index(),
            count: self.animator.titles().len(),
        }
    }
}
