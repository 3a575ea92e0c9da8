//! The application state machine.
//!
//! `App` owns every piece of mutable page state - scroll position, reveal
//! groups, the typewriter subscription, the contact form - and is mutated
//! only from the single frame loop: input events, then [`App::tick`],
//! then [`App::process_submit_events`], then a draw. Nothing here touches
//! ratatui; the render layer reads accessors.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use folio_config::AppConfig;
use folio_mailer::{ContactRequest, Mailer, MailerConfig};
use folio_types::content::{PortfolioContent, Project, ProjectFilter};
use folio_types::ui::{
    ContactForm, EffectTimer, RevealError, RevealGroup, ScrollState, SectionId, SubmitStatus,
    TypewriterError, TypewriterTiming, Typewriter, UiOptions, ease_out_cubic,
};

use crate::typewriter_loop::{TypewriterHandle, spawn_typewriter};
use crate::visibility::SectionStrip;

/// Shown after a successful send.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
/// Shown after any failed send; deliberately generic.
pub const FAILURE_MESSAGE: &str =
    "Oops! Something went wrong. Please try again or email me directly.";
/// Shown when submitting with an empty field.
pub const INCOMPLETE_MESSAGE: &str = "Please fill in every field before sending.";

const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(350);
const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Rows of scroll before the nav bar switches to its compact style.
const NAV_COMPACT_OFFSET: u16 = 3;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
    #[error(transparent)]
    Reveal(#[from] RevealError),
}

/// What keyboard input currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Browsing the page: scrolling, anchors, filters.
    #[default]
    Page,
    /// Editing the contact form.
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitOutcome {
    Sent,
    Failed,
}

#[derive(Debug)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

/// Number of revealable children in a section's group. The render layer
/// addresses children by the same positional order it draws them in.
#[must_use]
pub fn child_count(content: &PortfolioContent, section: SectionId) -> usize {
    match section {
        // greeting, name, role line, tagline, socials, scroll hint
        SectionId::Hero => 6,
        // header, tab bar, tab body, technologies, stats
        SectionId::About => 5,
        // header, filter bar, then one per project
        SectionId::Projects => 2 + content.projects.len(),
        // header, then one per category
        SectionId::Skills => 1 + content.skill_categories.len(),
        // header, subtitle, form, channels, footer
        SectionId::Contact => 5,
    }
}

pub struct App {
    content: PortfolioContent,
    ui_options: UiOptions,
    input_mode: InputMode,

    scroll: ScrollState,
    smooth_scroll: Option<ScrollAnimation>,
    strip: SectionStrip,
    reveals: [RevealGroup; SectionId::COUNT],

    // Typewriter: a running loop in normal mode, a plain phrase rotation
    // under reduced motion.
    typewriter: Option<(TypewriterHandle, watch::Receiver<String>)>,
    typed: String,
    phrases: Vec<folio_types::NonEmptyString>,
    timing: TypewriterTiming,
    role_index: usize,
    role_elapsed: Duration,

    blink_elapsed: Duration,

    filter: ProjectFilter,
    about_tab: usize,

    form: ContactForm,
    mailer: Option<Mailer>,
    submit_tx: mpsc::UnboundedSender<SubmitOutcome>,
    submit_rx: mpsc::UnboundedReceiver<SubmitOutcome>,

    last_frame: Instant,
    quit: bool,
}

impl App {
    /// Build the app from validated configuration. Must run inside a
    /// tokio runtime: the typewriter loop is spawned here.
    pub fn new(config: AppConfig) -> Result<Self, EngineError> {
        let AppConfig {
            content,
            phrases,
            timing,
            reveals: reveal_settings,
            mailer,
            ui,
        } = config;

        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases.into());
        }

        let mut reveals: Vec<RevealGroup> = Vec::with_capacity(SectionId::COUNT);
        for section in SectionId::ALL {
            let mut group = RevealGroup::new(
                child_count(&content, section),
                reveal_settings[section.index()],
            )?;
            if ui.reduced_motion {
                group.show_all();
            }
            reveals.push(group);
        }
        let reveals: [RevealGroup; SectionId::COUNT] = reveals
            .try_into()
            .unwrap_or_else(|_| unreachable!("one group per section"));

        let typewriter = if ui.reduced_motion {
            None
        } else {
            Some(spawn_typewriter(Typewriter::new(phrases.clone(), timing)?))
        };

        let mailer = mailer.map(|settings| {
            Mailer::new(MailerConfig {
                service_id: settings.service_id,
                template_id: settings.template_id,
                public_key: settings.public_key,
                to_name: settings.to_name,
                endpoint: settings.endpoint,
            })
        });

        let (submit_tx, submit_rx) = mpsc::unbounded_channel();

        let typed = if ui.reduced_motion {
            phrases[0].as_str().to_owned()
        } else {
            String::new()
        };

        Ok(Self {
            content,
            ui_options: ui,
            input_mode: InputMode::Page,
            scroll: ScrollState::default(),
            smooth_scroll: None,
            strip: SectionStrip::default(),
            reveals,
            typewriter,
            typed,
            phrases,
            timing,
            role_index: 0,
            role_elapsed: Duration::ZERO,
            blink_elapsed: Duration::ZERO,
            filter: ProjectFilter::default(),
            about_tab: 0,
            form: ContactForm::new(),
            mailer,
            submit_tx,
            submit_rx,
            last_frame: Instant::now(),
            quit: false,
        })
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance all animation state by the wall-clock delta since the
    /// previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.step(delta);
    }

    /// Advance all animation state by an explicit delta. `tick` is this
    /// plus wall-clock bookkeeping; tests drive `step` directly.
    pub fn step(&mut self, delta: Duration) {
        self.blink_elapsed = self.blink_elapsed.saturating_add(delta);

        if self.ui_options.reduced_motion {
            // Pin full phrases, rotating at the pause cadence.
            self.role_elapsed = self.role_elapsed.saturating_add(delta);
            while self.role_elapsed >= self.timing.pause() {
                self.role_elapsed -= self.timing.pause();
                self.role_index = (self.role_index + 1) % self.phrases.len();
            }
            self.typed = self.phrases[self.role_index].as_str().to_owned();
        } else if let Some((_, rx)) = &mut self.typewriter {
            self.typed = rx.borrow_and_update().clone();
        }

        self.advance_smooth_scroll(delta);
        self.scroll.set_max(self.strip.max_scroll());

        if !self.ui_options.reduced_motion {
            let offset = self.scroll.offset();
            for section in SectionId::ALL {
                let vis = self.strip.visibility(section, offset);
                let group = &mut self.reveals[section.index()];
                for child in 0..group.len() {
                    group.on_visibility_change(child, vis.is_intersecting, vis.ratio);
                }
                group.advance(delta);
            }
        }
    }

    /// The render layer reports its measured section heights and the
    /// viewport height before each draw.
    pub fn update_layout(&mut self, heights: [u16; SectionId::COUNT], viewport: u16) {
        self.strip.set_heights(heights);
        self.strip.set_viewport(viewport);
        self.scroll.set_max(self.strip.max_scroll());
    }

    fn advance_smooth_scroll(&mut self, delta: Duration) {
        let Some(animation) = &mut self.smooth_scroll else {
            return;
        };
        animation.timer.advance(delta);
        let t = ease_out_cubic(animation.timer.progress());
        let from = f32::from(animation.from);
        let to = f32::from(animation.to);
        let position = from + (to - from) * t;
        self.scroll.scroll_to(position.round() as u16);
        if animation.timer.is_finished() {
            self.scroll.scroll_to(animation.to);
            self.smooth_scroll = None;
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn scroll_by(&mut self, delta: i32) {
        self.smooth_scroll = None;
        self.scroll.scroll_by(delta);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.strip.viewport().saturating_sub(1).max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.strip.viewport().saturating_sub(1).max(1)));
    }

    /// Anchor jump. Smooth unless reduced motion is set.
    pub fn jump_to_section(&mut self, section: SectionId) {
        let target = self.strip.top_of(section).min(self.scroll.max());
        if self.ui_options.reduced_motion {
            self.smooth_scroll = None;
            self.scroll.scroll_to(target);
        } else {
            self.smooth_scroll = Some(ScrollAnimation {
                from: self.scroll.offset(),
                to: target,
                timer: EffectTimer::new(SMOOTH_SCROLL_DURATION),
            });
        }
    }

    pub fn next_section(&mut self) {
        self.jump_to_section(self.active_section().next());
    }

    pub fn previous_section(&mut self) {
        self.jump_to_section(self.active_section().previous());
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.strip.section_at(self.scroll.offset())
    }

    /// Compact nav style once the page has scrolled past the hero top.
    #[must_use]
    pub fn nav_compact(&self) -> bool {
        self.scroll.offset() > NAV_COMPACT_OFFSET
    }

    // ------------------------------------------------------------------
    // Section interactions
    // ------------------------------------------------------------------

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn next_about_tab(&mut self) {
        let tabs = self.content.about.tabs.len();
        if tabs > 0 {
            self.about_tab = (self.about_tab + 1) % tabs;
        }
    }

    #[must_use]
    pub fn about_tab(&self) -> usize {
        self.about_tab
    }

    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn filtered_projects(&self) -> impl Iterator<Item = &Project> {
        self.content
            .projects
            .iter()
            .filter(move |project| self.filter.matches(project))
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn enter_form(&mut self) {
        self.input_mode = InputMode::Form;
        self.jump_to_section(SectionId::Contact);
    }

    pub fn leave_form(&mut self) {
        self.input_mode = InputMode::Page;
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Kick off a submission. The send runs on a spawned task; the
    /// outcome arrives through [`App::process_submit_events`].
    pub fn submit_contact(&mut self) {
        use folio_types::ui::ContactField;

        if self.form.status().is_sending() {
            return;
        }
        if !self.form.is_complete() {
            self.form
                .set_status(SubmitStatus::Failed(INCOMPLETE_MESSAGE.to_string()));
            return;
        }
        let Some(mailer) = self.mailer.clone() else {
            tracing::warn!("No mailer configured; contact submission dropped");
            self.form
                .set_status(SubmitStatus::Failed(FAILURE_MESSAGE.to_string()));
            return;
        };
        let Ok(request) = ContactRequest::new(
            self.form.value(ContactField::Name),
            self.form.value(ContactField::Email),
            self.form.value(ContactField::Subject),
            self.form.value(ContactField::Message),
        ) else {
            self.form
                .set_status(SubmitStatus::Failed(INCOMPLETE_MESSAGE.to_string()));
            return;
        };

        self.form.set_status(SubmitStatus::Sending);
        let tx = self.submit_tx.clone();
        tokio::spawn(async move {
            let outcome = match mailer.send(&request).await {
                Ok(()) => SubmitOutcome::Sent,
                Err(err) => {
                    tracing::warn!(error = %err, "Contact submission failed");
                    SubmitOutcome::Failed
                }
            };
            let _ = tx.send(outcome);
        });
    }

    /// Drain submission outcomes delivered since the last frame.
    pub fn process_submit_events(&mut self) {
        while let Ok(outcome) = self.submit_rx.try_recv() {
            match outcome {
                SubmitOutcome::Sent => {
                    self.form.clear_fields();
                    self.form
                        .set_status(SubmitStatus::Sent(SUCCESS_MESSAGE.to_string()));
                }
                SubmitOutcome::Failed => {
                    self.form
                        .set_status(SubmitStatus::Failed(FAILURE_MESSAGE.to_string()));
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Render accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[must_use]
    pub fn reveal(&self, section: SectionId) -> &RevealGroup {
        &self.reveals[section.index()]
    }

    /// The typewriter's current text.
    #[must_use]
    pub fn typed_text(&self) -> &str {
        &self.typed
    }

    /// Blinking cursor next to the typed text.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        (self.blink_elapsed.as_millis() / CURSOR_BLINK_INTERVAL.as_millis()) % 2 == 0
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
