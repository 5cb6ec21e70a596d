// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the landing page.
//!
//! The `App` struct wires together the page components (navbar, sections,
//! contact form, toasts) and translates their events into side effects such
//! as scrolling, notifications and focus changes. Scroll-driven state lives
//! here so navigation, reveals and the progress bar read the same offset.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, INITIAL_SECTION_DELAY_MS};
use crate::i18n::fluent::I18n;
use crate::infrastructure::SimulatedTransport;
use crate::throttle::Throttle;
use crate::ui::animation::Tween;
use crate::ui::contact::{ContactForm, SubmitButton};
use crate::ui::notifications::{NotificationKind, Presenter, Timing};
use crate::ui::page::{CardLift, PageLayout, Reveals, Section};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Id of the scrollable holding the page sections.
pub const PAGE_SCROLL_ID: &str = "page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    notifications: Presenter,
    contact: ContactForm,
    /// Section whose navbar link is highlighted.
    active_section: Option<Section>,
    /// Whether the collapsed navbar menu is open.
    menu_open: bool,
    /// Whether the navbar shows its scrolled look.
    navbar_scrolled: bool,
    scroll_offset: f32,
    viewport_height: f32,
    window_width: f32,
    /// Fraction of the page scrolled, drawn by the progress bar.
    progress: f32,
    nav_throttle: Throttle,
    progress_throttle: Throttle,
    resize_throttle: Throttle,
    reveals: Reveals,
    card_lift: CardLift,
    /// Eased scroll in flight, sampled on every tick.
    smooth_scroll: Option<Tween>,
    /// Set by Tab, cleared by any mouse press.
    keyboard_navigation: bool,
    /// Time of the latest update; animations are sampled at this instant.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_section", &self.active_section)
            .field("menu_open", &self.menu_open)
            .field("scroll_offset", &self.scroll_offset)
            .field("submitting", &self.contact.is_submitting())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, greets with a warning toast when it was
    /// unreadable, and schedules the start-up section jump.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = App::with_config(config, i18n);
        let mut tasks = Vec::new();

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            tasks.push(app.notify(text, NotificationKind::Error));
        }

        if let Some(raw) = flags.section.as_deref() {
            match Section::from_id(raw) {
                Some(section) => tasks.push(Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(INITIAL_SECTION_DELAY_MS)).await;
                    },
                    move |()| Message::ScrollTo(section),
                )),
                None => tracing::warn!(section = raw, "ignoring unknown start-up section"),
            }
        }

        tracing::info!("The Core BCI application loaded successfully");
        (app, Task::batch(tasks))
    }

    /// Builds the page state from an already loaded configuration.
    pub fn with_config(config: Config, i18n: I18n) -> Self {
        let now = Instant::now();
        let transport = Arc::new(SimulatedTransport::new(config.contact.simulated_delay()));
        let contact = ContactForm::new(
            transport,
            SubmitButton::new(i18n.tr("contact-submit")),
            i18n.tr("contact-sending"),
        );

        let mut app = Self {
            theme: AppTheme::new(config.general.theme_mode),
            notifications: Presenter::new(Timing::from_config(&config)),
            contact,
            active_section: Some(Section::Home),
            menu_open: false,
            navbar_scrolled: false,
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            progress: 0.0,
            nav_throttle: Throttle::new(config.scroll.nav_throttle()),
            progress_throttle: Throttle::new(config.scroll.progress_throttle()),
            resize_throttle: Throttle::new(config.scroll.resize_throttle()),
            reveals: Reveals::default(),
            card_lift: CardLift::default(),
            smooth_scroll: None,
            keyboard_navigation: false,
            now,
            i18n,
            config,
        };

        // Whatever is visible before the first scroll fades in right away
        let layout = app.layout();
        app.reveals
            .observe(&layout, app.scroll_offset, app.viewport_height, now);
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.is_animating(Instant::now()));

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Page(message) => self.handle_page_message(message),
            Message::Notification(message) => self
                .notifications
                .handle_message(message)
                .map(Message::Notification),
            Message::Scrolled(viewport) => self.handle_scrolled(viewport),
            Message::WindowResized(size) => self.handle_resized(size),
            Message::Tick(now) => self.handle_tick(now),
            Message::ScrollTo(section) => self.scroll_to(section),
            Message::SocialOpened(platform) => {
                tracing::info!("Would open: {}", platform.url());
                Task::none()
            }
            Message::FocusMoved { backwards } => self.move_focus(backwards),
            Message::Escape => {
                self.menu_open = false;
                Task::none()
            }
            Message::MousePressed { captured } => {
                self.keyboard_navigation = false;
                // Presses consumed by a widget (the toggle, a link) are not "outside"
                if !captured {
                    self.menu_open = false;
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            layout: self.layout(),
            notifications: &self.notifications,
            contact: &self.contact,
            reveals: &self.reveals,
            card_lift: &self.card_lift,
            active_section: self.active_section,
            menu_open: self.menu_open,
            navbar_scrolled: self.navbar_scrolled,
            progress: self.progress,
            window_width: self.window_width,
            keyboard_navigation: self.keyboard_navigation,
            now: self.now,
        })
    }

    /// Geometry for the current window width.
    fn layout(&self) -> PageLayout {
        PageLayout::new(self.is_compact())
    }

    fn is_compact(&self) -> bool {
        self.window_width <= self.config.scroll.mobile_breakpoint()
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.smooth_scroll.is_some()
            || self.notifications.is_animating(now)
            || self.reveals.is_animating(now)
            || self.card_lift.is_animating(now)
    }

    fn notify(&mut self, text: String, kind: NotificationKind) -> Task<Message> {
        self.notifications
            .notify(text, kind)
            .map(Message::Notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::contact;
    use crate::ui::navbar;
    use crate::ui::page::{sections, Card, Target};
    use crate::ui::social::Platform;
    use iced::Size;

    fn app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        App::with_config(config, i18n)
    }

    fn toast_text(app: &App) -> Option<&str> {
        app.notifications.current().map(|n| n.message())
    }

    #[test]
    fn starts_on_home_with_hero_revealed() {
        let app = app();
        assert_eq!(app.active_section, Some(Section::Home));
        assert!(app.reveals.is_revealed(Target::HeroContent));
        assert!(!app.reveals.is_revealed(Target::ContactContent));
    }

    #[test]
    fn nav_link_marks_section_and_starts_scroll() {
        let mut app = app();
        app.menu_open = true;

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Services)));

        assert_eq!(app.active_section, Some(Section::Services));
        assert!(!app.menu_open);
        let tween = app.smooth_scroll.expect("scroll should be in flight");
        assert_eq!(tween.target(), app.layout().scroll_target(Section::Services));
    }

    #[test]
    fn hero_button_scrolls_without_touching_menu_or_active_link() {
        let mut app = app();
        app.menu_open = true;

        let _ = app.update(Message::Page(sections::Message::Navigate(Section::Services)));

        assert!(app.menu_open);
        assert_eq!(app.active_section, Some(Section::Home));
        let tween = app.smooth_scroll.expect("scroll should be in flight");
        assert_eq!(tween.target(), app.layout().scroll_target(Section::Services));
    }

    #[test]
    fn start_up_section_only_scrolls() {
        let mut app = app();

        let _ = app.update(Message::ScrollTo(Section::About));

        assert_eq!(app.active_section, Some(Section::Home));
        assert!(app.smooth_scroll.is_some());
    }

    #[test]
    fn smooth_scroll_ends_after_its_duration() {
        let mut app = app();
        let _ = app.update(Message::ScrollTo(Section::About));
        let start = app.now;

        let _ = app.update(Message::Tick(start + Duration::from_secs(1)));

        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = app();
        app.menu_open = true;
        let _ = app.update(Message::Escape);
        assert!(!app.menu_open);
    }

    #[test]
    fn captured_press_keeps_menu_but_ends_keyboard_mode() {
        let mut app = app();
        app.menu_open = true;
        app.keyboard_navigation = true;

        let _ = app.update(Message::MousePressed { captured: true });
        assert!(app.menu_open);
        assert!(!app.keyboard_navigation);

        let _ = app.update(Message::MousePressed { captured: false });
        assert!(!app.menu_open);
    }

    #[test]
    fn tab_enables_keyboard_navigation() {
        let mut app = app();
        let _ = app.update(Message::FocusMoved { backwards: false });
        assert!(app.keyboard_navigation);
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        assert!(app.is_compact());
        app.menu_open = true;

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 800.0)));

        assert!(!app.is_compact());
        assert!(!app.menu_open);
    }

    #[test]
    fn resize_burst_across_breakpoint_closes_the_menu() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(700.0, 800.0)));
        app.menu_open = true;

        // Same throttle window as the previous resize
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 800.0)));
        assert!(!app.is_compact());
        assert!(!app.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(700.0, 800.0)));
        assert!(!app.menu_open);
    }

    #[test]
    fn social_click_announces_platform() {
        let mut app = app();
        let _ = app.update(Message::Page(sections::Message::SocialClicked(
            Platform::LinkedIn,
        )));
        assert_eq!(toast_text(&app), Some("Opening Linkedin page..."));
    }

    #[test]
    fn empty_submit_shows_first_validation_error() {
        let mut app = app();
        let _ = app.update(Message::Page(sections::Message::Contact(
            contact::Message::Submit,
        )));

        assert_eq!(toast_text(&app), Some("Please enter your name."));
        assert_eq!(
            app.notifications.current().map(|n| n.kind()),
            Some(NotificationKind::Error)
        );
        assert!(!app.contact.is_submitting());
    }

    #[test]
    fn successful_delivery_shows_thanks() {
        let mut app = app();
        let page = |message| Message::Page(sections::Message::Contact(message));
        for message in [
            contact::Message::NameChanged("Ada".into()),
            contact::Message::EmailChanged("ada@example.com".into()),
            contact::Message::SubjectChanged("Hello".into()),
            contact::Message::MessageChanged("Hello there, team!".into()),
            contact::Message::Submit,
        ] {
            let _ = app.update(page(message));
        }
        assert!(app.contact.is_submitting());
        assert!(toast_text(&app).is_none());

        let _ = app.update(page(contact::Message::Submitted(Ok(()))));

        assert!(!app.contact.is_submitting());
        assert_eq!(app.contact.values(), ["", "", "", ""]);
        assert_eq!(
            toast_text(&app),
            Some("Thank you for your message! We'll get back to you soon.")
        );
    }

    #[test]
    fn hovering_a_card_lifts_it() {
        let mut app = app();
        let card = Card::Service(0);
        let _ = app.update(Message::Page(sections::Message::CardHovered(card, true)));
        assert!(app.card_lift.is_hovered(card));
        assert!(app.is_animating(app.now));
    }
}
