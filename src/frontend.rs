use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, IntersectionObserverEntry};
use yew::prelude::*;

use crate::contact::{
    ContactAction, ContactForm, ContactMessage, FormField, MessageDispatcher, SubmitOutcome,
    DELIVERED_NOTICE, SUBMIT_DELAY,
};
use crate::content::{self, Experience, Project, SkillCategory};
use crate::dom::{self, BrowserThemeStore, DocumentThemeSurface, ListenerHandle, ObserverHandle};
use crate::navigation::{hero_parallax_css, navbar_style, NavAction, NavigationState};
use crate::reveal::{
    parse_width, RevealChange, RevealTracker, SkillBar, REVEAL_CLASS, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTOR, REVEAL_THRESHOLD, SKILL_BAR_DELAY, SKILL_BAR_THRESHOLD,
};
use crate::sections::{self, SECTIONS};
use crate::theme::{self, Theme, ThemeSurface};

const SKILL_BAR_SELECTOR: &str = ".skill-progress";

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Acknowledges every message after a fixed delay without sending it
/// anywhere. Dropping the returned timeout cancels the acknowledgement.
struct SimulatedDispatcher {
    delay: Duration,
}

impl MessageDispatcher for SimulatedDispatcher {
    type Pending = Timeout;

    fn dispatch(&self, message: ContactMessage, on_delivered: Box<dyn FnOnce()>) -> Timeout {
        log::debug!(
            "simulating contact delivery: subject_len={} message_len={}",
            message.subject.len(),
            message.message.len()
        );
        Timeout::new(dom::millis(self.delay), move || on_delivered())
    }
}

fn scroll_to_section(id: &str) {
    if let Some(section) = sections::find(id) {
        if !dom::scroll_to_anchor(section.id) {
            log::debug!("section #{} is not rendered", section.id);
        }
    }
}

fn ripple_on_click() -> Callback<MouseEvent> {
    Callback::from(|event: MouseEvent| dom::spawn_ripple(&event))
}

#[derive(Properties, PartialEq)]
struct AnchorLinkProps {
    section: &'static str,
    on_select: Callback<&'static str>,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    ripple: bool,
    #[prop_or_default]
    children: Html,
}

#[function_component(AnchorLink)]
fn anchor_link(props: &AnchorLinkProps) -> Html {
    let href = sections::find(props.section)
        .map(|section| section.href())
        .unwrap_or_else(|| "#".to_string());

    let onclick = {
        let section = props.section;
        let ripple = props.ripple;
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if ripple {
                dom::spawn_ripple(&event);
            }
            on_select.emit(section);
        })
    };

    html! {
        <a class={props.class.clone()} href={href} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    theme: Theme,
    nav: NavigationState,
    on_toggle_theme: Callback<MouseEvent>,
    on_toggle_menu: Callback<MouseEvent>,
    on_select: Callback<&'static str>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let style = navbar_style(props.theme, props.nav.density()).to_css();
    let menu_open = props.nav.is_mobile_menu_open;

    html! {
        <nav class="navbar" style={style}>
            <div class="nav-container">
                <div class="nav-logo">
                    <AnchorLink section="home" on_select={props.on_select.clone()}>
                        {content::OWNER_NAME}
                    </AnchorLink>
                </div>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for SECTIONS.iter().map(|section| html! {
                        <li key={section.id}>
                            <AnchorLink
                                section={section.id}
                                class={classes!("nav-link", props.nav.is_active(section.id).then_some("active"))}
                                on_select={props.on_select.clone()}
                            >
                                {section.label}
                            </AnchorLink>
                        </li>
                    }) }
                </ul>
                <div class="theme-toggle">
                    <button
                        class="theme-toggle-btn"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.is_dark().to_string()}
                        onclick={props.on_toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                </div>
                <button
                    class={classes!("hamburger", menu_open.then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={props.on_toggle_menu.clone()}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    scroll_y: f64,
    on_select: Callback<&'static str>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"Hi, I'm "}<span class="highlight">{content::OWNER_NAME}</span>
                    </h1>
                    <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
                    <p class="hero-description">{content::HERO_DESCRIPTION}</p>
                    <div class="hero-buttons">
                        <AnchorLink section="projects" class={classes!("btn", "btn-primary")} ripple={true} on_select={props.on_select.clone()}>
                            {"View My Work"}
                        </AnchorLink>
                        <a href={content::RESUME_PATH} class="btn btn-secondary" download="" onclick={ripple_on_click()}>
                            {"Download Resume"}
                        </a>
                    </div>
                    <div class="hero-social">
                        <a href={content::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GitHub"}</a>
                        <a href={content::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                        <a href={format!("mailto:{}", content::EMAIL)} aria-label="Email">{"Email"}</a>
                    </div>
                </div>
                <div class="hero-image" style={hero_parallax_css(props.scroll_y)}>
                    <div class="hero-avatar">
                        <img src={content::PROFILE_IMAGE_PATH} alt={content::OWNER_NAME} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title" data-reveal-key="title-about">{"About Me"}</h2>
                <div class="about-content">
                    <div class="about-text" data-reveal-key="about-text">
                        { for content::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <div class="about-stats">
                        { for content::STATS.iter().enumerate().map(|(index, stat)| html! {
                            <div class="stat" data-reveal-key={format!("stat-{index}")}>
                                <h3>{stat.value}</h3>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn timeline_item(index: usize, item: &Experience) -> Html {
    html! {
        <div class="timeline-item" key={index} data-reveal-key={format!("timeline-{index}")}>
            <div class="timeline-marker"></div>
            <div class="timeline-content">
                <h3>{item.role}</h3>
                <h4>{item.organization}</h4>
                <span class="timeline-date">{item.period}</span>
                <ul>
                    { for item.highlights.iter().map(|highlight| html! {
                        <li>
                            {highlight.text}
                            if !highlight.details.is_empty() {
                                <ul class="timeline-details">
                                    { for highlight.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                                </ul>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <section id="experience" class="experience">
            <div class="container">
                <h2 class="section-title" data-reveal-key="title-experience">{"Experience"}</h2>
                <div class="timeline">
                    { for content::EXPERIENCE.iter().enumerate().map(|(index, item)| timeline_item(index, item)) }
                </div>
            </div>
        </section>
    }
}

fn project_card(index: usize, project: &Project) -> Html {
    html! {
        <div class="project-card" key={index} data-reveal-key={format!("project-{index}")}>
            <div class="project-image">
                <img src={project.image} alt={project.image_alt} loading="lazy" />
            </div>
            <div class="project-content">
                <h3>{project.title}</h3>
                if project.summary.len() == 1 {
                    <p>{project.summary[0]}</p>
                } else {
                    <ul class="project-summary">
                        { for project.summary.iter().map(|line| html! { <li>{*line}</li> }) }
                    </ul>
                }
                <div class="project-tech">
                    { for project.tech.iter().map(|tag| html! { <span class="tech-tag">{*tag}</span> }) }
                </div>
                <div class="project-links">
                    { for project.links.iter().map(|link| html! {
                        <a href={link.href} class="project-link" target="_blank" rel="noopener noreferrer">{link.label}</a>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title" data-reveal-key="title-projects">{"Featured Projects"}</h2>
                <div class="projects-grid">
                    { for content::PROJECTS.iter().enumerate().map(|(index, project)| project_card(index, project)) }
                </div>
            </div>
        </section>
    }
}

fn skill_category(index: usize, category: &SkillCategory) -> Html {
    html! {
        <div class="skill-category" key={index} data-reveal-key={format!("skills-{index}")}>
            <h3>{category.title}</h3>
            <div class="skill-items">
                { for category.skills.iter().enumerate().map(|(position, entry)| {
                    let width = SkillBar::new(entry.level).rendered_width();
                    html! {
                        <div class="skill-item">
                            <span class="skill-name">{entry.name}</span>
                            <div class="skill-bar">
                                <div
                                    class="skill-progress"
                                    style={format!("width: {width};")}
                                    data-width={width.clone()}
                                    data-skill-key={format!("{index}-{position}")}
                                ></div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title" data-reveal-key="title-skills">{"Skills & Technologies"}</h2>
                <div class="skills-grid">
                    { for content::SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| skill_category(index, category)) }
                </div>
            </div>
        </section>
    }
}

fn field_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
        .unwrap_or_default()
}

/// Single-line inputs: field, element id, input type, placeholder.
const FORM_INPUTS: [(FormField, &str, &str, &str); 3] = [
    (FormField::Name, "name", "text", "Your Name"),
    (FormField::Email, "email", "email", "Your Email"),
    (FormField::Subject, "subject", "text", "Subject"),
];

#[function_component(ContactFormPanel)]
fn contact_form_panel() -> Html {
    let form = use_reducer(ContactForm::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                // Unmounted mid-delivery: the acknowledgement must not fire.
                pending.borrow_mut().take();
            }
        });
    }

    let on_edit = |field: FormField| {
        let form = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            form.dispatch(ContactAction::Edit(field, field_value(&event)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let pending = pending.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            match form.prepare() {
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Rejected(error) => {
                    log::debug!("contact form rejected: {error}");
                    dom::notify(&error.to_string());
                }
                SubmitOutcome::Ready(message) => {
                    form.dispatch(ContactAction::BeginSending);
                    let completion = form.dispatcher();
                    let dispatcher = SimulatedDispatcher {
                        delay: SUBMIT_DELAY,
                    };
                    let task = dispatcher.dispatch(
                        message,
                        Box::new(move || {
                            dom::notify(DELIVERED_NOTICE);
                            completion.dispatch(ContactAction::Delivered);
                        }),
                    );
                    *pending.borrow_mut() = Some(task);
                }
            }
        })
    };

    let fields = &form.fields;

    html! {
        <form class="contact-form" data-reveal-key="contact-form" onsubmit={onsubmit} novalidate={true}>
            { for FORM_INPUTS.iter().map(|&(field, id, kind, placeholder)| html! {
                <div class="form-group" key={id}>
                    <input type={kind} id={id} name={id} placeholder={placeholder}
                        value={fields.get(field).to_string()} oninput={on_edit(field)} />
                </div>
            }) }
            <div class="form-group">
                <textarea id="message" name="message" placeholder="Your Message" rows="5"
                    value={fields.get(FormField::Message).to_string()} oninput={on_edit(FormField::Message)} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={form.phase.disabled()} onclick={ripple_on_click()}>
                {form.phase.label()}
            </button>
        </form>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title" data-reveal-key="title-contact">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info" data-reveal-key="contact-info">
                        <h3>{"Let's work together"}</h3>
                        <p>{content::CONTACT_INTRO}</p>
                        <div class="contact-details">
                            { for content::CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div class="contact-item">
                                    <a href={channel.href} target="_blank" rel="noopener noreferrer">{channel.label}</a>
                                </div>
                            }) }
                        </div>
                    </div>
                    <ContactFormPanel />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_select: Callback<&'static str>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <p>{content::COPYRIGHT}</p>
                    <div class="footer-links">
                        { for content::FOOTER_SECTIONS.iter().filter_map(|id| sections::find(id)).map(|section| html! {
                            <AnchorLink section={section.id} on_select={props.on_select.clone()}>
                                {section.label}
                            </AnchorLink>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

struct SkillBarSlot {
    bar: SkillBar,
    pending: Option<Timeout>,
}

type SkillBarSlots = Rc<RefCell<HashMap<String, SkillBarSlot>>>;

fn reveal_entry(tracker: &RefCell<RevealTracker>, entry: &IntersectionObserverEntry, observer: &web_sys::IntersectionObserver) {
    let target = entry.target();
    let Some(key) = target.get_attribute("data-reveal-key") else {
        return;
    };

    if tracker.borrow_mut().observe(&key, entry.is_intersecting()) == RevealChange::Revealed {
        let _ = target.class_list().add_1(REVEAL_CLASS);
        observer.unobserve(&target);
    }
}

fn animate_skill_bar(slots: &SkillBarSlots, entry: &IntersectionObserverEntry) {
    if !entry.is_intersecting() {
        return;
    }

    let target = entry.target();
    let Some(key) = target.get_attribute("data-skill-key") else {
        return;
    };
    let Some(level) = target.get_attribute("data-width").and_then(|width| parse_width(&width)) else {
        return;
    };

    let mut slots_ref = slots.borrow_mut();
    let slot = slots_ref.entry(key.clone()).or_insert_with(|| SkillBarSlot {
        bar: SkillBar::new(level),
        pending: None,
    });
    slot.bar.on_intersect();
    dom::set_width(&target, &slot.bar.rendered_width());

    let weak: Weak<RefCell<HashMap<String, SkillBarSlot>>> = Rc::downgrade(slots);
    // Replacing an earlier timeout cancels it, so a re-entry restarts the fill.
    slot.pending = Some(Timeout::new(dom::millis(SKILL_BAR_DELAY), move || {
        let Some(slots) = weak.upgrade() else {
            return;
        };
        if let Some(slot) = slots.borrow_mut().get_mut(&key) {
            slot.bar.on_delay_elapsed();
            dom::set_width(&target, &slot.bar.rendered_width());
        }
    }));
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| theme::initial_theme(&BrowserThemeStore));
    let nav = use_reducer(NavigationState::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            DocumentThemeSurface { animate: false }.apply(current);
            dom::mark_body_loaded();
            if let Some(section) = dom::location_hash().and_then(|hash| sections::from_fragment(&hash)) {
                scroll_to_section(section.id);
            }
            || ()
        });
    }

    {
        let nav = nav.dispatcher();
        use_effect_with((), move |_| {
            let track = move || {
                let scroll_y = dom::scroll_y();
                let position = sections::activation_position(scroll_y);
                let active = sections::active_section(position, &dom::measure_sections());
                nav.dispatch(NavAction::Scrolled { scroll_y, active });
            };
            track();
            let listener = ListenerHandle::on_window("scroll", move |_| track());
            move || drop(listener)
        });
    }

    use_effect_with((), |_| {
        let tracker = RefCell::new(RevealTracker::default());
        let reveal = ObserverHandle::observe_all(
            REVEAL_SELECTOR,
            REVEAL_THRESHOLD,
            Some(REVEAL_ROOT_MARGIN),
            move |entry, observer| reveal_entry(&tracker, entry, observer),
        );

        let slots: SkillBarSlots = Rc::new(RefCell::new(HashMap::new()));
        let skill_bars = ObserverHandle::observe_all(SKILL_BAR_SELECTOR, SKILL_BAR_THRESHOLD, None, move |entry, _| {
            animate_skill_bar(&slots, entry)
        });

        if reveal.is_none() || skill_bars.is_none() {
            log::warn!("intersection observers unavailable; content is shown without reveal effects");
        }

        move || {
            drop(reveal);
            drop(skill_bars);
        }
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle_theme(*theme, &BrowserThemeStore, &DocumentThemeSurface { animate: true });
            log::debug!("theme switched to {}", next.as_str());
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleMenu))
    };

    let on_select = {
        let nav = nav.dispatcher();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            nav.dispatch(NavAction::SelectSection(id.to_string()));
        })
    };

    html! {
        <div class="page">
            <Navbar
                theme={*theme}
                nav={(*nav).clone()}
                on_toggle_theme={on_toggle_theme}
                on_toggle_menu={on_toggle_menu}
                on_select={on_select.clone()}
            />
            <Hero scroll_y={nav.scroll_y} on_select={on_select.clone()} />
            <About />
            <ExperienceSection />
            <Projects />
            <Skills />
            <Contact />
            <Footer on_select={on_select} />
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
