use crate::error::PortfolioError;
use folio_audio::synth::Voice;
use folio_audio::{AudioBackend, AudioController};
use folio_contact::ContactForm;
use folio_domain::constants::WORKS;
use folio_effects::{
    EasterEgg, KeySequence, ParticleField, RemoveOverlay, RestoreWidth, SkillReveal, ThemeController,
    Typewriter, TypingStep, parallax,
};
use folio_gallery::{FilterController, FilterStep};
use folio_kernel::content::ContentGuard;
use folio_kernel::prelude::*;
use folio_navigation::{NavigationController, RevealPage, Transition};
use folio_showcase::Showcase;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

/// Every kind of deferred work a session can hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    RevealPage(RevealPage),
    Filter(FilterStep),
    Typing(TypingStep),
    /// Start listening for the about section coming into view.
    ArmSkillReveal,
    RestoreSkill(RestoreWidth),
    RemoveOverlay(RemoveOverlay),
    Synth(Voice),
}

/// One visitor session: the page, its audio and every controller, owned in one place.
#[derive(Debug)]
pub struct Portfolio<D, B> {
    doc: D,
    config: SiteConfig,
    rng: SmallRng,
    showcase: Showcase,
    navigation: NavigationController,
    gallery: FilterController,
    audio: AudioController<B>,
    particles: ParticleField,
    keys: KeySequence,
    easter_egg: EasterEgg,
    typewriter: Typewriter,
    skills: SkillReveal,
    theme: ThemeController,
    contact: ContactForm,
}

impl<D: Document, B: AudioBackend> Portfolio<D, B> {
    /// Validates the content and wires every slice to the page.
    ///
    /// `seed` drives all decorative randomness.
    ///
    /// # Errors
    /// * [`PortfolioError::Content`] if the content store is inconsistent.
    /// * [`PortfolioError::Navigation`] if the page has no usable sections.
    pub fn new(doc: D, backend: B, config: SiteConfig, seed: u64) -> Result<Self, PortfolioError> {
        ContentGuard::verify(&config.content)?;
        let navigation = NavigationController::new(&doc, config.navigation.clone())?;

        let effects = &config.effects;
        let session = Self {
            showcase: Showcase::new(config.content.clone(), config.theme.title_prefix.clone()),
            gallery: FilterController::new(config.gallery.clone()),
            audio: AudioController::new(backend, &config.audio),
            particles: ParticleField::new(effects),
            keys: KeySequence::new(effects.key_sequence.clone()),
            easter_egg: EasterEgg::new(effects),
            typewriter: Typewriter::new(&config.content.profile.name, effects),
            skills: SkillReveal::new(effects),
            theme: ThemeController::new(config.theme.initial),
            contact: ContactForm::new(),
            rng: SmallRng::seed_from_u64(seed),
            navigation,
            config,
            doc,
        };

        info!(
            projects = session.config.content.projects.len(),
            pages = session.navigation.sections().len(),
            "Portfolio session created"
        );
        Ok(session)
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.doc
    }

    pub const fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn audio(&self) -> &AudioController<B> {
        &self.audio
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub const fn gallery(&self) -> &FilterController {
        &self.gallery
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeController {
        &self.theme
    }

    #[must_use]
    pub const fn easter_egg(&self) -> &EasterEgg {
        &self.easter_egg
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Whether the host should keep reporting the visibility of the about section.
    #[must_use]
    pub const fn skill_reveal_observing(&self) -> bool {
        self.skills.is_observing()
    }

    /// Renders the content and brings every slice to its initial state.
    pub fn start(&mut self, year: i32) -> Vec<Deferred<FollowUp>> {
        let mut follow_ups = Vec::new();

        self.theme.apply(&mut self.doc);
        self.showcase.render_all(&mut self.doc, year);
        self.particles.rebuild(&mut self.doc, &mut self.rng);

        follow_ups.push(self.navigation.start(&mut self.doc).map(FollowUp::RevealPage));
        follow_ups.extend(self.audio.start(&mut self.doc).into_iter().map(|d| d.map(FollowUp::Synth)));
        follow_ups.extend(self.typewriter.start(&mut self.doc).map(|d| d.map(FollowUp::Typing)));
        follow_ups.push(Deferred::after_ms(self.config.effects.skill_reveal_start_ms, FollowUp::ArmSkillReveal));

        info!(page = self.navigation.current_page(), "Portfolio started");
        follow_ups
    }

    /// Runs a follow-up that has come due.
    pub fn complete(&mut self, action: FollowUp) -> Vec<Deferred<FollowUp>> {
        match action {
            FollowUp::RevealPage(reveal) => {
                self.navigation.reveal(&mut self.doc, &reveal);
                Vec::new()
            }
            FollowUp::Filter(step) => {
                self.gallery.settle(&mut self.doc, &step);
                Vec::new()
            }
            FollowUp::Typing(step) => self
                .typewriter
                .step(&mut self.doc, step)
                .map(|d| d.map(FollowUp::Typing))
                .into_iter()
                .collect(),
            FollowUp::ArmSkillReveal => {
                self.skills.arm();
                Vec::new()
            }
            FollowUp::RestoreSkill(restore) => {
                SkillReveal::restore(&mut self.doc, &restore);
                Vec::new()
            }
            FollowUp::RemoveOverlay(remove) => {
                EasterEgg::dismiss(&mut self.doc, &remove);
                Vec::new()
            }
            FollowUp::Synth(voice) => vec![self.audio.synth_voice(voice, &mut self.rng).map(FollowUp::Synth)],
        }
    }

    /// Completes follow-ups immediately, including the ones they schedule, until nothing is
    /// left or `max_steps` actions have run. Returns the number of actions run.
    ///
    /// Self-rescheduling follow-ups (the synth) never drain, hence the bound.
    pub fn settle(&mut self, mut pending: Vec<Deferred<FollowUp>>, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && !pending.is_empty() {
            let next = pending.remove(0);
            pending.extend(self.complete(next.action));
            steps += 1;
        }
        steps
    }

    // --- Navigation ---

    pub fn on_nav_click(&mut self, page: &str) -> Vec<Deferred<FollowUp>> {
        let transition = self.navigation.navigate_to(&mut self.doc, page);
        self.transition(transition)
    }

    pub fn on_hash_change(&mut self) -> Vec<Deferred<FollowUp>> {
        let transition = self.navigation.on_hash_change(&mut self.doc);
        self.transition(transition)
    }

    /// The hero call to action: jumps to the works section.
    pub fn on_explore(&mut self) -> Vec<Deferred<FollowUp>> {
        let follow_ups = self.on_nav_click(WORKS);
        self.doc.scroll_into_view(WORKS, ScrollBehavior::Smooth);
        follow_ups
    }

    fn transition(&mut self, transition: Option<Transition>) -> Vec<Deferred<FollowUp>> {
        let Some(transition) = transition else {
            return Vec::new();
        };
        self.audio.play(transition.cue);
        vec![transition.reveal.map(FollowUp::RevealPage)]
    }

    // --- Gallery ---

    pub fn on_filter_click(&mut self, category: &str) -> Vec<Deferred<FollowUp>> {
        let Some(pass) = self.gallery.filter_by_category(&mut self.doc, category) else {
            return Vec::new();
        };
        self.audio.play(pass.cue);
        pass.steps.into_iter().map(|d| d.map(FollowUp::Filter)).collect()
    }

    // --- Audio ---

    /// Any click on the page. The first one unmutes the audio.
    pub fn on_document_click(&mut self) {
        self.audio.unmute_on_interaction();
    }

    /// Pointer entering an interactive element.
    pub fn on_hover(&mut self) {
        self.audio.play_hover_cue();
    }

    /// Click on an interactive element without behaviour of its own (social links, cards).
    pub fn on_interactive_click(&mut self) {
        self.audio.play_click_cue();
    }

    pub fn on_ambient_toggle(&mut self) -> bool {
        self.audio.toggle_ambient(&mut self.doc)
    }

    pub fn on_sfx_toggle(&mut self) -> bool {
        self.audio.toggle_sfx(&mut self.doc)
    }

    /// Volume slider input, in percent.
    pub fn on_volume_input(&mut self, raw: &str) -> Option<f32> {
        self.audio.set_volume_percent(&mut self.doc, raw)
    }

    pub fn on_play_music(&mut self) -> bool {
        self.audio.play_music(&mut self.doc)
    }

    // --- Effects ---

    pub fn on_key(&mut self, key: &str) -> Vec<Deferred<FollowUp>> {
        if !self.keys.push(key) {
            return Vec::new();
        }
        let pass = self.easter_egg.activate(&mut self.doc, &mut self.rng);
        self.audio.play(pass.cue);
        vec![pass.removal.map(FollowUp::RemoveOverlay)]
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        parallax::apply(&mut self.doc, client_x, client_y);
    }

    pub fn on_resize(&mut self) {
        self.particles.rebuild(&mut self.doc, &mut self.rng);
    }

    /// Visible fraction of the about section, as reported by the host's observer.
    pub fn on_about_visibility(&mut self, ratio: f64) -> Vec<Deferred<FollowUp>> {
        self.skills
            .on_visibility(&mut self.doc, ratio)
            .into_iter()
            .map(|d| d.map(FollowUp::RestoreSkill))
            .collect()
    }

    pub fn on_theme_toggle(&mut self) {
        let cue = self.theme.toggle(&mut self.doc);
        self.audio.play(cue);
    }

    // --- Contact ---

    pub fn on_message_submit(&mut self) {
        let cue = self.contact.submit(&mut self.doc);
        self.audio.play(cue);
    }

    pub fn on_close_confirmation(&mut self) {
        let cue = ContactForm::close_confirmation(&mut self.doc);
        self.audio.play(cue);
        debug!("Confirmation closed");
    }

    pub fn on_clear_form(&mut self) {
        let cue = ContactForm::clear(&mut self.doc);
        self.audio.play(cue);
    }
}
