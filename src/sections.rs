use serde::{Deserialize, Serialize};

use crate::content::Skill;

/// A section whose top is at or above this many pixels from the viewport top
/// counts as the one being read.
pub const ACTIVE_OFFSET_PX: f64 = 150.0;
/// Scroll depth after which the nav bar gets its solid background.
pub const SCROLLED_OFFSET_PX: f64 = 100.0;
/// Fraction of a section that has to be on screen to reveal it.
pub const THRESHOLD_WIDE: f64 = 0.2;
pub const THRESHOLD_TALL: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    /// Sections listed in the nav bar, in page order.
    pub const NAV: [SectionId; 6] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "HOME",
            SectionId::About => "ABOUT",
            SectionId::Education => "EDUCATION",
            SectionId::Skills => "SKILLS",
            SectionId::Projects => "PROJECTS",
            SectionId::Certifications => "CERTIFICATIONS",
            SectionId::Contact => "CONTACT",
        }
    }

    pub fn threshold(&self) -> f64 {
        match self {
            SectionId::About | SectionId::Education => THRESHOLD_WIDE,
            _ => THRESHOLD_TALL,
        }
    }
}

/// The section being read: the last one, in page order, whose top has
/// scrolled to within [`ACTIVE_OFFSET_PX`] of the viewport top.
pub fn active_section<I>(tops: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, f64)>,
{
    tops.into_iter()
        .filter(|(_, top)| *top <= ACTIVE_OFFSET_PX)
        .last()
        .map(|(id, _)| id)
}

/// Recompute the highlighted nav link. A scroll position where no section
/// qualifies (back above the first one) keeps the previous highlight.
pub fn next_active<I>(previous: Option<SectionId>, tops: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, f64)>,
{
    active_section(tops).or(previous)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

/// Where a project card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Active,
    Previous,
    Next,
    Hidden,
}

/// Project carousel cursor. Moving locks the carousel until the slide
/// animation finishes and the owner calls [`Carousel::unlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    locked: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            locked: false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns whether the carousel moved.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev(&mut self) -> bool {
        self.step(self.len.saturating_sub(1))
    }

    /// Jump straight to a card; the dot indicators use this.
    pub fn select(&mut self, index: usize) -> bool {
        if self.locked || index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        self.locked = true;
        true
    }

    fn step(&mut self, by: usize) -> bool {
        if self.locked || self.len == 0 {
            return false;
        }
        self.active = (self.active + by) % self.len;
        self.locked = true;
        true
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn slot(&self, index: usize) -> Slot {
        if self.len == 0 || index >= self.len {
            return Slot::Hidden;
        }
        if index == self.active {
            Slot::Active
        } else if index == (self.active + self.len - 1) % self.len {
            Slot::Previous
        } else if index == (self.active + 1) % self.len {
            Slot::Next
        } else {
            Slot::Hidden
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c,
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => &skill.category == c,
        }
    }
}

pub fn filter_skills<'a>(skills: &'a [Skill], filter: &CategoryFilter) -> Vec<&'a Skill> {
    skills.iter().filter(|s| filter.matches(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Accent;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            level: 80,
            accent: Accent::Green,
        }
    }

    #[test]
    fn test_active_section_last_above_offset_wins() {
        let tops = [
            (SectionId::About, -900.0),
            (SectionId::Education, -100.0),
            (SectionId::Skills, 150.0),
            (SectionId::Projects, 151.0),
            (SectionId::Certifications, 900.0),
            (SectionId::Contact, 1800.0),
        ];
        assert_eq!(active_section(tops), Some(SectionId::Skills));
    }

    #[test]
    fn test_active_section_none_at_top_of_page() {
        let tops = SectionId::NAV
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, 800.0 + i as f64 * 900.0));
        assert_eq!(active_section(tops), None);
    }

    #[test]
    fn test_next_active_keeps_previous_when_nothing_qualifies() {
        let below = SectionId::NAV.iter().map(|id| (*id, 400.0));
        assert_eq!(next_active(Some(SectionId::Skills), below), Some(SectionId::Skills));

        let below = SectionId::NAV.iter().map(|id| (*id, 400.0));
        assert_eq!(next_active(None, below), None);

        let tops = [(SectionId::About, -50.0), (SectionId::Education, 600.0)];
        assert_eq!(next_active(Some(SectionId::Skills), tops), Some(SectionId::About));
    }

    #[test]
    fn test_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(SectionId::Certifications.href(), "#certifications");
        assert_eq!(SectionId::About.threshold(), 0.2);
        assert_eq!(SectionId::Contact.threshold(), 0.1);
        assert!(!SectionId::NAV.contains(&SectionId::Hero));
    }

    #[test]
    fn test_carousel_wraps_and_locks() {
        let mut c = Carousel::new(3);
        assert_eq!(c.slot(0), Slot::Active);
        assert_eq!(c.slot(1), Slot::Next);
        assert_eq!(c.slot(2), Slot::Previous);

        assert!(!c.is_locked());
        assert!(c.prev());
        assert_eq!(c.active(), 2);
        assert!(c.is_locked());
        // ignored while the slide animation runs
        assert!(!c.next());
        assert!(!c.select(0));
        assert_eq!(c.active(), 2);

        c.unlock();
        assert!(!c.is_locked());
        assert!(c.next());
        assert_eq!(c.active(), 0);
        c.unlock();
        assert!(c.next());
        c.unlock();
        assert!(c.next());
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn test_carousel_hidden_slots() {
        let mut c = Carousel::new(5);
        c.select(2);
        let slots = (0..5).map(|i| c.slot(i)).collect::<Vec<_>>();
        assert_eq!(
            slots,
            vec![Slot::Hidden, Slot::Previous, Slot::Active, Slot::Next, Slot::Hidden]
        );
        assert_eq!(c.slot(9), Slot::Hidden);
    }

    #[test]
    fn test_carousel_select_guards() {
        let mut c = Carousel::new(3);
        assert!(!c.select(0));
        assert!(!c.select(3));
        assert!(c.select(1));
        assert!(!c.select(2));
        c.unlock();
        assert!(c.select(2));
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        assert!(!c.next());
        assert!(!c.prev());
        assert_eq!(c.slot(0), Slot::Hidden);
    }

    #[test]
    fn test_filter_skills() {
        let skills = vec![
            skill("Python", "Programming"),
            skill("Kali Linux", "OS"),
            skill("Bash", "Programming"),
        ];
        assert_eq!(filter_skills(&skills, &CategoryFilter::All).len(), 3);
        let names = filter_skills(&skills, &CategoryFilter::Only("Programming".to_string()))
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Python", "Bash"]);
        assert!(filter_skills(&skills, &CategoryFilter::Only("Web".to_string())).is_empty());
        assert_eq!(CategoryFilter::All.label(), "All");
    }
}
