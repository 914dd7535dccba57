//! Copy and card data for the landing page. Nothing here changes at runtime.

use crate::config;

/// Image file names, resolved with `config::asset_url`.
pub const HERO_IMAGE: &str = "21d0460b-991b-415d-a20f-feb6a9c13fa8.jpg";
pub const PORTRAIT_IMAGE: &str = "b39b27d4-33a1-4eb8-8422-cc6e91c009d3.jpg";
pub const RESULTS_IMAGE: &str = "placeholder.svg";

pub const PRACTITIONER: &str = "Elena Sergeevna";
pub const PHONE: &str = "+7 (999) 123-45-67";
pub const EMAIL: &str = "therapy@example.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Waves,
    Leaf,
    Check,
    Award,
    Heart,
    Star,
    Instagram,
    MessageCircle,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sparkles => "✨",
            Icon::Waves => "🌊",
            Icon::Leaf => "🍃",
            Icon::Check => "✓",
            Icon::Award => "🏅",
            Icon::Heart => "❤",
            Icon::Star => "★",
            Icon::Instagram => "📷",
            Icon::MessageCircle => "💬",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    /// Number of stars, 1 to 5.
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Sparkles,
        title: "Visceral therapy",
        description: "Gentle work with the internal organs to release emotional blocks and restore the body's natural rhythm",
    },
    Service {
        icon: Icon::Waves,
        title: "Myofascial release",
        description: "Deep work with fascia and muscles to let go of accumulated tension and traumatic experience",
    },
    Service {
        icon: Icon::Leaf,
        title: "Energy massage",
        description: "Restoring the flow of energy in the body through special techniques and point pressure",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit { text: "Relief from chronic pain and tension" },
    Benefit { text: "A calmer, steadier emotional state" },
    Benefit { text: "Renewed energy and vitality" },
    Benefit { text: "Working through psychosomatic blocks" },
    Benefit { text: "Inner balance and harmony" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Marina",
        text: "After three sessions the back pain I had lived with for years was gone. I finally sleep through the night.",
        rating: 5,
    },
    Testimonial {
        name: "Dmitry",
        text: "I came in skeptical and left lighter than I have felt in a long time. Calm, attentive, professional.",
        rating: 5,
    },
    Testimonial {
        name: "Olga",
        text: "The visceral work helped with the tightness I carried since a stressful year. Highly recommend.",
        rating: 4,
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate { title: "Visceral chiropractic", issuer: "School of Applied Kinesiology", year: 2014 },
    Certificate { title: "Myofascial release techniques", issuer: "Institute of Manual Therapy", year: 2016 },
    Certificate { title: "Psychosomatic body work", issuer: "Center for Body-Oriented Therapy", year: 2018 },
    Certificate { title: "Classical and therapeutic massage", issuer: "Medical College No. 1", year: 2012 },
];

pub const HIGHLIGHTS: &[(Icon, &str)] = &[(Icon::Award, "Certification"), (Icon::Heart, "500+ clients")];

pub const WORKING_HOURS: &[&str] = &["Mon–Fri: 10:00 – 20:00", "Sat–Sun: 11:00 – 18:00"];

pub const SOCIAL_LINKS: &[(Icon, &str)] = &[(Icon::Instagram, "Instagram"), (Icon::MessageCircle, "Messenger")];

/// Inline style delaying the entrance animation of the `index`-th card.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * config::STAGGER_STEP_SECS)
}

/// One star per rating point, clamped to what the card has room for.
pub fn stars(rating: u8) -> String {
    Icon::Star.glyph().repeat(usize::from(rating.clamp(1, 5)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_staggered_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_delay(1), "animation-delay: 0.1s;");
        assert_eq!(stagger_delay(2), "animation-delay: 0.2s;");
    }

    #[test]
    fn stars_follow_rating_and_stay_in_range() {
        assert_eq!(stars(4), "★★★★");
        assert_eq!(stars(0), "★");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn ratings_are_small_positive_numbers() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn lists_are_populated() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(BENEFITS.len(), 5);
        assert!(!TESTIMONIALS.is_empty());
        assert!(!CERTIFICATES.is_empty());
        assert!(SERVICES.iter().all(|s| !s.title.is_empty() && !s.description.is_empty()));
    }
}
