//! Static site content: profile, navigation, and every section's entries.
//!
//! All tables are `&'static` so server render and hydration see the same
//! data, including the footer's particle layout.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Profile {
    pub site_title: &'static str,
    pub tagline: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub initials: &'static str,
    pub school: &'static str,
    pub roles: &'static [&'static str],
    pub bio: &'static [&'static str],
    pub email: &'static str,
    pub image: &'static str,
}

pub const PROFILE: Profile = Profile {
    site_title: "Divyansh Maurya | Portfolio",
    tagline: "Computer Science student at New York University. AI/ML enthusiast and problem solver.",
    name: "Divyansh Maurya",
    short_name: "Divyansh",
    initials: "DM",
    school: "New York University",
    roles: &["AI/ML Enthusiast", "Problem Solver"],
    bio: &[
        "I'm a passionate Computer Science student at New York University, driven by a deep fascination \
         for Artificial Intelligence and Machine Learning. I thrive on solving complex problems and building \
         innovative solutions that push the boundaries of what's possible with technology.",
        "With a strong foundation in programming and algorithms, I'm constantly exploring new frontiers in \
         deep learning, neural networks, and intelligent systems.",
    ],
    email: "divyansh@nyu.edu",
    image: "/images/profile.svg",
};

/// Element ids of the page sections; the section markup renders these.
pub mod section_id {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const EDUCATION: &str = "education";
    pub const EXPERIENCE: &str = "experience";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
}

/// Section anchor ids, in page order.
pub const SECTION_IDS: [&str; 7] = [
    section_id::HERO,
    section_id::ABOUT,
    section_id::EDUCATION,
    section_id::EXPERIENCE,
    section_id::ACHIEVEMENTS,
    section_id::PROJECTS,
    section_id::CONTACT,
];

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#hero" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Education", href: "#education" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Achievements", href: "#achievements" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Shorter link list shown in the footer.
pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#hero" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Inline glyphs standing in for an icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Brain,
    ChartLine,
    Tree,
    Cpu,
    Lightning,
    GraduationCap,
    Briefcase,
    MapPin,
    Calendar,
    Star,
    Award,
    Trophy,
    Medal,
    Target,
    Users,
    ArrowUpRight,
    Github,
    Linkedin,
    Envelope,
    PaperPlane,
    Heart,
    Menu,
    Close,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Brain => "🧠",
            Self::ChartLine => "📈",
            Self::Tree => "🌳",
            Self::Cpu => "🖥",
            Self::Lightning => "⚡",
            Self::GraduationCap => "🎓",
            Self::Briefcase => "💼",
            Self::MapPin => "📍",
            Self::Calendar => "📅",
            Self::Star => "⭐",
            Self::Award => "🏅",
            Self::Trophy => "🏆",
            Self::Medal => "🥇",
            Self::Target => "🎯",
            Self::Users => "👥",
            Self::ArrowUpRight => "↗",
            Self::Github => "GH",
            Self::Linkedin => "in",
            Self::Envelope => "✉",
            Self::PaperPlane => "➤",
            Self::Heart => "♥",
            Self::Menu => "☰",
            Self::Close => "✕",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "C/C++", icon: Icon::Code },
    Skill { name: "Python", icon: Icon::Code },
    Skill { name: "Problem Solving", icon: Icon::Lightning },
    Skill { name: "DSA", icon: Icon::Tree },
    Skill { name: "Machine Learning", icon: Icon::Brain },
    Skill { name: "Deep Learning", icon: Icon::Cpu },
    Skill { name: "AI", icon: Icon::ChartLine },
];

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "New York University",
        degree: "Master of Science in Computer Science",
        period: "September 2025 – May 2027",
        location: "New York City, USA",
    },
    Education {
        institution: "National Institute of Technology, Tiruchirappalli",
        degree: "Master of Computer Applications",
        period: "August 2019 – May 2022",
        location: "India",
    },
    Education {
        institution: "Banaras Hindu University",
        degree: "Bachelor of Science (Hons.) in Computer Science",
        period: "August 2015 – May 2018",
        location: "India",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Software Development Engineer",
        company: "Fastenal",
        location: "Bangalore, India",
        period: "July 2022 – March 2024",
        points: &[
            "Developed and deployed RESTful APIs with 99.9% uptime, enabling real-time data interaction and \
             third-party integrations, boosting customer engagement by 30%.",
            "Built scalable APIs consumed by multiple frontend clients and third-party systems, improving \
             customer-facing workflows and increasing engagement by 30%.",
            "Developed and maintained CI/CD pipelines using Jenkins, Docker, and TeamCity, reducing deployment \
             failures by 35% and improving release velocity.",
            "Implemented TeamCity configuration-as-code using Kotlin DSL, enabling reproducible builds and \
             operational consistency across environments.",
        ],
    },
    Experience {
        title: "Software Development Engineer Intern",
        company: "Fastenal",
        location: "Bangalore, India",
        period: "Jan. 2022 – May 2022",
        points: &[
            "Implemented backend business logic in Node.js for a distributed supply chain application, \
             leveraging asynchronous processing to reduce latency by 40%.",
            "Contributed to microservices-based architecture deployed via automated pipelines (TeamCity, \
             Octopus), increasing deployment frequency and system reliability.",
        ],
    },
    Experience {
        title: "Research Internship: Churn Prediction",
        company: "National Institute of Technology, Tiruchirappalli",
        location: "India",
        period: "May 2019 – July 2019",
        points: &[
            "Developed a predictive model using Artificial Neural Networks on customer historical data to \
             identify churn risk, segmenting customers based on their likelihood to churn.",
        ],
    },
];

pub struct Achievement {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: Icon::Star,
        title: "Technopreneur Development Program Founder",
        description: "Officially founded the Technopreneur Development Program for the Department of Computer \
                      Applications, National Institute of Technology, Tiruchirappalli (Nov. 2024) to foster \
                      entrepreneurial skills among students.",
    },
    Achievement {
        icon: Icon::Award,
        title: "Bitrex 2017 Chairman",
        description: "Bitrex was Annual Technical Fest of Institute of Science BHU which was initiated by me with \
                      a group of students of Department of Computer Science, Institute of Science, Banaras Hindu \
                      University.",
    },
    Achievement {
        icon: Icon::Trophy,
        title: "Pragyan Hackathon Finalist",
        description: "Finalist at Sangam Hackathon in Pragyan'20 and Pragyan'21 (ISO-certified Annual \
                      International Techno-Managerial Festival of NIT Trichy) under the Healthcare using AI \
                      sub-theme.",
    },
    Achievement {
        icon: Icon::Trophy,
        title: "Defenders of Time Winner - ACUMEN 2019",
        description: "'Defenders of Time' is a Competitive Programming Event organized by ACM, NIT Trichy.",
    },
    Achievement {
        icon: Icon::Award,
        title: "1st Position - Binate Faracas",
        description: "Secured 1st position in Binate Faracas at Infotrek'20, an Inter-Department Technical \
                      Symposium organized by ACM, NIT Trichy.",
    },
    Achievement {
        icon: Icon::Medal,
        title: "2nd Position - Agamya Hackathon",
        description: "Achieved 2nd position in Agamya at Technofania'20, an Inter-Department Software Hackathon \
                      organized by the Open Source Open Community, NIT Trichy.",
    },
    Achievement {
        icon: Icon::Target,
        title: "All India Rank 76 - NIMCET 2019",
        description: "Secured All India Rank 76 in NIMCET 2019 (NIT MCA Common Entrance Test).",
    },
    Achievement {
        icon: Icon::Medal,
        title: "National Level Skating",
        description: "Played at National level twice in skating and won two Gold Medals at the Regional level.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub icon: Icon,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Brain-Controlled Wheelchair",
        description: "Mind-controlled mobility using EEG signals, enabling hands-free wheelchair navigation \
                      through brain activity.",
        image: "/images/project-1.svg",
        tags: &["EEG", "Deep Learning", "Signal Processing", "Python"],
        icon: Icon::Brain,
        link: None,
    },
    Project {
        title: "AI Workforce Digital Twin",
        description: "Simulating leadership pipelines and succession planning using AI-driven workforce modeling.",
        image: "/images/project-2.svg",
        tags: &["AI", "Simulation", "HR Analytics", "Machine Learning"],
        icon: Icon::Users,
        link: Some("https://attritionsimulation1.streamlit.app/"),
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub external: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com", icon: Icon::Github, external: true },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com", icon: Icon::Linkedin, external: true },
    SocialLink { label: "Email", href: "mailto:divyansh@nyu.edu", icon: Icon::Envelope, external: false },
];

// =============================================================================
// FOOTER PARTICLES
// =============================================================================

pub const FOOTER_PARTICLE_COUNT: usize = 15;

/// Placement and drift of one decorative footer particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
    pub drift_x_px: f64,
    pub drift_y_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    /// Inline style: placement plus the custom properties read by the
    /// `particle-drift` keyframes.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; opacity: {:.2}; \
             --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct,
            self.top_pct,
            self.opacity,
            self.drift_x_px,
            self.drift_y_px,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

/// Fixed seed so SSR and hydration lay the particles out identically.
const PARTICLE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Footer particle layout: sizes 2-6 px, opacity 0.2-0.7, drift of up to
/// 20 px sideways and 30 px vertically over 3-6 s, staggered by 0.2 s.
#[must_use]
pub fn footer_particles(count: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let delay_s = i as f64 * 0.2;
            Particle {
                size_px: rng.random_range(2.0..6.0),
                left_pct: rng.random_range(0.0..100.0),
                top_pct: rng.random_range(0.0..100.0),
                opacity: rng.random_range(0.2..0.7),
                drift_x_px: rng.random_range(-20.0..20.0),
                drift_y_px: rng.random_range(-30.0..30.0),
                duration_s: rng.random_range(3.0..6.0),
                delay_s,
            }
        })
        .collect()
}
