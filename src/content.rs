// Static copy for the landing page.

pub const OWNER_NAME: &str = "Garry Man";
pub const ROLE: &str = "Web Developer";
pub const TAGLINE: &str = "I craft clean, efficient websites with a focus on simplicity and performance. Let's build something great.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [Link; 4] = [
    Link { label: "Home", href: "#" },
    Link { label: "Projects", href: "#" },
    Link { label: "Resume", href: "#" },
    Link { label: "Contact", href: "#" },
];

pub const RESUME_CTA: Link = Link {
    label: "View Resume",
    href: "#",
};

pub const CONTACT_CTA: Link = Link {
    label: "Contact Me",
    href: "#",
};
