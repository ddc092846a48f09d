use super::{ContactInfo, Footer, Gradient, Icon, SocialLink};

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        icon: Icon::Mail,
        title: "Email",
        value: "rohan.rajora@example.com",
        description: "Drop me a line anytime",
        gradient: Gradient {
            from: "#3b82f6",
            to: "#06b6d4",
        },
    },
    ContactInfo {
        icon: Icon::Discord,
        title: "Discord",
        value: "rohanrajora#1234",
        description: "Let's chat on Discord",
        gradient: Gradient {
            from: "#a855f7",
            to: "#6366f1",
        },
    },
    ContactInfo {
        icon: Icon::Linkedin,
        title: "LinkedIn",
        value: "/in/rohan-rajora",
        description: "Connect professionally",
        gradient: Gradient {
            from: "#2563eb",
            to: "#1d4ed8",
        },
    },
];

pub static CONTACT_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Discord",
        href: "#",
        icon: Icon::Discord,
    },
];

pub static FOOTER_SOCIALS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Discord",
        href: "#",
        icon: Icon::Discord,
    },
    SocialLink {
        label: "Email",
        href: "#contact",
        icon: Icon::Mail,
    },
];

pub static FOOTER: Footer = Footer {
    blurb: "AI/ML & MLOps Enthusiast passionate about building impactful solutions with \
            cutting-edge technology. Always learning, always building.",
    email: "rohan.rajora@example.com",
    availability: "Available for freelance work",
    call_to_action: "Let's Connect",
    copyright: "© 2024 Rohan Rajora. Made with ♥ and lots of ☕",
};
