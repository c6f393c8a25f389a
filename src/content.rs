//! Copy shown on the page. Nothing in here changes at runtime.

use crate::components::icons::Icon;

pub const BRAND: &str = "NEXUS";

pub const HERO_TITLE: &str = "CREATIVE";
pub const HERO_SUBTITLE: &str = "EXCELLENCE";
pub const HERO_TAGLINE: &str = "We craft extraordinary digital experiences that captivate, engage, and inspire. Where innovation meets artistry.";

pub const ABOUT_TITLE: &str = "About Nexus";
pub const ABOUT_INTRO: &str = "We are a collective of passionate creators, strategists, and innovators dedicated to pushing the boundaries of what's possible in the digital realm.";

pub const SERVICES_TITLE: &str = "Our Services";
pub const SERVICES_INTRO: &str = "From concept to launch, we provide comprehensive solutions that transform ideas into remarkable digital experiences.";

pub const CONTACT_TITLE: &str = "Let's Create Together";
pub const CONTACT_INTRO: &str = "Ready to bring your vision to life? We'd love to hear about your project.";

pub const FOOTER_TAGLINE: &str = "Crafting extraordinary digital experiences since 2019";
pub const FOOTER_COPYRIGHT: &str = "© 2024 Nexus Creative. All rights reserved.";

pub struct Feature {
    pub icon: Icon,
    /// Accent colour class for the icon.
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Zap,
        accent: "accent-yellow",
        title: "Innovation First",
        description: "We stay ahead of the curve, embracing cutting-edge technologies and methodologies to deliver groundbreaking solutions.",
    },
    Feature {
        icon: Icon::Target,
        accent: "accent-green",
        title: "Precision Focus",
        description: "Every project receives meticulous attention to detail, ensuring pixel-perfect execution and flawless user experiences.",
    },
    Feature {
        icon: Icon::Users,
        accent: "accent-blue",
        title: "Collaborative Spirit",
        description: "We believe in the power of collaboration, working closely with our clients to bring their visions to life.",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { number: "250+", label: "Projects Completed" },
    Stat { number: "50+", label: "Happy Clients" },
    Stat { number: "5", label: "Years Experience" },
    Stat { number: "99%", label: "Success Rate" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Web Development",
        description: "Cutting-edge websites and web applications built with modern technologies and best practices.",
        features: ["Responsive Design", "Performance Optimization", "SEO Ready", "Modern Frameworks"],
    },
    Service {
        title: "Brand Strategy",
        description: "Comprehensive brand development that captures your essence and resonates with your audience.",
        features: ["Brand Identity", "Visual Systems", "Messaging Strategy", "Market Positioning"],
    },
    Service {
        title: "Digital Marketing",
        description: "Data-driven marketing strategies that amplify your reach and drive meaningful engagement.",
        features: ["Social Media", "Content Strategy", "Analytics", "Campaign Management"],
    },
    Service {
        title: "UX/UI Design",
        description: "Intuitive and beautiful interfaces that prioritize user experience and conversion.",
        features: ["User Research", "Wireframing", "Prototyping", "Visual Design"],
    },
    Service {
        title: "E-commerce",
        description: "Powerful online stores that convert visitors into customers and scale with your business.",
        features: ["Payment Integration", "Inventory Management", "Mobile Commerce", "Analytics"],
    },
    Service {
        title: "Consulting",
        description: "Strategic guidance and expert advice to help you make informed decisions and achieve your goals.",
        features: ["Technology Audit", "Strategic Planning", "Process Optimization", "Growth Strategy"],
    },
];

pub struct ContactEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_ENTRIES: [ContactEntry; 3] = [
    ContactEntry { icon: Icon::Mail, label: "Email", value: "hello@nexus.design" },
    ContactEntry { icon: Icon::Phone, label: "Phone", value: "+1 (555) 123-4567" },
    ContactEntry { icon: Icon::MapPin, label: "Location", value: "San Francisco, CA" },
];
