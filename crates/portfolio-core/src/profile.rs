//! Static page content about the portfolio owner

/// A downloadable asset with a suggested save-as filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download {
    pub href: &'static str,
    pub filename: &'static str,
}

/// One row of the contact details list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub kind: ContactKind,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub skills: &'static [&'static str],
    pub contact_intro: &'static str,
    pub contact_details: &'static [ContactDetail],
    pub resume: Download,
    pub copyright: &'static str,
    pub built_with: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Sravan",
    brand: "Sravan's Portfolio",
    headline: "I build intelligent systems that solve real-world data challenges.",
    about: "As a Java Developer specialized in AI/ML with expertise in building end-to-end \
            solutions for computer vision, NLP, and recommendation engines. I'm passionate \
            about solving real-world problems using emerging technologies and creating \
            impactful digital experiences.",
    skills: &[
        "Java",
        "Python",
        "TensorFlow",
        "React",
        "Node.js",
        "MongoDB",
        "Docker",
        "AWS",
        "Spring Boot",
        "MySQL",
    ],
    contact_intro: "Let's discuss how we can work together to bring your ideas to life. \
                    I'm always open to new challenges and interesting collaborations.",
    contact_details: &[
        ContactDetail {
            kind: ContactKind::Email,
            value: "sravansunkara04@gmail.com",
        },
        ContactDetail {
            kind: ContactKind::Phone,
            value: "+91 6281682082",
        },
        ContactDetail {
            kind: ContactKind::Location,
            value: "Ongole, Andhra Pradesh, India",
        },
    ],
    resume: Download {
        href: "/Sravan_Resume.pdf",
        filename: "Sravan_Resume.pdf",
    },
    copyright: "\u{00A9} 2025 Sravan. All rights reserved.",
    built_with: "Built with Rust & Leptos",
};
