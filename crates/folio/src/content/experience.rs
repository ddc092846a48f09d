use super::{Achievement, Certification, Experience, Milestone, Research};

pub static EXPERIENCE: [Experience; 1] = [Experience {
    title: "ML Engineer Intern",
    company: "Code Craft",
    duration: "2024",
    description: "Built and optimized machine learning models for predictive analysis and \
                  automated pipeline development. Worked with cross-functional teams to deploy ML \
                  solutions in production environments.",
    achievements: &[
        "Developed predictive models with 92% accuracy",
        "Automated ML pipeline reducing processing time by 40%",
        "Collaborated on 3 major client projects",
    ],
}];

pub static CERTIFICATIONS: [Certification; 1] = [Certification {
    title: "EXIN BCS AI Certificate",
    issuer: "EXIN",
    year: "2024",
    description: "Comprehensive certification covering AI fundamentals, machine learning \
                  algorithms, and ethical AI practices.",
}];

pub static RESEARCH: [Research; 1] = [Research {
    title: "A Review on the Role of Machine Learning in Enhancing Cybersecurity: Techniques, \
            Challenges, and Applications",
    status: "Yet to be published",
    description: "Comprehensive review paper examining the intersection of machine learning and \
                  cybersecurity, analyzing current techniques, identifying challenges, and \
                  proposing future applications.",
    keywords: &[
        "Machine Learning",
        "Cybersecurity",
        "Threat Detection",
        "AI Security",
    ],
}];

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Google Cloud Sprint 2.0",
        kind: "Hackathon",
        year: "2024",
        description: "Participated in Google Cloud focused development sprint",
        placement: None,
    },
    Achievement {
        title: "CodeRad 4.0",
        kind: "Hackathon",
        year: "2024",
        description: "Competitive programming and development challenge",
        placement: None,
    },
    Achievement {
        title: "Innovation Sprint Hackathon",
        kind: "Competition",
        year: "2024",
        description: "4th Place - Innovative solution development competition",
        placement: Some("4th Place"),
    },
    Achievement {
        title: "EXIN Certified AI Professional",
        kind: "Certification",
        year: "2024",
        description: "Professional certification in artificial intelligence",
        placement: None,
    },
];

pub static TIMELINE: [Milestone; 3] = [
    Milestone {
        year: "1st Year",
        title: "Foundation Building",
        description: "Mastered Python fundamentals and web technologies (HTML/CSS)",
        technologies: &["Python", "HTML", "CSS", "Programming Basics"],
    },
    Milestone {
        year: "2nd Year",
        title: "ML & Development",
        description: "Dove deep into machine learning, APIs, and built first projects",
        technologies: &[
            "Machine Learning",
            "APIs",
            "Data Science",
            "Project Development",
        ],
    },
    Milestone {
        year: "3rd Year",
        title: "Advanced Systems",
        description: "Full-stack ML projects, cloud technologies, and MLOps practices",
        technologies: &["MLOps", "Cloud Computing", "Full-Stack", "DevOps"],
    },
];
