use super::{Heading, Highlight, Icon, Profile, SocialLink};

pub static PROFILE: Profile = Profile {
    name: "Rohan Rajora",
    role: "AI/ML & MLOps Enthusiast",
    tagline: "3rd Year Engineering Student passionate about building impactful AI/ML solutions. \
              Specializing in machine learning, cloud technologies, and MLOps to create real-world applications.",
    resume_href: "/Resume.pdf",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/rrazora02",
            icon: Icon::Github,
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/rohan-rajora-981874324/",
            icon: Icon::Linkedin,
        },
        SocialLink {
            label: "Contact",
            href: "#contact",
            icon: Icon::Mail,
        },
    ],
    about_heading: Heading {
        lead: "About ",
        accent: "Me",
        subtitle: None,
    },
    about: &[
        "I am Rohan Rajora, an ardent enthusiast in the fields of Artificial Intelligence (AI), \
         Machine Learning (ML), and MLOps, currently pursuing a Bachelor's degree in Engineering, \
         presently in my third year. My journey in the realm of technology is propelled by a \
         profound interest in artificial intelligence and its capacity to address intricate \
         real-world challenges.",
        "My expertise encompasses the development of machine learning algorithms, cloud computing \
         technologies, and backend systems, all aimed at creating scalable and impactful solutions. \
         My experience ranges from crafting predictive models to their deployment in production \
         environments, utilizing contemporary MLOps methodologies.",
        "Outside of programming, I engage in reviewing the latest AI research literature, \
         contribute to open-source projects, and participate in hackathons to explore the \
         potential of technology further.",
    ],
};

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: Icon::Brain,
        title: "AI/ML Focus",
        description: "Deep learning, neural networks, and intelligent systems",
    },
    Highlight {
        icon: Icon::Cloud,
        title: "MLOps & Cloud",
        description: "AWS, Docker, Kubernetes for scalable ML pipelines",
    },
    Highlight {
        icon: Icon::Code,
        title: "Full-Stack Dev",
        description: "Python, JavaScript, backend systems, and APIs",
    },
    Highlight {
        icon: Icon::Rocket,
        title: "Innovation",
        description: "Building impactful solutions for real-world problems",
    },
];
