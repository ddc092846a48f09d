use super::{Skill, SkillCategory};

const fn skill(name: &'static str, level: u8, icons: &'static [&'static str]) -> Skill {
    Skill { name, level, icons }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Languages",
        skills: &[
            skill("Python", 90, &["/python.png"]),
            skill("JavaScript", 85, &["/java-script.png"]),
            skill("HTML/CSS", 90, &["/icons8-html-5-48.png", "/icons8-css-logo-48.png"]),
            skill("R", 75, &["/icons8-r-50.png"]),
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &[
            skill("TensorFlow", 85, &["/icons8-tensorflow-48.png"]),
            skill("PyTorch", 80, &["/icons8-pytorch-50.png"]),
            skill("Django", 85, &["/icons8-django-50.png"]),
            skill("Node.js", 80, &["/icons8-node-js-50.png"]),
            skill("Scikit-learn", 90, &[]),
            skill("OpenCV", 75, &["/icons8-opencv-50.png"]),
        ],
    },
    SkillCategory {
        title: "Tools & Technologies",
        skills: &[
            skill("Docker", 85, &["/icons8-docker-logo-50.png"]),
            skill("Kubernetes", 75, &["/icons8-kubernetes-50.png"]),
            skill("Git/GitHub", 90, &["/icons8-github-50.png"]),
            skill("Jenkins", 70, &["/icons8-jenkins-48.png"]),
            skill("VS Code", 95, &["/icons8-visual-studio-code-2019-50.png"]),
            skill("Linux", 85, &["/icons8-kali-linux-48.png"]),
        ],
    },
    SkillCategory {
        title: "Database & Cloud",
        skills: &[
            skill("AWS", 80, &["/icons8-aws-logo-48.png"]),
            skill("MongoDB", 85, &["/icons8-mongodb-50.png"]),
            skill("MySQL", 80, &["/icons8-mysql-logo-50.png"]),
        ],
    },
];

pub static SOFT_SKILLS: [&str; 6] = [
    "Communication",
    "English Speaking",
    "Teamwork",
    "Adaptability",
    "Problem Solving",
    "Leadership",
];
