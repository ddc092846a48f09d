use super::{Gradient, Tech, TechCategory};

const GREEN: &str = "#4ade80";
const LIME: &str = "#84cc16";
const TEAL: &str = "#14b8a6";
const CYAN: &str = "#06b6d4";
const BLUE_LIGHT: &str = "#60a5fa";
const BLUE: &str = "#3b82f6";
const PURPLE_LIGHT: &str = "#c084fc";
const PURPLE: &str = "#a855f7";
const PINK: &str = "#ec4899";
const RED_LIGHT: &str = "#f87171";
const RED: &str = "#ef4444";
const ORANGE_LIGHT: &str = "#fb923c";
const ORANGE: &str = "#f97316";
const YELLOW_LIGHT: &str = "#facc15";
const YELLOW: &str = "#eab308";
const GRAY_LIGHT: &str = "#9ca3af";
const GRAY: &str = "#4b5563";
const BLACK: &str = "#000000";

const fn tech(name: &'static str, icon: &'static str, from: &'static str, to: &'static str) -> Tech {
    Tech {
        name,
        icon,
        gradient: Gradient { from, to },
    }
}

pub static TECH_STACK: [TechCategory; 6] = [
    TechCategory {
        title: "Languages",
        technologies: &[
            tech("Python", "🐍", GREEN, BLUE),
            tech("JavaScript", "🟨", YELLOW_LIGHT, ORANGE),
            tech("HTML/CSS", "🌐", ORANGE_LIGHT, RED),
            tech("R", "📊", BLUE_LIGHT, PURPLE),
        ],
    },
    TechCategory {
        title: "AI/ML Frameworks",
        technologies: &[
            tech("TensorFlow", "🔥", ORANGE_LIGHT, RED),
            tech("PyTorch", "⚡", RED_LIGHT, PINK),
            tech("Scikit-learn", "🤖", BLUE_LIGHT, TEAL),
            tech("OpenCV", "👁️", GREEN, BLUE),
            tech("NumPy", "🔢", BLUE_LIGHT, PURPLE),
            tech("Pandas", "🐼", PURPLE_LIGHT, PINK),
        ],
    },
    TechCategory {
        title: "Web Development",
        technologies: &[
            tech("Django", "🎸", GREEN, TEAL),
            tech("Node.js", "🟢", GREEN, LIME),
            tech("Flask", "🌶️", GRAY_LIGHT, GRAY),
            tech("React", "⚛️", BLUE_LIGHT, CYAN),
        ],
    },
    TechCategory {
        title: "DevOps & Cloud",
        technologies: &[
            tech("Docker", "🐳", BLUE_LIGHT, CYAN),
            tech("Kubernetes", "☸️", BLUE_LIGHT, PURPLE),
            tech("AWS", "☁️", ORANGE_LIGHT, YELLOW),
            tech("Jenkins", "🔧", GRAY_LIGHT, BLUE),
        ],
    },
    TechCategory {
        title: "Development Tools",
        technologies: &[
            tech("VS Code", "💻", BLUE_LIGHT, PURPLE),
            tech("Git/GitHub", "🔀", GRAY_LIGHT, BLACK),
            tech("Jupyter", "📓", ORANGE_LIGHT, RED),
            tech("Anaconda", "🐍", GREEN, TEAL),
            tech("Linux", "🐧", GRAY_LIGHT, BLACK),
        ],
    },
    TechCategory {
        title: "Databases",
        technologies: &[
            tech("MongoDB", "🍃", GREEN, TEAL),
            tech("MySQL", "🐬", BLUE_LIGHT, ORANGE),
            tech("PostgreSQL", "🐘", BLUE_LIGHT, PURPLE),
        ],
    },
];
