use super::{Project, ProjectKind};

pub static MAJOR_PROJECTS: [Project; 3] = [
    Project {
        title: "Movie Recommendation System",
        description: "A comprehensive movie recommendation website built with Flask, utilizing \
                      machine learning algorithms for personalized recommendations.",
        long_description: Some(
            "This project implements collaborative filtering and content-based filtering \
             algorithms to provide accurate movie recommendations. Built with Flask for the \
             backend, it uses Scikit-learn for ML models, Pandas for data manipulation, and NumPy \
             for numerical computations. The system analyzes user preferences and movie metadata \
             to suggest relevant films.",
        ),
        technologies: &[
            "Flask",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "Python",
            "HTML/CSS",
            "JavaScript",
        ],
        image: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=800",
        github: "#",
        demo: Some("#"),
        kind: ProjectKind::Major,
    },
    Project {
        title: "Breast Cancer Detection Model",
        description: "ML-powered desktop application using Tkinter for early breast cancer \
                      detection with high accuracy predictive modeling.",
        long_description: Some(
            "A comprehensive machine learning solution for breast cancer detection using various \
             ML algorithms including SVM, Random Forest, and Neural Networks. The desktop \
             application features an intuitive Tkinter GUI for easy interaction, data \
             visualization capabilities, and detailed prediction reports with confidence scores.",
        ),
        technologies: &[
            "Python",
            "Tkinter",
            "Scikit-learn",
            "TensorFlow",
            "Pandas",
            "Matplotlib",
            "NumPy",
        ],
        image: "https://images.pexels.com/photos/4386321/pexels-photo-4386321.jpeg?auto=compress&cs=tinysrgb&w=800",
        github: "#",
        demo: Some("#"),
        kind: ProjectKind::Major,
    },
    Project {
        title: "Bitcoin & Gold Price Predictor",
        description: "Advanced time series forecasting model for cryptocurrency and precious \
                      metals price prediction using deep learning.",
        long_description: Some(
            "This project implements LSTM networks and other time series forecasting techniques \
             to predict Bitcoin and Gold prices. Features include real-time data fetching, \
             technical indicators analysis, multiple model comparison, and interactive charts for \
             visualization. The system provides confidence intervals and risk assessment for \
             predictions.",
        ),
        technologies: &[
            "Python",
            "TensorFlow",
            "LSTM",
            "Pandas",
            "Matplotlib",
            "yfinance",
            "Streamlit",
        ],
        image: "https://images.pexels.com/photos/730564/pexels-photo-730564.jpeg?auto=compress&cs=tinysrgb&w=800",
        github: "#",
        demo: Some("#"),
        kind: ProjectKind::Major,
    },
];

const fn minor(
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    image: &'static str,
) -> Project {
    Project {
        title,
        description,
        long_description: None,
        technologies,
        image,
        github: "#",
        demo: None,
        kind: ProjectKind::Minor,
    }
}

pub static MINOR_PROJECTS: [Project; 5] = [
    minor(
        "Weather API App",
        "Real-time weather application with location-based forecasts",
        &["Python", "API Integration", "Tkinter"],
        "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    minor(
        "Number Memory Game",
        "Interactive memory training game with progressive difficulty",
        &["JavaScript", "HTML", "CSS"],
        "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    minor(
        "House Price Predictor",
        "ML model for real estate price prediction",
        &["Python", "Scikit-learn", "Pandas"],
        "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    minor(
        "CLI Calculator",
        "Advanced command-line calculator with scientific functions",
        &["Python", "CLI"],
        "https://images.pexels.com/photos/6424994/pexels-photo-6424994.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    minor(
        "Name Reversing App",
        "Simple utility app for text manipulation and reversal",
        &["Python", "Tkinter"],
        "https://images.pexels.com/photos/267507/pexels-photo-267507.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
];
