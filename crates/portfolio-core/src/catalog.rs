//! Built-in project catalog

use crate::project::{ProjectEntry, ProjectLists};

pub static FEATURED_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "AutoSight - Real-Time Indian Vehicle Classification and Detection",
        description: "Developed a real-time vehicle detection and classification system using YOLO and a Deep learning model",
        technologies: &["Yolo", "Mobilevit", "OpenCV", "Flask", "TensorFlow"],
        features: &[
            "Two-stage deep learning pipeline boosting efficiency of model",
            "Lightweight YOLOv8n detector",
            "Fine-grained classification across 12 distinct vehicle classes",
            "Real-time multi-vehicle predictions in a single frame",
        ],
        github_url: "https://github.com/Sravan94-git/Indian-Vehicle-Detection-and-Classification",
    },
    ProjectEntry {
        id: 2,
        title: "FinanceShield \u{2013} Loan Defaulter System",
        description: "Architected a pipeline for credit risk analysis that analyzes a dataset of 1,000,000 individuals to predict defaults and minimize institutional loss.",
        technologies: &["Scikit-learn", "PySpark", "Hadoop", "Python"],
        features: &[
            "Predictive risk modeling",
            "Large dataset processing",
            "Institutional loss minimization",
        ],
        github_url: "https://github.com/Sravan94-git/Credit-Risk-Analysis",
    },
];

pub static OTHER_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "CineSense",
        description: "An intelligent movie recommendation system that analyzes the sentiment of user reviews to generate more meaningful and accurate movie suggestions.",
        technologies: &["Python", "Flask", "Scikit-learn", "BeautifulSoup", "TMDB API"],
        features: &[],
        github_url: "https://github.com/Sravan94-git/Movie-Recommendation-System",
    },
    ProjectEntry {
        id: 2,
        title: "Early Alzheimers Stage Classification using Deep Learning",
        description: "A deep learning project to identify and categorize the early stages of Alzheimer's disease using medical imaging data.",
        technologies: &["Python", "TensorFlow", "Keras", "Scikit-learn", "Pandas"],
        features: &[],
        github_url: "https://github.com/Sravan94-git/Alzheimers-disease-detection",
    },
    ProjectEntry {
        id: 3,
        title: "Domain Classification of Legal Documents",
        description: "A machine learning project to automatically classify legal documents into their respective domains using NLP techniques.",
        technologies: &["Python", "Scikit-learn", "NLTK", "Pandas"],
        features: &[],
        github_url: "https://github.com/Sravan94-git/Domain-classification-of-legal-documents",
    },
    ProjectEntry {
        id: 4,
        title: "Real-Time Language Translator",
        description: "A web application that translates spoken or written language in real-time using web APIs.",
        technologies: &["JavaScript", "HTML5", "CSS3", "Web Speech API", "Translation API"],
        features: &[],
        github_url: "https://github.com/Sravan94-git/Real-Time-Language-Translator",
    },
];

/// The catalog compiled into the page
pub fn builtin() -> ProjectLists {
    ProjectLists::new(FEATURED_PROJECTS, OTHER_PROJECTS)
}
