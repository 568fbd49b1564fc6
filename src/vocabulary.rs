//! The fixed set of skill phrases recognized in job descriptions.
//!
//! Matching is case-insensitive against the canonical spellings below;
//! parenthesised abbreviations like "(CNN)" are part of the phrase and
//! match literally.

pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Scikit-learn",
    "NumPy",
    "Pandas",
    "Data Analysis",
    "Data Visualization",
    "Algorithms",
    "Statistics",
    "Linear Algebra",
    "Probability Theory",
    "Neural Networks",
    "Convolutional Neural Networks (CNN)",
    "Recurrent Neural Networks (RNN)",
    "LSTM",
    "Natural Language Processing (NLP)",
    "Computer Vision",
    "Reinforcement Learning",
    "Optimization",
    "Data Mining",
    "Feature Engineering",
    "Big Data",
    "Apache Spark",
    "Hadoop",
    "SQL",
    "NoSQL",
    "Data Warehousing",
    "Cloud Computing",
    "AWS",
    "Microsoft Azure",
    "Google Cloud Platform",
    "API Development",
    "Model Deployment",
    "Model Evaluation",
    "A/B Testing",
    "Experimentation",
    "Software Development Lifecycle",
    "Version Control (Git)",
    "Object-Oriented Programming",
    "Data Structures",
    "Design Patterns",
    "Agile Methodologies",
    "DevOps",
    "Containerization (Docker)",
    "Kubernetes",
    "Microservices",
    "C++",
    "Java",
    "R Programming",
    "Julia",
    "Scripting",
    "Data Cleaning",
    "Feature Selection",
    "Hyperparameter Tuning",
    "Ensemble Methods",
    "Decision Trees",
    "Random Forest",
    "Gradient Boosting",
    "XGBoost",
    "LightGBM",
    "CatBoost",
    "Probabilistic Models",
    "Bayesian Inference",
    "Simulation",
    "Experimental Design",
    "Dimensionality Reduction",
    "Principal Component Analysis (PCA)",
    "Singular Value Decomposition (SVD)",
    "Matrix Factorization",
    "Collaborative Filtering",
    "Recommender Systems",
    "Transfer Learning",
    "Generative Adversarial Networks (GANs)",
    "Autoencoders",
    "Time Series Analysis",
    "Forecasting",
    "Signal Processing",
    "Speech Recognition",
    "Robotics",
    "Cognitive Computing",
    "Ethics in AI",
    "Explainable AI (XAI)",
    "Data Privacy",
    "Security",
    "Edge Computing",
    "Embedded Systems",
    "Computer Architecture",
    "Real-Time Systems",
    "Distributed Systems",
    "High-Performance Computing",
    "Parallel Computing",
    "Simulation and Modeling",
    "Research Methodologies",
    "Scientific Computing",
    "Critical Thinking",
    "Problem Solving",
];

/// The built-in vocabulary as owned strings, in declaration order.
pub fn default_vocabulary() -> Vec<String> {
    SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for phrase in SKILL_VOCABULARY {
            assert!(seen.insert(phrase.to_lowercase()), "duplicate: {phrase}");
        }
    }

    #[test]
    fn vocabulary_keeps_overlapping_entries_separate() {
        assert!(SKILL_VOCABULARY.contains(&"SQL"));
        assert!(SKILL_VOCABULARY.contains(&"NoSQL"));
    }
}
