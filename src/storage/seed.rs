//! Bundled sample catalog for GHS Govt. PG College, Sujangarh

use crate::types::{Category, MaterialDraft, Subject, YearLevel};

const INSTITUTION: &str = "GHS Govt. PG College, Sujangarh";

struct Sample {
    title: &'static str,
    description: &'static str,
    category: Category,
    subject: Subject,
    year_level: YearLevel,
    author: &'static str,
    file: &'static str,
    cover: &'static str,
    featured: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "B.Sc. 1st Year - Mechanics and Waves",
        description: "Comprehensive textbook for B.Sc. Physics first year students covering mechanics and wave motion.",
        category: Category::Book,
        subject: Subject::Physics,
        year_level: YearLevel::BscFirstYear,
        author: "Dr. Sharma",
        file: "bsc-physics-1st-mechanics.pdf",
        cover: "photo-1636466497217-06a7271ca337",
        featured: true,
    },
    Sample {
        title: "Inorganic Chemistry Notes - B.Sc. 1st Year",
        description: "Detailed lecture notes on inorganic chemistry for first year B.Sc. students.",
        category: Category::Notes,
        subject: Subject::Chemistry,
        year_level: YearLevel::BscFirstYear,
        author: "Prof. Gupta",
        file: "bsc-chem-1st-inorganic-notes.pdf",
        cover: "photo-1603126857599-f6e157fa2fe6",
        featured: true,
    },
    Sample {
        title: "Calculus and Differential Equations - B.Sc. 1st Year",
        description: "Essential mathematics textbook for first year B.Sc. students covering calculus and differential equations.",
        category: Category::Book,
        subject: Subject::Mathematics,
        year_level: YearLevel::BscFirstYear,
        author: "Dr. Verma",
        file: "bsc-math-1st-calculus.pdf",
        cover: "photo-1635070041078-e363dbe005cb",
        featured: true,
    },
    Sample {
        title: "B.Sc. 2nd Year - Thermodynamics and Statistical Mechanics",
        description: "Comprehensive notes on thermodynamics and statistical mechanics for Physics students.",
        category: Category::Notes,
        subject: Subject::Physics,
        year_level: YearLevel::BscSecondYear,
        author: "Dr. Yadav",
        file: "bsc-physics-2nd-thermo.pdf",
        cover: "photo-1457369804613-52c61a468e7d",
        featured: true,
    },
    Sample {
        title: "Organic Chemistry - B.Sc. 2nd Year",
        description: "Complete organic chemistry textbook for second year B.Sc. students.",
        category: Category::Book,
        subject: Subject::Chemistry,
        year_level: YearLevel::BscSecondYear,
        author: "Prof. Sharma",
        file: "bsc-chem-2nd-organic.pdf",
        cover: "photo-1532094349884-543bc11b234d",
        featured: false,
    },
    Sample {
        title: "Linear Algebra and Abstract Algebra - B.Sc. 2nd Year",
        description: "Comprehensive mathematics textbook covering linear algebra and abstract algebra for second year students.",
        category: Category::Book,
        subject: Subject::Mathematics,
        year_level: YearLevel::BscSecondYear,
        author: "Dr. Singh",
        file: "bsc-math-2nd-linear-algebra.pdf",
        cover: "photo-1509228468518-180dd4864904",
        featured: false,
    },
    Sample {
        title: "B.Sc. Physics - Previous Year Papers (2023)",
        description: "Collection of previous year examination papers for B.Sc. Physics students from 2023.",
        category: Category::PastPaper,
        subject: Subject::Physics,
        year_level: YearLevel::BscThirdYear,
        author: "Examination Department",
        file: "bsc-physics-past-papers-2023.pdf",
        cover: "photo-1588072432836-e10032774350",
        featured: false,
    },
    Sample {
        title: "B.Sc. Chemistry - Previous Year Papers (2023)",
        description: "Collection of previous year examination papers for B.Sc. Chemistry students from 2023.",
        category: Category::PastPaper,
        subject: Subject::Chemistry,
        year_level: YearLevel::BscThirdYear,
        author: "Examination Department",
        file: "bsc-chemistry-past-papers-2023.pdf",
        cover: "photo-1562411052-8939603c3d46",
        featured: false,
    },
    Sample {
        title: "B.Sc. Mathematics - Previous Year Papers (2023)",
        description: "Collection of previous year examination papers for B.Sc. Mathematics students from 2023.",
        category: Category::PastPaper,
        subject: Subject::Mathematics,
        year_level: YearLevel::BscThirdYear,
        author: "Examination Department",
        file: "bsc-math-past-papers-2023.pdf",
        cover: "photo-1596495577886-d920f1fb7238",
        featured: false,
    },
    Sample {
        title: "Quantum Mechanics - B.Sc. 3rd Year",
        description: "Advanced quantum mechanics textbook for final year B.Sc. Physics students.",
        category: Category::Book,
        subject: Subject::Physics,
        year_level: YearLevel::BscThirdYear,
        author: "Dr. Kumar",
        file: "bsc-physics-3rd-quantum.pdf",
        cover: "photo-1635070041078-e363dbe005cb",
        featured: false,
    },
    Sample {
        title: "Physical Chemistry - B.Sc. 3rd Year",
        description: "Comprehensive physical chemistry notes for final year B.Sc. students.",
        category: Category::Notes,
        subject: Subject::Chemistry,
        year_level: YearLevel::BscThirdYear,
        author: "Prof. Meena",
        file: "bsc-chem-3rd-physical.pdf",
        cover: "photo-1616593873653-e516b1391238",
        featured: false,
    },
    Sample {
        title: "Real Analysis and Complex Analysis - B.Sc. 3rd Year",
        description: "Advanced mathematics textbook covering real and complex analysis for final year students.",
        category: Category::Book,
        subject: Subject::Mathematics,
        year_level: YearLevel::BscThirdYear,
        author: "Dr. Sharma",
        file: "bsc-math-3rd-analysis.pdf",
        cover: "photo-1594912772125-0f397a95f930",
        featured: false,
    },
];

/// The sample catalog as drafts, in the order they should be inserted
pub fn sample_materials() -> Vec<MaterialDraft> {
    SAMPLES
        .iter()
        .map(|s| MaterialDraft {
            title: s.title.to_string(),
            description: s.description.to_string(),
            category: s.category,
            subject: s.subject,
            year_level: Some(s.year_level),
            author: Some(s.author.to_string()),
            institution: Some(INSTITUTION.to_string()),
            file_path: format!("/files/{}", s.file),
            cover_image: format!(
                "https://images.unsplash.com/{}?auto=format&fit=crop&w=400&h=200&q=80",
                s.cover
            ),
            featured: s.featured,
        })
        .collect()
}
